use super::super::aggregate::{overall_selection, per_city};
use super::super::allocation::allocate;
use super::super::domain::LotteryRecord;
use super::super::selection::CitySelection;
use super::format::format_pct;
use super::views::{CategoryView, CityRow, DatasetStats, LotteryRow, OverallRow};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Name,
    City,
    TotalHouses,
    Applicants,
    GeneralPool,
    Competitors,
    Probability,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Everything the presentation layer shows for one dataset and selection.
#[derive(Debug, Clone, Serialize)]
pub struct LotteryReport {
    pub stats: DatasetStats,
    pub lotteries: Vec<LotteryRow>,
    pub cities: Vec<CityRow>,
    pub overall: OverallRow,
}

impl LotteryReport {
    pub fn build(records: &[LotteryRecord], selection: &CitySelection) -> Self {
        let results: Vec<_> = records.iter().map(allocate).collect();

        let lotteries = records
            .iter()
            .zip(results.iter())
            .map(|(record, result)| LotteryRow {
                name: record.name.clone(),
                city: record.city.clone(),
                total_houses: record.total_houses,
                applicants: record.applicants,
                general_pool_houses: result.general_pool_houses,
                competitors: result.total_competitors,
                win_probability: result.win_probability,
                win_probability_label: format_pct(result.win_probability),
                categories: result
                    .categories
                    .iter()
                    .map(|outcome| {
                        let quota = record.quota(outcome.category);
                        CategoryView {
                            category: outcome.category,
                            category_label: outcome.category.label(),
                            houses: quota.houses,
                            applicants: quota.applicants,
                            available: outcome.available,
                            used: outcome.used,
                            unclaimed: outcome.unclaimed,
                            overflow: outcome.overflow,
                        }
                    })
                    .collect(),
            })
            .collect();

        let odds = per_city(records.iter().zip(results.iter()));
        let cities = odds
            .iter()
            .map(|entry| CityRow {
                city: entry.city.clone(),
                lotteries: entry.lotteries,
                probability: entry.probability,
                probability_label: format_pct(entry.probability),
            })
            .collect();

        let overall_probability = overall_selection(&odds, selection);
        let overall = OverallRow {
            cities: selection.iter().map(str::to_string).collect(),
            probability: overall_probability,
            probability_label: format_pct(overall_probability),
        };

        Self {
            stats: DatasetStats::from_records(records),
            lotteries,
            cities,
            overall,
        }
    }

    pub fn sort_lotteries(&mut self, key: SortKey, direction: SortDirection) {
        self.lotteries.sort_by(|a, b| {
            let ordering = compare_rows(a, b, key);
            match direction {
                SortDirection::Ascending => ordering,
                SortDirection::Descending => ordering.reverse(),
            }
        });
    }
}

fn compare_rows(a: &LotteryRow, b: &LotteryRow, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => compare_text(&a.name, &b.name),
        SortKey::City => compare_text(&a.city, &b.city),
        SortKey::TotalHouses => a.total_houses.cmp(&b.total_houses),
        SortKey::Applicants => a.applicants.cmp(&b.applicants),
        SortKey::GeneralPool => a.general_pool_houses.cmp(&b.general_pool_houses),
        SortKey::Competitors => a.competitors.cmp(&b.competitors),
        SortKey::Probability => a.win_probability.total_cmp(&b.win_probability),
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

impl DatasetStats {
    pub fn from_records(records: &[LotteryRecord]) -> Self {
        let cities: HashSet<&str> = records.iter().map(|record| record.city.as_str()).collect();
        Self {
            lotteries: records.len(),
            cities: cities.len(),
            total_applicants: records
                .iter()
                .fold(0u64, |acc, record| acc.saturating_add(record.applicants)),
            total_houses: records
                .iter()
                .fold(0u64, |acc, record| acc.saturating_add(record.total_houses)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<LotteryRecord> {
        vec![
            LotteryRecord::new("beta", "Tel Aviv", 10, 100),
            LotteryRecord::new("Alpha", "Haifa", 50, 100),
            LotteryRecord::new("gamma", "Tel Aviv", 0, 100),
        ]
    }

    #[test]
    fn build_produces_rows_for_every_lottery_and_city() {
        let mut selection = CitySelection::new();
        selection.add("Haifa").expect("room");
        let report = LotteryReport::build(&records(), &selection);

        assert_eq!(report.lotteries.len(), 3);
        assert_eq!(report.lotteries[0].win_probability_label, "10.00%");
        assert_eq!(report.lotteries[0].categories.len(), 4);
        assert_eq!(report.cities.len(), 2);
        assert_eq!(report.cities[0].city, "Tel Aviv");
        assert_eq!(report.cities[0].lotteries, 2);
        assert_eq!(report.overall.cities, vec!["Haifa".to_string()]);
        assert_eq!(report.overall.probability_label, "50.00%");
        assert_eq!(report.overall.detail(), "Haifa");
        assert_eq!(
            report.stats,
            DatasetStats {
                lotteries: 3,
                cities: 2,
                total_applicants: 300,
                total_houses: 60,
            }
        );
    }

    #[test]
    fn lottery_rows_carry_category_breakdown() {
        use super::super::super::domain::Category;

        let records = vec![LotteryRecord::new("Harbor", "Haifa", 90, 600)
            .with_quota(Category::CombatVeteran, 5, 2)
            .with_quota(Category::ReserveDuty, 8, 3)];
        let report = LotteryReport::build(&records, &CitySelection::new());
        let reserve = report.lotteries[0]
            .categories
            .iter()
            .find(|view| view.category == Category::ReserveDuty)
            .expect("reserve duty view");

        assert_eq!(reserve.category_label, "Reserve Duty");
        assert_eq!(reserve.houses, 8);
        assert_eq!(reserve.available, 11);
        assert_eq!(reserve.unclaimed, 8);

        let json = serde_json::to_value(&report).expect("report serialises");
        assert_eq!(
            json["lotteries"][0]["categories"][1]["category"],
            "combat_veteran"
        );
    }

    #[test]
    fn empty_selection_reports_zero_overall() {
        let report = LotteryReport::build(&records(), &CitySelection::new());
        assert_eq!(report.overall.probability, 0.0);
        assert_eq!(report.overall.detail(), "—");
    }

    #[test]
    fn sorting_by_name_ignores_case() {
        let mut report = LotteryReport::build(&records(), &CitySelection::new());
        report.sort_lotteries(SortKey::Name, SortDirection::Ascending);
        let names: Vec<_> = report.lotteries.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta", "gamma"]);
    }

    #[test]
    fn sorting_by_probability_descending() {
        let mut report = LotteryReport::build(&records(), &CitySelection::new());
        report.sort_lotteries(SortKey::Probability, SortDirection::Descending);
        let names: Vec<_> = report.lotteries.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, vec!["Alpha", "beta", "gamma"]);
    }
}
