use super::allocation::AllocationResult;
use super::domain::LotteryRecord;
use super::selection::CitySelection;
use serde::Serialize;
use std::collections::HashMap;

/// Probability of winning at least one of several lotteries.
///
/// Assumes every lottery is decided independently. Lotteries run by the same
/// authority in overlapping windows are not guaranteed to be, so treat the
/// result as an approximation.
pub fn combine_independent<I>(probabilities: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let miss_all = probabilities
        .into_iter()
        .fold(1.0, |acc, probability| acc * (1.0 - probability));
    (1.0 - miss_all).clamp(0.0, 1.0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CityProbability {
    pub city: String,
    pub lotteries: usize,
    pub probability: f64,
}

/// Per-city combined probabilities, ordered by first appearance in the dataset.
#[derive(Debug, Clone, Default)]
pub struct CityOdds {
    entries: Vec<CityProbability>,
    index: HashMap<String, usize>,
}

impl CityOdds {
    pub fn get(&self, city: &str) -> Option<&CityProbability> {
        self.index.get(city).map(|&slot| &self.entries[slot])
    }

    /// Combined probability for `city`, or 0 when the dataset has no lottery there.
    pub fn probability(&self, city: &str) -> f64 {
        self.get(city).map_or(0.0, |entry| entry.probability)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CityProbability> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn per_city<'a, I>(results: I) -> CityOdds
where
    I: IntoIterator<Item = (&'a LotteryRecord, &'a AllocationResult)>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut grouped: Vec<(String, Vec<f64>)> = Vec::new();

    for (record, result) in results {
        let slot = *index.entry(record.city.clone()).or_insert_with(|| {
            grouped.push((record.city.clone(), Vec::new()));
            grouped.len() - 1
        });
        grouped[slot].1.push(result.win_probability);
    }

    let entries = grouped
        .into_iter()
        .map(|(city, probabilities)| CityProbability {
            city,
            lotteries: probabilities.len(),
            probability: combine_independent(probabilities),
        })
        .collect();

    CityOdds { entries, index }
}

pub fn overall_selection(per_city: &CityOdds, selection: &CitySelection) -> f64 {
    combine_independent(selection.iter().map(|city| per_city.probability(city)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lottery::allocation::allocate;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-12,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn combine_handles_empty_and_single_inputs() {
        assert_eq!(combine_independent(Vec::new()), 0.0);
        assert_close(combine_independent([0.37]), 0.37);
        assert_close(combine_independent([0.25, 0.25]), 1.0 - 0.75 * 0.75);
    }

    #[test]
    fn combine_three_lotteries() {
        assert_close(combine_independent([0.1, 0.2, 0.3]), 0.496);
        assert_close(combine_independent([0.3, 0.1, 0.2]), 0.496);
    }

    #[test]
    fn certain_win_dominates() {
        assert_eq!(combine_independent([0.2, 1.0, 0.4]), 1.0);
    }

    fn records() -> Vec<LotteryRecord> {
        vec![
            LotteryRecord::new("A", "Tel Aviv", 10, 100),
            LotteryRecord::new("B", "Haifa", 30, 100),
            LotteryRecord::new("C", "Tel Aviv", 20, 100),
        ]
    }

    #[test]
    fn per_city_groups_in_first_appearance_order() {
        let records = records();
        let results: Vec<_> = records.iter().map(allocate).collect();
        let odds = per_city(records.iter().zip(results.iter()));

        let cities: Vec<_> = odds.iter().map(|entry| entry.city.as_str()).collect();
        assert_eq!(cities, vec!["Tel Aviv", "Haifa"]);

        let tel_aviv = odds.get("Tel Aviv").expect("tel aviv present");
        assert_eq!(tel_aviv.lotteries, 2);
        assert_close(tel_aviv.probability, 1.0 - 0.9 * 0.8);
        assert_close(odds.probability("Haifa"), 0.3);
        assert_eq!(odds.probability("Eilat"), 0.0);
    }

    #[test]
    fn overall_selection_combines_selected_cities_only() {
        let records = records();
        let results: Vec<_> = records.iter().map(allocate).collect();
        let odds = per_city(records.iter().zip(results.iter()));

        let mut selection = CitySelection::new();
        assert_eq!(overall_selection(&odds, &selection), 0.0);

        selection.add("Haifa").expect("room");
        assert_close(overall_selection(&odds, &selection), 0.3);

        selection.add("Eilat").expect("room");
        assert_close(overall_selection(&odds, &selection), 0.3);

        selection.add("Tel Aviv").expect("room");
        assert_close(
            overall_selection(&odds, &selection),
            1.0 - 0.7 * (0.9 * 0.8),
        );
    }
}
