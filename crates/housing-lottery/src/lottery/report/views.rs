use super::super::domain::Category;
use serde::Serialize;

/// Reservation and outcome for one category of one lottery.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryView {
    pub category: Category,
    pub category_label: &'static str,
    pub houses: u64,
    pub applicants: u64,
    pub available: u64,
    pub used: u64,
    pub unclaimed: u64,
    pub overflow: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct LotteryRow {
    pub name: String,
    pub city: String,
    pub total_houses: u64,
    pub applicants: u64,
    pub general_pool_houses: u64,
    pub competitors: u64,
    pub win_probability: f64,
    pub win_probability_label: String,
    pub categories: Vec<CategoryView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CityRow {
    pub city: String,
    pub lotteries: usize,
    pub probability: f64,
    pub probability_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct OverallRow {
    pub cities: Vec<String>,
    pub probability: f64,
    pub probability_label: String,
}

impl OverallRow {
    pub fn detail(&self) -> String {
        if self.cities.is_empty() {
            "—".to_string()
        } else {
            self.cities.join(" | ")
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DatasetStats {
    pub lotteries: usize,
    pub cities: usize,
    pub total_applicants: u64,
    pub total_houses: u64,
}
