use super::domain::LotteryRecord;
use super::report::LotteryReport;
use super::selection::{CitySelection, SelectionError};
use std::collections::BTreeSet;
use tracing::debug;

/// Owns the loaded dataset and the applicant's city selection.
///
/// Reports are rebuilt from scratch on every call; nothing is cached.
#[derive(Debug, Default)]
pub struct LotterySession {
    records: Vec<LotteryRecord>,
    selection: CitySelection,
}

impl LotterySession {
    pub fn new(records: Vec<LotteryRecord>) -> Self {
        Self {
            records,
            selection: CitySelection::new(),
        }
    }

    /// Replaces the dataset. Any previous selection is dropped.
    pub fn load(&mut self, records: Vec<LotteryRecord>) {
        debug!(records = records.len(), "replacing lottery dataset");
        self.records = records;
        self.selection.clear();
    }

    pub fn records(&self) -> &[LotteryRecord] {
        &self.records
    }

    pub fn selection(&self) -> &CitySelection {
        &self.selection
    }

    /// Distinct cities in the dataset, alphabetically.
    pub fn cities(&self) -> Vec<&str> {
        self.records
            .iter()
            .map(|record| record.city.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn select_city(&mut self, city: &str) -> Result<bool, SelectionError> {
        let added = self.selection.add(city)?;
        debug!(city, added, selected = self.selection.len(), "city selected");
        Ok(added)
    }

    pub fn deselect_city(&mut self, city: &str) -> bool {
        let removed = self.selection.remove(city);
        debug!(city, removed, selected = self.selection.len(), "city deselected");
        removed
    }

    pub fn report(&self) -> LotteryReport {
        LotteryReport::build(&self.records, &self.selection)
    }
}
