pub mod aggregate;
pub mod allocation;
pub mod domain;
pub mod report;
mod selection;
mod session;

pub use aggregate::{combine_independent, overall_selection, per_city, CityOdds, CityProbability};
pub use allocation::{allocate, AllocationResult, CategoryOutcome};
pub use domain::{Category, CategoryQuota, CategoryQuotas, LotteryMetadata, LotteryRecord};
pub use report::LotteryReport;
pub use selection::{CitySelection, SelectionError, MAX_SELECTED_CITIES};
pub use session::LotterySession;
