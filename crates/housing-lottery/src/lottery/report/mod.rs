mod format;
mod summary;
pub mod views;

pub use format::format_pct;
pub use summary::{LotteryReport, SortDirection, SortKey};
