//! Loader boundary: turns lottery files into validated [`LotteryRecord`]s.
//!
//! Two input shapes are understood. The flat shape (a JSON array or a CSV
//! file) carries one record per lottery with `Name`, `City`, `Total_Houses`,
//! `Applicants` and a `*_Houses`/`*_Applicants` pair per category. The
//! ministry listing shape is the project-listing JSON document with a
//! `ProjectItems` array; projects without subscribers are skipped.
//!
//! Loading is all-or-nothing: the first malformed record fails the load.

mod normalizer;
mod parser;
mod sample;

use crate::lottery::LotteryRecord;
use std::io::Read;
use std::path::Path;
use tracing::info;

pub use normalizer::normalize_city;
pub use sample::sample_records;

/// A record that does not match the expected shape. `record` is the 1-based
/// position of the offending record in its input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("record {record}: missing required field `{field}`")]
    MissingField { record: usize, field: &'static str },
    #[error("record {record}: invalid value for `{field}`: {detail}")]
    InvalidField {
        record: usize,
        field: &'static str,
        detail: String,
    },
    #[error("record {record}: expected an object")]
    NotAnObject { record: usize },
    #[error("invalid `{field}`: {detail}")]
    InvalidStructure {
        field: &'static str,
        detail: &'static str,
    },
}

impl SchemaError {
    pub fn field(&self) -> Option<&'static str> {
        match self {
            SchemaError::MissingField { field, .. }
            | SchemaError::InvalidField { field, .. }
            | SchemaError::InvalidStructure { field, .. } => Some(*field),
            SchemaError::NotAnObject { .. } => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read lottery data: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
    #[error("no active lotteries found in the data")]
    Empty,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    Json,
    Csv,
}

impl InputFormat {
    /// `.csv` files are read as CSV, everything else as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Self::Csv,
            _ => Self::Json,
        }
    }
}

pub struct LotteryLoader;

impl LotteryLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<LotteryRecord>, LoadError> {
        let path = path.as_ref();
        let format = InputFormat::from_path(path);
        let file = std::fs::File::open(path)?;
        Self::from_reader(std::io::BufReader::new(file), format)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        format: InputFormat,
    ) -> Result<Vec<LotteryRecord>, LoadError> {
        let records = match format {
            InputFormat::Json => parser::parse_json(reader)?,
            InputFormat::Csv => parser::parse_csv(reader)?,
        };

        if records.is_empty() {
            return Err(LoadError::Empty);
        }

        info!(records = records.len(), ?format, "loaded lottery dataset");
        Ok(records)
    }
}
