use super::normalizer::{normalize_city, normalize_header};
use super::{LoadError, SchemaError};
use crate::lottery::{Category, LotteryMetadata, LotteryRecord};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::{Map, Value};
use std::io::Read;
use tracing::debug;

const FLAT_CATEGORY_FIELDS: [(Category, &str, &str); 4] = [
    (
        Category::Accessibility,
        "Wheelchair_Houses",
        "Wheelchair_Applicants",
    ),
    (Category::CombatVeteran, "Combat_Houses", "Combat_Applicants"),
    (Category::ReserveDuty, "Reserve_Houses", "Reserve_Applicants"),
    (Category::LocalResident, "Local_Houses", "Local_Applicants"),
];

const LISTING_CATEGORY_FIELDS: [(Category, &[&str], &str); 4] = [
    (
        Category::Accessibility,
        &["HousingUnitsForHandicapped"],
        "TotalHandicappedSubscribers",
    ),
    (
        Category::CombatVeteran,
        &["HU_CombatReservist_L"],
        "TotalCombatReservistSubscribers",
    ),
    (
        Category::ReserveDuty,
        &["HU_Reservists_L"],
        "TotalReservedDutySubscribers",
    ),
    (
        Category::LocalResident,
        &["LocalHousing", "LocalNumber"],
        "TotalLocalSubscribers",
    ),
];

pub(crate) fn parse_json<R: Read>(reader: R) -> Result<Vec<LotteryRecord>, LoadError> {
    let document: Value = serde_json::from_reader(reader)?;
    let records = match &document {
        Value::Array(items) => flat_records(items)?,
        Value::Object(map) => listing_records(map)?,
        _ => {
            return Err(SchemaError::InvalidStructure {
                field: "ProjectItems",
                detail: "expected a list of lottery records or an object with a ProjectItems array",
            }
            .into())
        }
    };
    Ok(records)
}

pub(crate) fn parse_csv<R: Read>(reader: R) -> Result<Vec<LotteryRecord>, LoadError> {
    // Short rows surface as missing fields rather than csv length errors.
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers: Vec<String> = csv_reader
        .headers()?
        .iter()
        .map(|header| normalize_header(header).to_string())
        .collect();
    let mut records = Vec::new();

    for (index, row) in csv_reader.records().enumerate() {
        let row = row?;
        let source = CsvRow {
            headers: &headers,
            row: &row,
        };
        records.push(flat_record(&Fields::new(&source, index + 1))?);
    }

    Ok(records)
}

fn flat_records(items: &[Value]) -> Result<Vec<LotteryRecord>, SchemaError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let record = index + 1;
            let object = item
                .as_object()
                .ok_or(SchemaError::NotAnObject { record })?;
            flat_record(&Fields::new(object, record))
        })
        .collect()
}

fn flat_record<S: FieldSource>(fields: &Fields<'_, S>) -> Result<LotteryRecord, SchemaError> {
    let name = fields.text("Name")?;
    let city = normalize_city(&fields.text("City")?);
    let mut record = LotteryRecord::new(
        name,
        city,
        fields.count("Total_Houses")?,
        fields.count("Applicants")?,
    );

    for (category, houses, applicants) in FLAT_CATEGORY_FIELDS {
        record = record.with_quota(category, fields.count(houses)?, fields.count(applicants)?);
    }

    Ok(record)
}

fn listing_records(document: &Map<String, Value>) -> Result<Vec<LotteryRecord>, SchemaError> {
    let items = document
        .get("ProjectItems")
        .and_then(Value::as_array)
        .ok_or(SchemaError::InvalidStructure {
            field: "ProjectItems",
            detail: "must be an array of projects",
        })?;
    let mut records = Vec::new();

    for (index, item) in items.iter().enumerate() {
        let record = index + 1;
        let object = item
            .as_object()
            .ok_or(SchemaError::NotAnObject { record })?;
        let fields = Fields::new(object, record);

        let subscribers = fields.first_positive(&["TotalSubscribers"])?;
        if subscribers == 0 {
            debug!(record, "skipping project without subscribers");
            continue;
        }

        records.push(listing_record(&fields, subscribers)?);
    }

    Ok(records)
}

fn listing_record<S: FieldSource>(
    fields: &Fields<'_, S>,
    subscribers: u64,
) -> Result<LotteryRecord, SchemaError> {
    let lottery_number = fields.optional_text("LotteryNumber")?;
    let project = fields
        .optional_text("ProjectName")?
        .unwrap_or_else(|| "Project".to_string());
    let name = match &lottery_number {
        Some(number) => format!("{project} ({number})"),
        None => project,
    };
    let city = fields
        .optional_text("CityDescription")?
        .map(|city| normalize_city(&city))
        .filter(|city| !city.is_empty())
        .unwrap_or_else(|| "Unknown City".to_string());

    let total_houses = fields.first_positive(&["TargetHousingUnits", "HousingUnits"])?;
    let mut record = LotteryRecord::new(name, city, total_houses, subscribers);

    for (category, houses, applicants) in LISTING_CATEGORY_FIELDS {
        record = record.with_quota(
            category,
            fields.first_positive(houses)?,
            fields.first_positive(&[applicants])?,
        );
    }

    let metadata = LotteryMetadata {
        lottery_number,
        application_end_date: fields
            .optional_text("ApplicationEndDate")?
            .as_deref()
            .and_then(parse_date),
        process_name: fields.optional_text("ProcessName")?,
        contractor: fields.optional_text("ContractorDescription")?,
    };

    Ok(record.with_metadata(metadata))
}

pub(crate) enum RawField<'a> {
    Json(&'a Value),
    Text(&'a str),
}

/// Field lookup shared by JSON objects and CSV rows. Absent, null and blank
/// values all read as missing.
pub(crate) trait FieldSource {
    fn raw(&self, field: &str) -> Option<RawField<'_>>;
}

impl FieldSource for Map<String, Value> {
    fn raw(&self, field: &str) -> Option<RawField<'_>> {
        self.get(field)
            .filter(|value| !value.is_null())
            .map(RawField::Json)
    }
}

struct CsvRow<'a> {
    headers: &'a [String],
    row: &'a csv::StringRecord,
}

impl FieldSource for CsvRow<'_> {
    fn raw(&self, field: &str) -> Option<RawField<'_>> {
        let position = self.headers.iter().position(|header| header == field)?;
        self.row
            .get(position)
            .filter(|value| !value.trim().is_empty())
            .map(RawField::Text)
    }
}

struct Fields<'a, S> {
    source: &'a S,
    record: usize,
}

impl<'a, S: FieldSource> Fields<'a, S> {
    fn new(source: &'a S, record: usize) -> Self {
        Self { source, record }
    }

    fn count(&self, field: &'static str) -> Result<u64, SchemaError> {
        self.optional_count(field)?.ok_or(SchemaError::MissingField {
            record: self.record,
            field,
        })
    }

    fn optional_count(&self, field: &'static str) -> Result<Option<u64>, SchemaError> {
        self.source
            .raw(field)
            .map(|raw| parse_count(raw).map_err(|detail| self.invalid(field, detail)))
            .transpose()
    }

    /// First of `candidates` holding a positive count, else 0.
    fn first_positive(&self, candidates: &[&'static str]) -> Result<u64, SchemaError> {
        for &field in candidates {
            if let Some(value) = self.optional_count(field)?.filter(|value| *value > 0) {
                return Ok(value);
            }
        }
        Ok(0)
    }

    fn text(&self, field: &'static str) -> Result<String, SchemaError> {
        self.optional_text(field)?.ok_or(SchemaError::MissingField {
            record: self.record,
            field,
        })
    }

    fn optional_text(&self, field: &'static str) -> Result<Option<String>, SchemaError> {
        let value = self
            .source
            .raw(field)
            .map(|raw| parse_text(raw).map_err(|detail| self.invalid(field, detail)))
            .transpose()?;
        Ok(value
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty()))
    }

    fn invalid(&self, field: &'static str, detail: String) -> SchemaError {
        SchemaError::InvalidField {
            record: self.record,
            field,
            detail,
        }
    }
}

fn parse_count(raw: RawField<'_>) -> Result<u64, String> {
    match raw {
        RawField::Json(Value::Number(number)) => {
            if let Some(value) = number.as_u64() {
                return Ok(value);
            }
            match number.as_f64() {
                Some(value) if value >= 0.0 && value.fract() == 0.0 && value <= u64::MAX as f64 => {
                    Ok(value as u64)
                }
                _ => Err(format!("expected a non-negative integer, got {number}")),
            }
        }
        RawField::Json(Value::String(text)) => parse_count_text(text),
        RawField::Json(other) => Err(format!("expected a non-negative integer, got {other}")),
        RawField::Text(text) => parse_count_text(text),
    }
}

fn parse_count_text(value: &str) -> Result<u64, String> {
    let trimmed = value.trim();
    trimmed
        .parse::<u64>()
        .map_err(|_| format!("expected a non-negative integer, got '{trimmed}'"))
}

fn parse_text(raw: RawField<'_>) -> Result<String, String> {
    match raw {
        RawField::Json(Value::String(text)) => Ok(text.clone()),
        RawField::Json(Value::Number(number)) => Ok(number.to_string()),
        RawField::Json(other) => Err(format!("expected text, got {other}")),
        RawField::Text(text) => Ok(text.to_string()),
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(dt.date());
    }

    match NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        Ok(date) => Some(date),
        Err(_) => {
            debug!(value = trimmed, "ignoring unrecognised application end date");
            None
        }
    }
}

#[cfg(test)]
pub(crate) fn parse_date_for_tests(value: &str) -> Option<NaiveDate> {
    parse_date(value)
}
