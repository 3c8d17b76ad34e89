use crate::{export, render};
use clap::{Args, ValueEnum};
use housing_lottery::config::{AppConfig, OutputFormat};
use housing_lottery::error::AppError;
use housing_lottery::ingest::{normalize_city, sample_records, LotteryLoader};
use housing_lottery::lottery::report::{SortDirection, SortKey};
use housing_lottery::lottery::{LotteryRecord, LotterySession};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Lottery data file (.json or .csv). Defaults to LOTTERY_DATA_PATH, then the sample dataset
    #[arg(long)]
    pub(crate) input: Option<PathBuf>,
    /// Ignore --input and LOTTERY_DATA_PATH and use the built-in sample dataset
    #[arg(long)]
    pub(crate) sample: bool,
    #[command(flatten)]
    pub(crate) view: ViewArgs,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ViewArgs {
    /// City whose lotteries you enter (repeat up to three times)
    #[arg(long = "city", value_name = "CITY")]
    pub(crate) cities: Vec<String>,
    /// Column used to order the per-lottery table
    #[arg(long, value_enum)]
    pub(crate) sort: Option<SortColumn>,
    /// Sort in descending order
    #[arg(long = "desc")]
    pub(crate) descending: bool,
    /// Print the report as JSON instead of tables
    #[arg(long)]
    pub(crate) json: bool,
    /// Also write per-lottery probabilities to this CSV file
    #[arg(long)]
    pub(crate) export: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum SortColumn {
    Name,
    City,
    Houses,
    Applicants,
    Pool,
    Competitors,
    Probability,
}

impl From<SortColumn> for SortKey {
    fn from(value: SortColumn) -> Self {
        match value {
            SortColumn::Name => SortKey::Name,
            SortColumn::City => SortKey::City,
            SortColumn::Houses => SortKey::TotalHouses,
            SortColumn::Applicants => SortKey::Applicants,
            SortColumn::Pool => SortKey::GeneralPool,
            SortColumn::Competitors => SortKey::Competitors,
            SortColumn::Probability => SortKey::Probability,
        }
    }
}

pub(crate) fn run_report(args: ReportArgs, config: &AppConfig) -> Result<(), AppError> {
    let ReportArgs {
        input,
        sample,
        view,
    } = args;

    let input = if sample {
        None
    } else {
        input.or_else(|| config.data.default_input.clone())
    };

    let records = match input {
        Some(path) => {
            info!(path = %path.display(), "loading lottery data");
            LotteryLoader::from_path(&path)?
        }
        None => {
            info!("using built-in sample dataset");
            sample_records()
        }
    };

    present(records, view, config)
}

pub(crate) fn run_sample(view: ViewArgs, config: &AppConfig) -> Result<(), AppError> {
    present(sample_records(), view, config)
}

fn present(
    records: Vec<LotteryRecord>,
    view: ViewArgs,
    config: &AppConfig,
) -> Result<(), AppError> {
    let ViewArgs {
        cities,
        sort,
        descending,
        json,
        export,
    } = view;

    let mut session = LotterySession::new(records);
    for raw in &cities {
        let city = normalize_city(raw);
        let known = session.cities().contains(&city.as_str());
        if !known {
            warn!(city = %city, "selected city has no lotteries in this dataset");
        }
        session.select_city(&city)?;
    }

    let mut report = session.report();
    if let Some(column) = sort {
        let direction = if descending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        report.sort_lotteries(column.into(), direction);
    }

    if json || config.data.output == OutputFormat::Json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", render::render_report(&session.cities(), &report));
    }

    if let Some(path) = export {
        export::write_to_path(&path, &report)?;
        info!(path = %path.display(), rows = report.lotteries.len(), "exported results");
    }

    Ok(())
}
