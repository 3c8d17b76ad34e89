use crate::report::{run_report, run_sample, ReportArgs, ViewArgs};
use clap::{Parser, Subcommand};
use housing_lottery::config::AppConfig;
use housing_lottery::error::AppError;
use housing_lottery::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "lottery-odds",
    about = "Estimate your chances in multi-category housing lotteries",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute per-lottery, per-city and overall win probabilities (default command)
    Report(ReportArgs),
    /// Run the report against the built-in sample dataset
    Sample(ViewArgs),
}

pub(crate) fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;
    telemetry::init(&config.telemetry)?;
    info!(?config.environment, "lottery odds calculator starting");

    let command = cli
        .command
        .unwrap_or_else(|| Command::Report(ReportArgs::default()));

    match command {
        Command::Report(args) => run_report(args, &config),
        Command::Sample(args) => run_sample(args, &config),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn report_accepts_repeated_city_flags() {
        let cli = Cli::try_parse_from([
            "lottery-odds",
            "report",
            "--input",
            "lotteries.csv",
            "--city",
            "Haifa",
            "--city",
            "Tel Aviv",
            "--sort",
            "probability",
            "--desc",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Report(args)) => {
                assert_eq!(args.view.cities, vec!["Haifa", "Tel Aviv"]);
                assert!(args.view.descending);
                assert!(args.input.is_some());
            }
            other => panic!("expected report command, got {other:?}"),
        }
    }
}
