use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    InvalidFilter { filter: String, source: ParseError },
    Install(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::InvalidFilter { filter, .. } => write!(
                f,
                "APP_LOG_LEVEL '{}' is not a valid log filter (try 'info' or 'housing_lottery=debug')",
                filter
            ),
            TelemetryError::Install(err) => write!(f, "could not install the log subscriber: {err}"),
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::InvalidFilter { source, .. } => Some(source),
            TelemetryError::Install(err) => Some(&**err),
        }
    }
}

/// `RUST_LOG` wins when it parses; otherwise the configured level applies.
fn log_filter(config: &TelemetryConfig) -> Result<EnvFilter, TelemetryError> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.log_level).map_err(|source| TelemetryError::InvalidFilter {
        filter: config.log_level.clone(),
        source,
    })
}

/// Sends loader and session logs to stderr, keeping stdout free for the
/// report tables and JSON.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(config)?)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::Install)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(log_level: &str) -> TelemetryConfig {
        TelemetryConfig {
            log_level: log_level.to_string(),
        }
    }

    #[test]
    fn configured_level_builds_a_filter() {
        assert!(log_filter(&config("housing_lottery=debug,info")).is_ok());
    }

    #[test]
    fn unparseable_level_names_the_offending_value() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        match log_filter(&config("lottery=verbose")) {
            Err(err @ TelemetryError::InvalidFilter { .. }) => {
                assert!(err.to_string().contains("'lottery=verbose'"));
            }
            other => panic!("expected invalid filter error, got {other:?}"),
        }
    }
}
