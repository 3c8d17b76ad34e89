pub mod config;
pub mod error;
pub mod ingest;
pub mod lottery;
pub mod telemetry;
