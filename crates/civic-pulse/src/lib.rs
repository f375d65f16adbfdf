pub mod config;
pub mod error;
pub mod pulse;
pub mod telemetry;
