use crate::config::ConfigError;
use crate::telemetry::TelemetryError;
use crate::tracker::import::ImportError;
use crate::tracker::service::TrackerServiceError;

/// Top-level error surfaced by the CLI entry points.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("tracker error: {0}")]
    Service(#[from] TrackerServiceError),
    #[error("import error: {0}")]
    Import(#[from] ImportError),
}
