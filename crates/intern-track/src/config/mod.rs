use std::env;
use std::time::Duration;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub telemetry: TelemetryConfig,
    pub refresh: RefreshConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let interval_seconds = env::var("APP_REFRESH_SECONDS")
            .unwrap_or_else(|_| "2".to_string())
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidRefreshInterval)?;
        if interval_seconds == 0 {
            return Err(ConfigError::InvalidRefreshInterval);
        }

        Ok(Self {
            environment,
            telemetry: TelemetryConfig { log_level },
            refresh: RefreshConfig { interval_seconds },
        })
    }
}

/// Cadence for scheduled re-aggregation in watch mode.
#[derive(Debug, Clone)]
pub struct RefreshConfig {
    pub interval_seconds: u64,
}

impl RefreshConfig {
    pub fn interval(&self) -> Duration {
        Duration::from_secs(self.interval_seconds)
    }
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("APP_REFRESH_SECONDS must be a positive integer")]
    InvalidRefreshInterval,
}
