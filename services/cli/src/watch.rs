use intern_track::config::{AppConfig, ConfigError};
use intern_track::error::AppError;
use intern_track::telemetry;
use tracing::{info, warn};

use crate::cli::WatchArgs;
use crate::demo::{build_flow_from_path, render_flow_report};

/// Re-import the export and re-render the flow report on a fixed cadence
/// until interrupted. The aggregation itself stays schedule-free; this loop
/// owns the refresh timer.
pub(crate) async fn run(args: WatchArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(seconds) = args.interval {
        if seconds == 0 {
            return Err(ConfigError::InvalidRefreshInterval.into());
        }
        config.refresh.interval_seconds = seconds;
    }

    telemetry::init(&config.telemetry)?;

    info!(
        ?config.environment,
        interval_seconds = config.refresh.interval_seconds,
        csv = %args.csv.display(),
        "status flow watch started"
    );

    let mut ticker = tokio::time::interval(config.refresh.interval());
    loop {
        tokio::select! {
            _ = ticker.tick() => {
                match build_flow_from_path(Some(args.csv.clone())) {
                    Ok((graph, data_source)) => render_flow_report(&graph, data_source, false),
                    Err(err) => warn!(%err, "refresh failed; keeping previous output"),
                }
            }
            _ = tokio::signal::ctrl_c() => {
                info!("status flow watch stopped");
                return Ok(());
            }
        }
    }
}
