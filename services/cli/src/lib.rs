mod cli;
mod demo;
mod infra;
mod watch;

use intern_track::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
