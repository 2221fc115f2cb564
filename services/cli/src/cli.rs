use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use intern_track::error::AppError;

use crate::demo::{run_demo, run_report, DemoArgs, ReportArgs};
use crate::watch;

#[derive(Parser, Debug)]
#[command(
    name = "Internship Tracker",
    about = "Track internship applications and render the status flow pipeline from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a status flow report (default command)
    Report(ReportArgs),
    /// Re-import a CSV export and re-render the report on a fixed interval
    Watch(WatchArgs),
    /// Run an end-to-end demo covering intake, updates, and the flow report
    Demo(DemoArgs),
}

#[derive(Args, Debug)]
pub(crate) struct WatchArgs {
    /// Tracker CSV export to re-read on every refresh
    #[arg(long)]
    pub(crate) csv: PathBuf,
    /// Override the configured refresh interval in seconds
    #[arg(long)]
    pub(crate) interval: Option<u64>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Report(ReportArgs::default()));

    match command {
        Command::Report(args) => run_report(args),
        Command::Watch(args) => watch::run(args).await,
        Command::Demo(args) => run_demo(args),
    }
}
