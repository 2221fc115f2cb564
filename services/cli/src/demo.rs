use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use intern_track::error::AppError;
use intern_track::tracker::{
    ApplicationStatus, CsvRecordImporter, FlowGraph, InternshipPatch, InternshipTrackerService,
    RecordStatus, StatusFilter,
};

use crate::infra::{sample_drafts, InMemoryInternshipRepository};

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Tracker CSV export to aggregate (defaults to built-in sample data)
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
    /// Emit the report as pretty-printed JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Emit the final flow report as pretty-printed JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ReportDataSource {
    CsvImport,
    Sample,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs { csv, json } = args;

    let (graph, data_source) = build_flow_from_path(csv)?;
    render_flow_report(&graph, data_source, json);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("Internship tracker demo");

    let repository = Arc::new(InMemoryInternshipRepository::default());
    let service = InternshipTrackerService::new(repository);

    for draft in sample_drafts() {
        let record = service.submit(draft)?;
        println!(
            "- Tracked {} at {} ({})",
            record.role,
            record.company,
            record.status.label()
        );
    }

    let applied = service.list(StatusFilter::Status(ApplicationStatus::Applied))?;
    println!(
        "\nStill waiting to hear back from {} companies",
        applied.len()
    );

    if let Some(record) = applied.first() {
        let promoted = service.update(
            &record.id,
            InternshipPatch {
                status: Some(RecordStatus::Known(ApplicationStatus::Interview)),
                ..InternshipPatch::default()
            },
        )?;
        println!("Moved {} to {}", promoted.company, promoted.status.label());
    }

    let withdrawn = service.list(StatusFilter::Status(ApplicationStatus::Withdrawn))?;
    if let Some(record) = withdrawn.first() {
        service.remove(&record.id)?;
        println!("Dropped the withdrawn application at {}", record.company);
    }

    let graph = service.flow()?;
    println!();
    render_flow_report(&graph, ReportDataSource::Sample, args.json);
    Ok(())
}

/// Import the export when a path is given, otherwise seed the sample set,
/// then aggregate everything through the tracker service.
pub(crate) fn build_flow_from_path(
    csv: Option<PathBuf>,
) -> Result<(FlowGraph, ReportDataSource), AppError> {
    let (drafts, data_source) = match csv {
        Some(path) => (
            CsvRecordImporter::from_path(path)?,
            ReportDataSource::CsvImport,
        ),
        None => (sample_drafts(), ReportDataSource::Sample),
    };

    let repository = Arc::new(InMemoryInternshipRepository::default());
    let service = InternshipTrackerService::new(repository);
    for draft in drafts {
        service.submit(draft)?;
    }

    let graph = service.flow()?;
    Ok((graph, data_source))
}

pub(crate) fn render_flow_report(graph: &FlowGraph, data_source: ReportDataSource, json: bool) {
    if json {
        match serde_json::to_string_pretty(&graph.summary()) {
            Ok(payload) => println!("{payload}"),
            Err(err) => println!("Flow report unavailable: {err}"),
        }
        return;
    }

    println!("Application flow report");
    match data_source {
        ReportDataSource::CsvImport => println!("Data source: tracker CSV export"),
        ReportDataSource::Sample => println!("Data source: built-in sample data (no CSV provided)"),
    }

    let tally = graph.tally();
    println!("\nStatus totals");
    println!("- Total applications: {}", tally.total);
    for status in ApplicationStatus::ordered() {
        println!("- {}: {}", status.label(), tally.bucket(status));
    }
    if tally.uncategorized > 0 {
        println!("- Uncategorized: {}", tally.uncategorized);
    }

    if graph.is_empty() {
        println!("\nNo applications yet; nothing to draw.");
        return;
    }

    println!("\nPipeline flow");
    for edge in graph.edges() {
        println!(
            "- {} -> {}: {}",
            edge.source.label(),
            edge.target.label(),
            edge.weight
        );
    }
}
