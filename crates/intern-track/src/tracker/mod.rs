//! Internship application tracking: record intake and updates, the storage
//! seam, CSV import, and the status flow aggregation behind the pipeline
//! visualization.

pub mod domain;
pub mod flow;
pub mod import;
pub mod repository;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicationId, ApplicationStatus, InternshipDraft, InternshipPatch, InternshipRecord,
    RecordStatus, StatusFilter, StatusParseError, ValidationError,
};
pub use flow::{FlowEdge, FlowGraph, FlowNode, StatusTally};
pub use import::{CsvRecordImporter, ImportError};
pub use repository::{InternshipRepository, RepositoryError};
pub use service::{InternshipTrackerService, TrackerServiceError};
