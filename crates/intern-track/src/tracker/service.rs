use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;

use super::domain::{
    ApplicationId, InternshipDraft, InternshipPatch, InternshipRecord, StatusFilter,
    ValidationError,
};
use super::flow::FlowGraph;
use super::repository::{InternshipRepository, RepositoryError};

/// Service composing draft validation, the repository, and the flow
/// aggregation entry point.
pub struct InternshipTrackerService<R> {
    repository: Arc<R>,
}

static RECORD_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_record_id() -> ApplicationId {
    let id = RECORD_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    ApplicationId(format!("rec-{id:06}"))
}

impl<R> InternshipTrackerService<R>
where
    R: InternshipRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Submit a new application, returning the repository-backed record.
    pub fn submit(&self, draft: InternshipDraft) -> Result<InternshipRecord, TrackerServiceError> {
        draft.validate()?;

        let record = InternshipRecord {
            id: next_record_id(),
            company: draft.company,
            role: draft.role,
            date_applied: draft.date_applied,
            status: draft.status,
            created_at: Utc::now(),
            updated_at: None,
        };

        let stored = self.repository.insert(record)?;
        Ok(stored)
    }

    /// Apply a partial update to an existing record and persist the result.
    pub fn update(
        &self,
        id: &ApplicationId,
        patch: InternshipPatch,
    ) -> Result<InternshipRecord, TrackerServiceError> {
        let mut record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;

        patch.apply(&mut record);
        record.updated_at = Some(Utc::now());

        self.repository.update(record.clone())?;
        Ok(record)
    }

    /// Delete a record. Missing ids propagate as not-found.
    pub fn remove(&self, id: &ApplicationId) -> Result<(), TrackerServiceError> {
        self.repository.remove(id)?;
        Ok(())
    }

    /// Fetch a single record for display.
    pub fn get(&self, id: &ApplicationId) -> Result<InternshipRecord, TrackerServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    /// All records passing the filter, in insertion order.
    pub fn list(&self, filter: StatusFilter) -> Result<Vec<InternshipRecord>, TrackerServiceError> {
        let mut records = self.repository.list()?;
        records.retain(|record| filter.matches(&record.status));
        Ok(records)
    }

    /// Recompute the status flow graph over the current record set.
    pub fn flow(&self) -> Result<FlowGraph, TrackerServiceError> {
        let records = self.repository.list()?;
        Ok(FlowGraph::compute(&records))
    }
}

/// Error raised by the tracker service.
#[derive(Debug, thiserror::Error)]
pub enum TrackerServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
