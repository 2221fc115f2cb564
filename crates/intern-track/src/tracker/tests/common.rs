use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{NaiveDate, Utc};

use crate::tracker::domain::{
    ApplicationId, ApplicationStatus, InternshipDraft, InternshipRecord, RecordStatus,
};
use crate::tracker::repository::{InternshipRepository, RepositoryError};
use crate::tracker::service::InternshipTrackerService;

pub(super) fn build_tracker() -> (
    InternshipTrackerService<MemoryRepository>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = InternshipTrackerService::new(repository.clone());
    (service, repository)
}

pub(super) fn draft(company: &str, status: ApplicationStatus) -> InternshipDraft {
    InternshipDraft {
        company: company.to_string(),
        role: "Software Engineering Intern".to_string(),
        date_applied: NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date"),
        status: RecordStatus::Known(status),
    }
}

pub(super) fn record(id: &str, status: RecordStatus) -> InternshipRecord {
    InternshipRecord {
        id: ApplicationId(id.to_string()),
        company: "Acme".to_string(),
        role: "Data Science Intern".to_string(),
        date_applied: NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date"),
        status,
        created_at: Utc::now(),
        updated_at: None,
    }
}

pub(super) fn records_with(statuses: &[ApplicationStatus]) -> Vec<InternshipRecord> {
    statuses
        .iter()
        .enumerate()
        .map(|(index, status)| record(&format!("rec-{index:06}"), RecordStatus::Known(*status)))
        .collect()
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<ApplicationId, InternshipRecord>>>,
}

impl InternshipRepository for MemoryRepository {
    fn insert(&self, record: InternshipRecord) -> Result<InternshipRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: InternshipRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &ApplicationId) -> Result<Option<InternshipRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn remove(&self, id: &ApplicationId) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.remove(id).map(|_| ()).ok_or(RepositoryError::NotFound)
    }

    fn list(&self) -> Result<Vec<InternshipRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<_> = guard.values().cloned().collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(records)
    }
}

pub(super) struct UnavailableRepository;

impl InternshipRepository for UnavailableRepository {
    fn insert(&self, _record: InternshipRecord) -> Result<InternshipRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn update(&self, _record: InternshipRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &ApplicationId) -> Result<Option<InternshipRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn remove(&self, _id: &ApplicationId) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list(&self) -> Result<Vec<InternshipRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
