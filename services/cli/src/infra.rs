use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{Duration, NaiveDate};
use intern_track::tracker::{
    ApplicationId, ApplicationStatus, InternshipDraft, InternshipRecord, InternshipRepository,
    RecordStatus, RepositoryError,
};

#[derive(Default, Clone)]
pub(crate) struct InMemoryInternshipRepository {
    records: Arc<Mutex<HashMap<ApplicationId, InternshipRecord>>>,
}

impl InternshipRepository for InMemoryInternshipRepository {
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

/// Built-in record set used when no CSV export is provided.
pub(crate) fn sample_drafts() -> Vec<InternshipDraft> {
    let base = NaiveDate::from_ymd_opt(2025, 9, 1).expect("valid date");

    let entries: [(&str, &str, i64, RecordStatus); 9] = [
        (
            "Google",
            "Software Engineering Intern",
            0,
            RecordStatus::Known(ApplicationStatus::Applied),
        ),
        (
            "Microsoft",
            "Data Science Intern",
            2,
            RecordStatus::Known(ApplicationStatus::Applied),
        ),
        (
            "Amazon",
            "Software Engineering Intern",
            4,
            RecordStatus::Known(ApplicationStatus::Interview),
        ),
        (
            "Stripe",
            "Backend Engineering Intern",
            6,
            RecordStatus::Known(ApplicationStatus::Interview),
        ),
        (
            "Figma",
            "Product Engineering Intern",
            9,
            RecordStatus::Known(ApplicationStatus::Offer),
        ),
        (
            "Datadog",
            "Site Reliability Intern",
            11,
            RecordStatus::Known(ApplicationStatus::Rejected),
        ),
        (
            "Palantir",
            "Forward Deployed Intern",
            13,
            RecordStatus::Known(ApplicationStatus::Rejected),
        ),
        (
            "Shopify",
            "Infrastructure Intern",
            15,
            RecordStatus::Known(ApplicationStatus::Withdrawn),
        ),
        (
            "Notion",
            "Growth Engineering Intern",
            18,
            RecordStatus::Unrecognized("Phone Screen".to_string()),
        ),
    ];

    entries
        .into_iter()
        .map(|(company, role, offset, status)| InternshipDraft {
            company: company.to_string(),
            role: role.to_string(),
            date_applied: base + Duration::days(offset),
            status,
        })
        .collect()
}
