use super::domain::{ApplicationId, InternshipRecord};

/// Storage abstraction so the service and flow layers can be exercised in
/// isolation from any concrete persistence choice.
pub trait InternshipRepository: Send + Sync {
    fn insert(&self, record: InternshipRecord) -> Result<InternshipRecord, RepositoryError>;
    fn update(&self, record: InternshipRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ApplicationId) -> Result<Option<InternshipRecord>, RepositoryError>;
    fn remove(&self, id: &ApplicationId) -> Result<(), RepositoryError>;
    /// All records in insertion order (ascending id).
    fn list(&self) -> Result<Vec<InternshipRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
