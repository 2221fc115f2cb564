use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Identifier wrapper for tracked applications.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Pipeline stage recorded against an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicationStatus {
    Applied,
    Interview,
    Offer,
    Rejected,
    Withdrawn,
}

impl ApplicationStatus {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Applied,
            Self::Interview,
            Self::Offer,
            Self::Rejected,
            Self::Withdrawn,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Applied => "Applied",
            Self::Interview => "Interview",
            Self::Offer => "Offer",
            Self::Rejected => "Rejected",
            Self::Withdrawn => "Withdrawn",
        }
    }
}

impl FromStr for ApplicationStatus {
    type Err = StatusParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "applied" => Ok(Self::Applied),
            "interview" => Ok(Self::Interview),
            "offer" => Ok(Self::Offer),
            "rejected" => Ok(Self::Rejected),
            "withdrawn" => Ok(Self::Withdrawn),
            _ => Err(StatusParseError {
                value: raw.trim().to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown application status '{value}'")]
pub struct StatusParseError {
    pub value: String,
}

/// Status field as stored on a record.
///
/// Unknown raw values are kept verbatim instead of being coerced or dropped,
/// so the flow report can surface them as uncategorized rather than mask a
/// data-entry mistake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordStatus {
    Known(ApplicationStatus),
    Unrecognized(String),
}

impl RecordStatus {
    pub fn from_raw(raw: &str) -> Self {
        match raw.parse::<ApplicationStatus>() {
            Ok(status) => Self::Known(status),
            Err(_) => Self::Unrecognized(raw.trim().to_string()),
        }
    }

    pub fn known(&self) -> Option<ApplicationStatus> {
        match self {
            Self::Known(status) => Some(*status),
            Self::Unrecognized(_) => None,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::Known(status) => status.label(),
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl From<ApplicationStatus> for RecordStatus {
    fn from(status: ApplicationStatus) -> Self {
        Self::Known(status)
    }
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for RecordStatus {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for RecordStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_raw(&raw))
    }
}

/// A tracked internship application as stored by the repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternshipRecord {
    pub id: ApplicationId,
    pub company: String,
    pub role: String,
    pub date_applied: NaiveDate,
    pub status: RecordStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Submission payload for a new application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternshipDraft {
    pub company: String,
    pub role: String,
    pub date_applied: NaiveDate,
    pub status: RecordStatus,
}

impl InternshipDraft {
    pub(crate) fn validate(&self) -> Result<(), ValidationError> {
        if self.company.trim().is_empty() {
            return Err(ValidationError::MissingCompany);
        }
        if self.role.trim().is_empty() {
            return Err(ValidationError::MissingRole);
        }
        Ok(())
    }
}

/// Validation failures for submitted drafts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("company is required")]
    MissingCompany,
    #[error("role is required")]
    MissingRole,
}

/// Partial update applied to a stored record. `None` keeps the stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InternshipPatch {
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub date_applied: Option<NaiveDate>,
    #[serde(default)]
    pub status: Option<RecordStatus>,
}

impl InternshipPatch {
    /// Blank company or role strings keep the stored value, same as `None`.
    pub(crate) fn apply(self, record: &mut InternshipRecord) {
        if let Some(company) = self.company {
            if !company.trim().is_empty() {
                record.company = company;
            }
        }
        if let Some(role) = self.role {
            if !role.trim().is_empty() {
                record.role = role;
            }
        }
        if let Some(date_applied) = self.date_applied {
            record.date_applied = date_applied;
        }
        if let Some(status) = self.status {
            record.status = status;
        }
    }
}

/// Filter applied when listing records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum StatusFilter {
    #[default]
    All,
    Status(ApplicationStatus),
}

impl StatusFilter {
    /// An `Unrecognized` status matches only `All`.
    pub fn matches(self, status: &RecordStatus) -> bool {
        match self {
            Self::All => true,
            Self::Status(expected) => status.known() == Some(expected),
        }
    }
}
