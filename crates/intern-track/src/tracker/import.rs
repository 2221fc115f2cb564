use std::io::Read;
use std::path::Path;

use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};

use super::domain::{InternshipDraft, RecordStatus};

/// Error raised while reading a tracker CSV export.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("failed to read CSV export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid CSV data: {0}")]
    Csv(#[from] csv::Error),
}

/// Imports application records from a spreadsheet export with `Company`,
/// `Role`, `Date Applied`, and `Status` columns.
pub struct CsvRecordImporter;

impl CsvRecordImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<InternshipDraft>, ImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Rows missing a company or role, or carrying an unparsable date, are
    /// skipped. Unknown status values are kept verbatim so the flow report
    /// can surface them as uncategorized.
    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<InternshipDraft>, ImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut drafts = Vec::new();
        for row in csv_reader.deserialize::<ExportRow>() {
            let row = row?;
            if row.company.trim().is_empty() || row.role.trim().is_empty() {
                continue;
            }
            let date_applied = match row.date_applied() {
                Some(date) => date,
                None => continue,
            };

            drafts.push(InternshipDraft {
                company: row.company,
                role: row.role,
                date_applied,
                status: RecordStatus::from_raw(&row.status),
            });
        }

        Ok(drafts)
    }
}

#[derive(Debug, Deserialize)]
struct ExportRow {
    #[serde(rename = "Company", default)]
    company: String,
    #[serde(rename = "Role", default)]
    role: String,
    #[serde(
        rename = "Date Applied",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    date_applied: Option<String>,
    #[serde(rename = "Status", default)]
    status: String,
}

impl ExportRow {
    fn date_applied(&self) -> Option<NaiveDate> {
        self.date_applied.as_deref().and_then(parse_date)
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.date_naive());
    }

    None
}

#[cfg(test)]
pub(crate) fn parse_date_for_tests(value: &str) -> Option<NaiveDate> {
    parse_date(value)
}
