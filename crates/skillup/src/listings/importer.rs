use std::collections::HashSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use tracing::debug;

use super::catalog::Catalog;
use super::domain::{CourseStatus, Listing, ListingDetails, ListingId, MatchScore};

/// Error raised while importing a catalog export.
#[derive(Debug, thiserror::Error)]
pub enum CatalogImportError {
    #[error("failed to read catalog export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid catalog CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("catalog row {row}: {reason}")]
    InvalidRow { row: usize, reason: String },
}

/// Builds a [`Catalog`] from a CSV export of jobs and courses.
pub struct CatalogImporter;

impl CatalogImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Catalog, CatalogImportError> {
        let file = File::open(path.as_ref())?;
        debug!(path = %path.as_ref().display(), "importing catalog export");
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Catalog, CatalogImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut listings = Vec::new();
        let mut seen = HashSet::new();

        for (index, record) in csv_reader.deserialize::<CatalogRow>().enumerate() {
            let row = record?;
            let listing = row.into_listing().map_err(|reason| CatalogImportError::InvalidRow {
                row: index + 1,
                reason,
            })?;
            if !seen.insert(listing.id.clone()) {
                return Err(CatalogImportError::InvalidRow {
                    row: index + 1,
                    reason: format!("duplicate id '{}'", listing.id),
                });
            }
            listings.push(listing);
        }

        debug!(count = listings.len(), "catalog import finished");
        Ok(Catalog::new(listings))
    }
}

#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: String,
    kind: String,
    title: String,
    organization: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    tags: Option<String>,
    match_score: u8,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    location: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    salary_range: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    duration: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    status: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    posted_on: Option<String>,
}

impl CatalogRow {
    fn into_listing(self) -> Result<Listing, String> {
        if self.id.is_empty() {
            return Err("id is required".to_string());
        }

        let match_score = MatchScore::new(self.match_score).map_err(|err| err.to_string())?;

        let details = match self.kind.to_ascii_lowercase().as_str() {
            "job" => ListingDetails::Job {
                location: self.location.ok_or("job rows require a location")?,
                salary_range: self.salary_range.unwrap_or_default(),
            },
            "course" => {
                let status = match self.status.as_deref() {
                    Some(raw) => CourseStatus::from_label(raw)
                        .ok_or_else(|| format!("unknown course status '{raw}'"))?,
                    None => CourseStatus::default(),
                };
                ListingDetails::Course {
                    duration: self.duration.ok_or("course rows require a duration")?,
                    status,
                }
            }
            other => return Err(format!("unknown listing kind '{other}'")),
        };

        let posted_on = self
            .posted_on
            .as_deref()
            .map(|raw| {
                NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                    .map_err(|err| format!("posted_on '{raw}' is not YYYY-MM-DD ({err})"))
            })
            .transpose()?;

        let tags = self
            .tags
            .as_deref()
            .map(|raw| {
                raw.split(';')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Listing {
            id: ListingId(self.id),
            title: self.title,
            organization: self.organization,
            tags,
            match_score,
            posted_on,
            details,
        })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}
