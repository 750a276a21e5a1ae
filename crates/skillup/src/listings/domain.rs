use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::parse::{parse_compensation, parse_duration_weeks, ListingField, ListingParseError};

/// Identifier wrapper for job and course listings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ListingId(pub String);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Precomputed compatibility percentage between a profile and a listing.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
pub struct MatchScore(u8);

impl MatchScore {
    pub const MAX: u8 = 100;

    pub fn new(value: u8) -> Result<Self, InvalidMatchScore> {
        if value > Self::MAX {
            return Err(InvalidMatchScore(value));
        }
        Ok(Self(value))
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for MatchScore {
    type Error = InvalidMatchScore;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<MatchScore> for u8 {
    fn from(score: MatchScore) -> Self {
        score.0
    }
}

impl fmt::Display for MatchScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("match score {0} is outside 0-100")]
pub struct InvalidMatchScore(pub u8);

/// Progress marker carried by course listings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CourseStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl CourseStatus {
    pub const fn label(self) -> &'static str {
        match self {
            CourseStatus::NotStarted => "not_started",
            CourseStatus::InProgress => "in_progress",
            CourseStatus::Completed => "completed",
        }
    }

    pub fn from_label(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "" | "not_started" => Some(CourseStatus::NotStarted),
            "in_progress" => Some(CourseStatus::InProgress),
            "completed" => Some(CourseStatus::Completed),
            _ => None,
        }
    }
}

/// Kind-specific attributes of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListingDetails {
    Job {
        location: String,
        salary_range: String,
    },
    Course {
        duration: String,
        #[serde(default)]
        status: CourseStatus,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListingKind {
    Job,
    Course,
}

impl ListingKind {
    pub const fn label(self) -> &'static str {
        match self {
            ListingKind::Job => "job",
            ListingKind::Course => "course",
        }
    }
}

/// A job or course as presented to the discovery engine.
///
/// Listings are never mutated once loaded; filtering and ranking always
/// produce new sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub organization: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub match_score: MatchScore,
    #[serde(default)]
    pub posted_on: Option<NaiveDate>,
    pub details: ListingDetails,
}

impl Listing {
    pub fn kind(&self) -> ListingKind {
        match self.details {
            ListingDetails::Job { .. } => ListingKind::Job,
            ListingDetails::Course { .. } => ListingKind::Course,
        }
    }

    pub fn location(&self) -> Option<&str> {
        match &self.details {
            ListingDetails::Job { location, .. } => Some(location),
            ListingDetails::Course { .. } => None,
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|candidate| candidate == tag)
    }

    /// Lower bound of the advertised salary range.
    pub fn compensation(&self) -> Result<u32, ListingParseError> {
        match &self.details {
            ListingDetails::Job { salary_range, .. } => parse_compensation(salary_range),
            ListingDetails::Course { .. } => Err(ListingParseError::Missing {
                field: ListingField::Compensation,
            }),
        }
    }

    /// Course length in weeks, read from the leading number of the label.
    pub fn duration_weeks(&self) -> Result<u32, ListingParseError> {
        match &self.details {
            ListingDetails::Course { duration, .. } => parse_duration_weeks(duration),
            ListingDetails::Job { .. } => Err(ListingParseError::Missing {
                field: ListingField::Duration,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn match_score_rejects_values_above_one_hundred() {
        assert!(MatchScore::new(100).is_ok());
        assert_eq!(MatchScore::new(101), Err(InvalidMatchScore(101)));
    }

    #[test]
    fn listing_deserialization_validates_match_score() {
        let payload = json!({
            "id": "j-1",
            "title": "Analista",
            "organization": "Data Insights",
            "match_score": 140,
            "details": { "kind": "job", "location": "Remoto", "salary_range": "R$ 9.000" }
        });

        let err = serde_json::from_value::<Listing>(payload).expect_err("score out of range");
        assert!(err.to_string().contains("outside 0-100"));
    }

    #[test]
    fn course_listings_report_missing_compensation() {
        let course = Listing {
            id: ListingId("c-1".to_string()),
            title: "Python".to_string(),
            organization: "Alura".to_string(),
            tags: vec!["Python".to_string()],
            match_score: MatchScore::new(90).expect("valid score"),
            posted_on: None,
            details: ListingDetails::Course {
                duration: "8 semanas".to_string(),
                status: CourseStatus::InProgress,
            },
        };

        assert_eq!(course.kind(), ListingKind::Course);
        assert_eq!(course.location(), None);
        assert_eq!(course.duration_weeks(), Ok(8));
        assert_eq!(
            course.compensation(),
            Err(ListingParseError::Missing {
                field: ListingField::Compensation
            })
        );
    }

    #[test]
    fn course_status_labels_accept_hyphenated_forms() {
        assert_eq!(
            CourseStatus::from_label("in-progress"),
            Some(CourseStatus::InProgress)
        );
        assert_eq!(CourseStatus::from_label(""), Some(CourseStatus::NotStarted));
        assert_eq!(CourseStatus::from_label("paused"), None);
    }
}
