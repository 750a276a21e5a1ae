use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Ordering applied to a filtered listing sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    #[default]
    Match,
    Compensation,
    Recency,
    Duration,
    /// Identity order; unknown labels resolve here.
    Unordered,
}

impl SortKey {
    /// Resolve a UI or request label, failing closed to [`SortKey::Unordered`].
    pub fn from_label(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "match" => SortKey::Match,
            "compensation" | "salary" => SortKey::Compensation,
            "recency" | "recent" => SortKey::Recency,
            "duration" => SortKey::Duration,
            _ => SortKey::Unordered,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            SortKey::Match => "match",
            SortKey::Compensation => "compensation",
            SortKey::Recency => "recency",
            SortKey::Duration => "duration",
            SortKey::Unordered => "unordered",
        }
    }
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(SortKey::from_label(&raw))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Inclusive bounds on the parsed compensation lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawRange")]
pub struct CompensationRange {
    min: u32,
    max: u32,
}

impl CompensationRange {
    pub fn new(min: u32, max: u32) -> Result<Self, InvalidCompensationRange> {
        if min > max {
            return Err(InvalidCompensationRange { min, max });
        }
        Ok(Self { min, max })
    }

    pub const fn min(&self) -> u32 {
        self.min
    }

    pub const fn max(&self) -> u32 {
        self.max
    }

    pub fn contains(&self, value: u32) -> bool {
        self.min <= value && value <= self.max
    }
}

#[derive(Deserialize)]
struct RawRange {
    min: u32,
    max: u32,
}

impl TryFrom<RawRange> for CompensationRange {
    type Error = InvalidCompensationRange;

    fn try_from(raw: RawRange) -> Result<Self, Self::Error> {
        Self::new(raw.min, raw.max)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("compensation range minimum {min} exceeds maximum {max}")]
pub struct InvalidCompensationRange {
    pub min: u32,
    pub max: u32,
}

/// User-entered search and facet selection for a listing screen.
///
/// Rebuilt on every interaction; empty facet sets impose no restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub search_text: String,
    pub locations: BTreeSet<String>,
    pub skills: BTreeSet<String>,
    pub minimum_match: u8,
    pub compensation_range: Option<CompensationRange>,
    pub sort_key: SortKey,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_search(mut self, text: impl Into<String>) -> Self {
        self.search_text = text.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.locations.insert(location.into());
        self
    }

    pub fn with_skill(mut self, skill: impl Into<String>) -> Self {
        self.skills.insert(skill.into());
        self
    }

    pub fn with_minimum_match(mut self, minimum: u8) -> Self {
        self.minimum_match = minimum;
        self
    }

    pub fn with_compensation_range(mut self, range: CompensationRange) -> Self {
        self.compensation_range = Some(range);
        self
    }

    pub fn sorted_by(mut self, sort_key: SortKey) -> Self {
        self.sort_key = sort_key;
        self
    }

    /// Select the location if absent, deselect it otherwise.
    pub fn toggle_location(&mut self, location: &str) {
        if !self.locations.remove(location) {
            self.locations.insert(location.to_string());
        }
    }

    /// Select the skill if absent, deselect it otherwise.
    pub fn toggle_skill(&mut self, skill: &str) {
        if !self.skills.remove(skill) {
            self.skills.insert(skill.to_string());
        }
    }

    /// Clear search, facets, and sort back to their defaults.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub(crate) fn normalized_search(&self) -> Option<String> {
        let trimmed = self.search_text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_lowercase())
        }
    }

    pub fn has_active_filters(&self) -> bool {
        self.normalized_search().is_some()
            || !self.locations.is_empty()
            || !self.skills.is_empty()
            || self.minimum_match > 0
            || self.compensation_range.is_some()
    }
}
