use std::collections::HashSet;

use serde::Serialize;

use crate::listings::Listing;

/// Distinct facet values available for selection, in order of first appearance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FacetIndex {
    pub locations: Vec<String>,
    pub skills: Vec<String>,
}

impl FacetIndex {
    pub fn build(candidates: &[Listing]) -> Self {
        let mut seen_locations = HashSet::new();
        let mut seen_skills = HashSet::new();
        let mut index = FacetIndex::default();

        for listing in candidates {
            if let Some(location) = listing.location() {
                if seen_locations.insert(location) {
                    index.locations.push(location.to_string());
                }
            }
            for skill in &listing.tags {
                if seen_skills.insert(skill.as_str()) {
                    index.skills.push(skill.clone());
                }
            }
        }

        index
    }

    /// Leading skills shown as quick filter chips.
    pub fn skills_preview(&self, limit: usize) -> &[String] {
        &self.skills[..self.skills.len().min(limit)]
    }
}
