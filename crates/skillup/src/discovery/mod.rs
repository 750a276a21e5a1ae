//! Listing filter and rank engine.
//!
//! Every operation is a pure function of the candidate set and the criteria:
//! results are new sequences and the candidates are never reordered in place.

mod criteria;
mod facets;
mod predicate;
mod ranker;

#[cfg(test)]
mod tests;

pub use criteria::{CompensationRange, FilterCriteria, InvalidCompensationRange, SortKey};
pub use facets::FacetIndex;
pub use predicate::matches;
pub use ranker::rank;

use serde::Serialize;
use tracing::debug;

use crate::listings::Listing;

/// Filter `candidates` by `criteria` and order the survivors by its sort key.
pub fn apply(candidates: &[Listing], criteria: &FilterCriteria) -> Vec<Listing> {
    let search = criteria.normalized_search();
    let mut results: Vec<Listing> = candidates
        .iter()
        .filter(|listing| predicate::matches_with(listing, criteria, search.as_deref()))
        .cloned()
        .collect();
    ranker::sort_in_place(&mut results, criteria.sort_key);
    results
}

/// Result bundle handed to a renderer: ordered matches plus facet choices.
#[derive(Debug, Clone, Serialize)]
pub struct DiscoveryOutcome {
    pub total_candidates: usize,
    pub sort_key: SortKey,
    pub results: Vec<Listing>,
    pub facets: FacetIndex,
}

impl DiscoveryOutcome {
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

pub fn discover(candidates: &[Listing], criteria: &FilterCriteria) -> DiscoveryOutcome {
    let results = apply(candidates, criteria);
    let facets = FacetIndex::build(candidates);

    debug!(
        candidates = candidates.len(),
        matched = results.len(),
        sort = %criteria.sort_key,
        filtered = criteria.has_active_filters(),
        "discovery applied"
    );

    DiscoveryOutcome {
        total_candidates: candidates.len(),
        sort_key: criteria.sort_key,
        results,
        facets,
    }
}
