use tracing::debug;

use super::criteria::FilterCriteria;
use crate::listings::Listing;

/// True when the listing satisfies every active criterion.
pub fn matches(listing: &Listing, criteria: &FilterCriteria) -> bool {
    let search = criteria.normalized_search();
    matches_with(listing, criteria, search.as_deref())
}

pub(crate) fn matches_with(
    listing: &Listing,
    criteria: &FilterCriteria,
    search: Option<&str>,
) -> bool {
    search.map_or(true, |needle| matches_search(listing, needle))
        && matches_location(listing, criteria)
        && matches_skills(listing, criteria)
        && listing.match_score.value() >= criteria.minimum_match
        && matches_compensation(listing, criteria)
}

fn matches_search(listing: &Listing, needle: &str) -> bool {
    listing.title.to_lowercase().contains(needle)
        || listing.organization.to_lowercase().contains(needle)
        || listing
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

fn matches_location(listing: &Listing, criteria: &FilterCriteria) -> bool {
    if criteria.locations.is_empty() {
        return true;
    }
    listing
        .location()
        .is_some_and(|location| criteria.locations.contains(location))
}

fn matches_skills(listing: &Listing, criteria: &FilterCriteria) -> bool {
    criteria.skills.iter().all(|skill| listing.has_tag(skill))
}

fn matches_compensation(listing: &Listing, criteria: &FilterCriteria) -> bool {
    let Some(range) = criteria.compensation_range else {
        return true;
    };

    match listing.compensation() {
        Ok(value) => range.contains(value),
        Err(err) => {
            debug!(listing = %listing.id, error = %err, "excluding listing from compensation range");
            false
        }
    }
}
