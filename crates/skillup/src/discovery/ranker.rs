use std::cmp::{Ordering, Reverse};

use super::criteria::SortKey;
use crate::listings::Listing;

/// Return a new sequence ordered by `sort_key`.
///
/// Every ordering is stable. Listings whose sort attribute is unknown
/// (unparsable salary or duration, missing publish date) follow all known
/// values and keep their relative order.
pub fn rank(listings: &[Listing], sort_key: SortKey) -> Vec<Listing> {
    let mut ranked = listings.to_vec();
    sort_in_place(&mut ranked, sort_key);
    ranked
}

pub(crate) fn sort_in_place(listings: &mut [Listing], sort_key: SortKey) {
    match sort_key {
        SortKey::Match => listings.sort_by_key(|listing| Reverse(listing.match_score)),
        SortKey::Compensation => listings.sort_by(|a, b| {
            known_first(a.compensation().ok(), b.compensation().ok(), |x, y| y.cmp(x))
        }),
        SortKey::Duration => listings.sort_by(|a, b| {
            known_first(a.duration_weeks().ok(), b.duration_weeks().ok(), |x, y| {
                x.cmp(y)
            })
        }),
        SortKey::Recency => {
            listings.sort_by(|a, b| known_first(a.posted_on, b.posted_on, |x, y| y.cmp(x)))
        }
        SortKey::Unordered => {}
    }
}

fn known_first<T>(a: Option<T>, b: Option<T>, cmp: impl Fn(&T, &T) -> Ordering) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => cmp(&a, &b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
