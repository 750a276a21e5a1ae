//! Job and course listings: domain records, free-text parsing, and catalog sources.

mod catalog;
mod domain;
mod importer;
mod parse;

pub use catalog::Catalog;
pub use domain::{
    CourseStatus, InvalidMatchScore, Listing, ListingDetails, ListingId, ListingKind, MatchScore,
};
pub use importer::{CatalogImportError, CatalogImporter};
pub use parse::{parse_compensation, parse_duration_weeks, ListingField, ListingParseError};
