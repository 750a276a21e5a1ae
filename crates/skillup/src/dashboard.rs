//! Home screen summary: course and job counters, the best-matching openings,
//! and the next roadmap milestones.

use serde::Serialize;

use crate::discovery::{rank, SortKey};
use crate::listings::{Catalog, CourseStatus, Listing, ListingDetails};
use crate::roadmap::{RoadmapItem, RoadmapProgress};

pub const TOP_JOB_COUNT: usize = 3;
pub const ROADMAP_PREVIEW_COUNT: usize = 2;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub courses_in_progress: usize,
    pub total_jobs: usize,
    pub top_jobs: Vec<Listing>,
    pub roadmap_preview: Vec<RoadmapItem>,
    pub progress: RoadmapProgress,
}

impl DashboardSummary {
    pub fn build(jobs: &Catalog, courses: &Catalog, roadmap: &[RoadmapItem]) -> Self {
        let courses_in_progress = courses
            .listings()
            .iter()
            .filter(|listing| {
                matches!(
                    listing.details,
                    ListingDetails::Course {
                        status: CourseStatus::InProgress,
                        ..
                    }
                )
            })
            .count();

        let mut top_jobs = rank(jobs.listings(), SortKey::Match);
        top_jobs.truncate(TOP_JOB_COUNT);

        Self {
            courses_in_progress,
            total_jobs: jobs.len(),
            top_jobs,
            roadmap_preview: roadmap.iter().take(ROADMAP_PREVIEW_COUNT).cloned().collect(),
            progress: RoadmapProgress::from_items(roadmap),
        }
    }
}
