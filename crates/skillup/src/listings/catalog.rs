use chrono::NaiveDate;
use serde::Serialize;

use super::domain::{CourseStatus, Listing, ListingDetails, ListingId, ListingKind, MatchScore};

/// Immutable candidate set backing a listing screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    pub fn new(listings: Vec<Listing>) -> Self {
        Self { listings }
    }

    pub fn listings(&self) -> &[Listing] {
        &self.listings
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }

    pub fn get(&self, id: &ListingId) -> Option<&Listing> {
        self.listings.iter().find(|listing| &listing.id == id)
    }

    /// Split a mixed import into the job and course catalogs.
    pub fn partition(self) -> (Catalog, Catalog) {
        let (jobs, courses): (Vec<Listing>, Vec<Listing>) = self
            .listings
            .into_iter()
            .partition(|listing| listing.kind() == ListingKind::Job);
        (Catalog::new(jobs), Catalog::new(courses))
    }

    /// Bundled job openings used when no import is configured.
    pub fn seed_jobs() -> Self {
        Self::new(vec![
            job(
                "1",
                "Analista de Marketing Digital Sênior",
                "Tech Solutions",
                "São Paulo, SP",
                "R$ 8.000 - R$ 12.000",
                87,
                &["Marketing Digital", "SEO", "Google Ads", "Analytics"],
                (2025, 9, 2),
            ),
            job(
                "2",
                "Especialista em Growth Marketing",
                "StartupXYZ",
                "Remoto",
                "R$ 10.000 - R$ 15.000",
                82,
                &["Growth Hacking", "SEO", "Marketing", "Analytics"],
                (2025, 9, 18),
            ),
            job(
                "3",
                "Coordenador de Marketing",
                "E-commerce Brasil",
                "São Paulo, SP",
                "R$ 7.000 - R$ 10.000",
                78,
                &["Marketing Digital", "Gestão de Equipe", "E-commerce"],
                (2025, 8, 27),
            ),
            job(
                "4",
                "Analista de Dados de Marketing",
                "Data Insights",
                "Remoto",
                "R$ 9.000 - R$ 13.000",
                85,
                &["Marketing Digital", "Analytics", "SQL", "Python"],
                (2025, 9, 21),
            ),
        ])
    }

    /// Bundled course recommendations used when no import is configured.
    pub fn seed_courses() -> Self {
        Self::new(vec![
            course(
                "1",
                "Python para Análise de Dados",
                "Coursera",
                "8 semanas",
                CourseStatus::InProgress,
                92,
                &["Python", "Pandas", "NumPy"],
            ),
            course(
                "2",
                "Machine Learning Fundamentals",
                "Udemy",
                "10 semanas",
                CourseStatus::NotStarted,
                88,
                &["Machine Learning", "Python", "TensorFlow"],
            ),
            course(
                "3",
                "Data Visualization com PowerBI",
                "Alura",
                "6 semanas",
                CourseStatus::NotStarted,
                95,
                &["PowerBI", "Data Visualization", "Analytics"],
            ),
        ])
    }
}

#[allow(clippy::too_many_arguments)]
fn job(
    id: &str,
    title: &str,
    company: &str,
    location: &str,
    salary_range: &str,
    score: u8,
    skills: &[&str],
    posted_on: (i32, u32, u32),
) -> Listing {
    let (year, month, day) = posted_on;
    Listing {
        id: ListingId(format!("job-{id}")),
        title: title.to_string(),
        organization: company.to_string(),
        tags: skills.iter().map(|skill| skill.to_string()).collect(),
        match_score: seed_score(score),
        posted_on: NaiveDate::from_ymd_opt(year, month, day),
        details: ListingDetails::Job {
            location: location.to_string(),
            salary_range: salary_range.to_string(),
        },
    }
}

fn course(
    id: &str,
    title: &str,
    provider: &str,
    duration: &str,
    status: CourseStatus,
    score: u8,
    skills: &[&str],
) -> Listing {
    Listing {
        id: ListingId(format!("course-{id}")),
        title: title.to_string(),
        organization: provider.to_string(),
        tags: skills.iter().map(|skill| skill.to_string()).collect(),
        match_score: seed_score(score),
        posted_on: None,
        details: ListingDetails::Course {
            duration: duration.to_string(),
            status,
        },
    }
}

fn seed_score(score: u8) -> MatchScore {
    MatchScore::new(score).unwrap_or_default()
}
