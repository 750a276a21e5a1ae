use chrono::NaiveDate;

use crate::listings::{CourseStatus, Listing, ListingDetails, ListingId, MatchScore};

pub(super) fn job(id: &str, score: u8, tags: &[&str]) -> Listing {
    job_at(id, score, tags, "Remoto", "R$ 8.000 - R$ 12.000")
}

pub(super) fn job_at(
    id: &str,
    score: u8,
    tags: &[&str],
    location: &str,
    salary_range: &str,
) -> Listing {
    Listing {
        id: ListingId(id.to_string()),
        title: format!("Vaga {id}"),
        organization: "Empresa A".to_string(),
        tags: tags.iter().map(|tag| tag.to_string()).collect(),
        match_score: MatchScore::new(score).expect("valid score"),
        posted_on: None,
        details: ListingDetails::Job {
            location: location.to_string(),
            salary_range: salary_range.to_string(),
        },
    }
}

pub(super) fn course(id: &str, score: u8, duration: &str) -> Listing {
    Listing {
        id: ListingId(id.to_string()),
        title: format!("Curso {id}"),
        organization: "Alura".to_string(),
        tags: vec!["Python".to_string()],
        match_score: MatchScore::new(score).expect("valid score"),
        posted_on: None,
        details: ListingDetails::Course {
            duration: duration.to_string(),
            status: CourseStatus::NotStarted,
        },
    }
}

pub(super) fn posted(mut listing: Listing, year: i32, month: u32, day: u32) -> Listing {
    listing.posted_on = Some(NaiveDate::from_ymd_opt(year, month, day).expect("valid date"));
    listing
}

pub(super) fn titled(mut listing: Listing, title: &str, organization: &str) -> Listing {
    listing.title = title.to_string();
    listing.organization = organization.to_string();
    listing
}

pub(super) fn ids(listings: &[Listing]) -> Vec<&str> {
    listings.iter().map(|listing| listing.id.0.as_str()).collect()
}

pub(super) fn scores(listings: &[Listing]) -> Vec<u8> {
    listings
        .iter()
        .map(|listing| listing.match_score.value())
        .collect()
}

/// Mixed candidate set covering every facet and parse outcome.
pub(super) fn mixed_candidates() -> Vec<Listing> {
    vec![
        posted(
            titled(
                job_at(
                    "j1",
                    87,
                    &["Marketing Digital", "SEO", "Analytics"],
                    "São Paulo, SP",
                    "R$ 8.000 - R$ 12.000",
                ),
                "Analista de Marketing Digital",
                "Tech Solutions",
            ),
            2025,
            9,
            2,
        ),
        posted(
            titled(
                job_at(
                    "j2",
                    85,
                    &["Analytics", "SQL", "Python"],
                    "Remoto",
                    "R$ 9.000 - R$ 13.000",
                ),
                "Analista de Dados de Marketing",
                "Data Insights",
            ),
            2025,
            9,
            21,
        ),
        titled(
            job_at("j3", 40, &["Excel"], "Remoto", "A combinar"),
            "Estágio Administrativo",
            "Empresa Z",
        ),
        course("c1", 92, "8 semanas"),
        course("c2", 95, "6 semanas"),
    ]
}
