use crate::infra::DiscoveryState;
use crate::routes::{search, SearchRequest, SearchResponse};
use clap::Args;
use skillup::config::AppConfig;
use skillup::error::AppError;
use skillup::insights::{generate_insights, InsightRequest};
use skillup::listings::{CatalogImporter, Listing, ListingDetails, ListingKind};
use skillup::roadmap::RoadmapProgress;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct SearchArgs {
    /// Case-insensitive text matched against title, organization, and tags
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Restrict to a location (repeatable)
    #[arg(long = "location")]
    pub(crate) locations: Vec<String>,
    /// Require a skill tag (repeatable, all must match)
    #[arg(long = "skill")]
    pub(crate) skills: Vec<String>,
    /// Minimum match score (0-100)
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u8).range(0..=100))]
    pub(crate) min_match: u8,
    /// Lower bound of the salary window
    #[arg(long)]
    pub(crate) salary_min: Option<u32>,
    /// Upper bound of the salary window
    #[arg(long)]
    pub(crate) salary_max: Option<u32>,
    /// Sort by match, salary, recency, or duration
    #[arg(long)]
    pub(crate) sort: Option<String>,
    /// CSV export to search instead of the configured catalog
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the full result as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

impl SearchArgs {
    fn request(&self) -> SearchRequest {
        SearchRequest {
            search_text: self.search.clone().unwrap_or_default(),
            locations: self.locations.clone(),
            skills: self.skills.clone(),
            minimum_match: self.min_match,
            salary_min: self.salary_min,
            salary_max: self.salary_max,
            sort: self.sort.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Skills already on the sample profile (repeatable)
    #[arg(long = "skill", default_values_t = ["Marketing Digital".to_string(), "SEO".to_string()])]
    pub(crate) skills: Vec<String>,
    /// Career goal used for the insight cards
    #[arg(long, default_value = "Analista de Dados")]
    pub(crate) target_role: String,
}

pub(crate) fn run_search(
    config: &AppConfig,
    kind: ListingKind,
    args: SearchArgs,
) -> Result<(), AppError> {
    let catalog = match &args.catalog {
        Some(path) => {
            let (jobs, courses) = CatalogImporter::from_path(path)?.partition();
            match kind {
                ListingKind::Job => jobs,
                ListingKind::Course => courses,
            }
        }
        None => match kind {
            ListingKind::Job => config.catalog.load_jobs()?,
            ListingKind::Course => config.catalog.load_courses()?,
        },
    };

    let response = search(catalog.listings(), args.request())?;

    if args.json {
        let rendered = serde_json::to_string_pretty(&response).map_err(std::io::Error::other)?;
        println!("{rendered}");
    } else {
        print_results(kind, &response);
    }

    Ok(())
}

pub(crate) fn run_demo(config: &AppConfig, args: DemoArgs) -> Result<(), AppError> {
    let state = DiscoveryState::load(&config.catalog)?;

    println!("== SkillUp demo ==");
    println!("Profile skills: {}", args.skills.join(", "));
    println!("Target role: {}", args.target_role);
    println!();

    let jobs = search(
        state.jobs.listings(),
        SearchRequest {
            skills: args.skills.iter().take(1).cloned().collect(),
            ..SearchRequest::default()
        },
    )?;
    print_results(ListingKind::Job, &jobs);
    println!();

    let courses = search(
        state.courses.listings(),
        SearchRequest {
            sort: Some("duration".to_string()),
            ..SearchRequest::default()
        },
    )?;
    print_results(ListingKind::Course, &courses);
    println!();

    let progress = RoadmapProgress::from_items(&state.roadmap);
    println!(
        "Roadmap: {}/{} milestones complete ({:.0}%), {} weeks planned",
        progress.completed,
        state.roadmap.len(),
        progress.completion_ratio * 100.0,
        progress.total_weeks
    );
    for item in state.roadmap.iter() {
        println!("  - {} [{}] {}", item.title, item.duration, item.skills.join(", "));
    }
    println!();

    let request = InsightRequest {
        skills: args.skills,
        target_role: args.target_role,
    };
    println!("Insights:");
    for insight in generate_insights(&request, &state.market_demand()) {
        println!("  * {}: {}", insight.title, insight.description);
    }

    Ok(())
}

fn print_results(kind: ListingKind, response: &SearchResponse) {
    let outcome = &response.outcome;
    println!(
        "{} of {} {}s (sorted by {})",
        response.matched,
        outcome.total_candidates,
        kind.label(),
        outcome.sort_key
    );

    if outcome.is_empty() {
        println!("  no listings match the current filters");
        return;
    }

    for listing in &outcome.results {
        println!("  {}", describe(listing));
    }

    if kind == ListingKind::Job && !outcome.facets.locations.is_empty() {
        println!("  locations: {}", outcome.facets.locations.join(" | "));
    }
    let skills = outcome.facets.skills_preview(8);
    if !skills.is_empty() {
        println!("  skills: {}", skills.join(" | "));
    }
}

fn describe(listing: &Listing) -> String {
    let detail = match &listing.details {
        ListingDetails::Job {
            location,
            salary_range,
        } => format!("{location} · {salary_range}"),
        ListingDetails::Course { duration, status } => {
            format!("{duration} · {}", status.label())
        }
    };

    format!(
        "{:>4}  {} · {} · {}",
        listing.match_score.to_string(),
        listing.title,
        listing.organization,
        detail
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use skillup::discovery::SortKey;
    use skillup::listings::Catalog;

    #[test]
    fn search_args_become_request() {
        let args = SearchArgs {
            search: Some("dados".to_string()),
            skills: vec!["SQL".to_string()],
            min_match: 80,
            sort: Some("recent".to_string()),
            ..SearchArgs::default()
        };

        let criteria = args.request().into_criteria().expect("valid criteria");
        assert_eq!(criteria.search_text, "dados");
        assert!(criteria.skills.contains("SQL"));
        assert_eq!(criteria.minimum_match, 80);
        assert_eq!(criteria.sort_key, SortKey::Recency);
        assert!(criteria.compensation_range.is_none());
    }

    #[test]
    fn describe_formats_both_kinds() {
        let jobs = Catalog::seed_jobs();
        let courses = Catalog::seed_courses();

        let job = describe(&jobs.listings()[0]);
        assert!(job.starts_with(" 87%"));
        assert!(job.contains("São Paulo, SP"));

        let course = describe(&courses.listings()[0]);
        assert!(course.contains("8 semanas · in_progress"));
    }
}
