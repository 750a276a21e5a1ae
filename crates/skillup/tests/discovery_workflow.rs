use skillup::discovery::{apply, discover, CompensationRange, FilterCriteria, SortKey};
use skillup::insights::{generate_insights, skill_gaps, InsightRequest};
use skillup::listings::{Catalog, CatalogImporter, ListingId};

fn ids(results: &[skillup::listings::Listing]) -> Vec<&str> {
    results.iter().map(|listing| listing.id.0.as_str()).collect()
}

#[test]
fn seed_jobs_default_to_match_order() {
    let jobs = Catalog::seed_jobs();

    let outcome = discover(jobs.listings(), &FilterCriteria::new());

    assert_eq!(ids(&outcome.results), vec!["job-1", "job-4", "job-2", "job-3"]);
    assert_eq!(outcome.facets.locations, vec!["São Paulo, SP", "Remoto"]);
    assert_eq!(outcome.total_candidates, 4);
}

#[test]
fn remote_jobs_sorted_by_salary() {
    let jobs = Catalog::seed_jobs();
    let criteria = FilterCriteria::new()
        .with_location("Remoto")
        .sorted_by(SortKey::from_label("salary"));

    let results = apply(jobs.listings(), &criteria);

    assert_eq!(ids(&results), vec!["job-2", "job-4"]);
}

#[test]
fn salary_window_and_skill_facets_combine() {
    let jobs = Catalog::seed_jobs();
    let criteria = FilterCriteria::new()
        .with_skill("Marketing Digital")
        .with_compensation_range(CompensationRange::new(7500, 9000).expect("valid range"));

    let results = apply(jobs.listings(), &criteria);

    assert_eq!(ids(&results), vec!["job-1", "job-4"]);
}

#[test]
fn search_reaches_tags_and_company_names() {
    let jobs = Catalog::seed_jobs();

    let by_tag = apply(jobs.listings(), &FilterCriteria::new().with_search("google"));
    assert_eq!(ids(&by_tag), vec!["job-1"]);

    let by_company = apply(jobs.listings(), &FilterCriteria::new().with_search("DATA insights"));
    assert_eq!(ids(&by_company), vec!["job-4"]);

    let by_title = apply(jobs.listings(), &FilterCriteria::new().with_search("dados"));
    assert_eq!(ids(&by_title), vec!["job-4"]);
}

#[test]
fn search_for_data_finds_the_data_analyst_opening() {
    let jobs = Catalog::seed_jobs();

    let results = apply(jobs.listings(), &FilterCriteria::new().with_search("data"));

    assert!(ids(&results).contains(&"job-4"));
    assert_eq!(results[0].title, "Analista de Dados de Marketing");
}

#[test]
fn courses_sort_by_duration() {
    let courses = Catalog::seed_courses();

    let results = apply(
        courses.listings(),
        &FilterCriteria::new().sorted_by(SortKey::Duration),
    );

    assert_eq!(ids(&results), vec!["course-3", "course-1", "course-2"]);
}

#[test]
fn recency_orders_seed_jobs_by_publish_date() {
    let jobs = Catalog::seed_jobs();

    let results = apply(jobs.listings(), &FilterCriteria::new().sorted_by(SortKey::Recency));

    assert_eq!(ids(&results), vec!["job-4", "job-2", "job-1", "job-3"]);
}

#[test]
fn imported_catalog_feeds_the_pipeline() {
    let csv = "id,kind,title,organization,tags,match_score,location,salary_range,duration,status,posted_on\n\
j1,job,Analista de Dados Jr,Empresa A,Python;SQL,78,Remoto,R$ 5.000 - R$ 7.000,,,\n\
j2,job,Engenheiro ML Jr,Empresa B,Python;ML,62,Remoto,R$ 6.000 - R$ 9.000,,,\n\
j3,job,Desenvolvedor Backend Jr,Empresa C,Node;API,45,Remoto,A combinar,,,\n";
    let catalog = CatalogImporter::from_reader(csv.as_bytes()).expect("import succeeds");

    let criteria = FilterCriteria::new()
        .with_skill("Python")
        .with_minimum_match(60)
        .sorted_by(SortKey::Compensation);
    let results = apply(catalog.listings(), &criteria);

    assert_eq!(ids(&results), vec!["j2", "j1"]);
    assert!(catalog.get(&ListingId("j3".to_string())).is_some());
}

#[test]
fn job_facets_drive_skill_gap_insights() {
    let jobs = Catalog::seed_jobs();
    let outcome = discover(jobs.listings(), &FilterCriteria::new());
    let owned = vec!["Marketing Digital".to_string(), "SEO".to_string()];

    let gaps = skill_gaps(&owned, &outcome.facets.skills, 3);
    assert_eq!(gaps, vec!["Google Ads", "Analytics", "Growth Hacking"]);

    let insights = generate_insights(
        &InsightRequest {
            skills: owned,
            target_role: "Growth Lead".to_string(),
        },
        &outcome.facets.skills,
    );
    assert!(insights[1].description.contains("Google Ads"));
}
