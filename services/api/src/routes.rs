use crate::infra::{AppState, DiscoveryState};
use axum::extract::Path;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use skillup::accounts::{account_router, AccountService, AccountStore};
use skillup::dashboard::DashboardSummary;
use skillup::discovery::{
    discover, CompensationRange, DiscoveryOutcome, FacetIndex, FilterCriteria,
    InvalidCompensationRange, SortKey,
};
use skillup::error::AppError;
use skillup::insights::{generate_insights, Insight, InsightRequest};
use skillup::listings::{Catalog, Listing, ListingId};
use skillup::roadmap::{RoadmapItem, RoadmapProgress};
use std::sync::Arc;

/// Search form as sent by the job and course screens.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct SearchRequest {
    pub(crate) search_text: String,
    pub(crate) locations: Vec<String>,
    pub(crate) skills: Vec<String>,
    pub(crate) minimum_match: u8,
    pub(crate) salary_min: Option<u32>,
    pub(crate) salary_max: Option<u32>,
    pub(crate) sort: Option<String>,
}

impl SearchRequest {
    pub(crate) fn into_criteria(self) -> Result<FilterCriteria, InvalidCompensationRange> {
        let sort_key = self
            .sort
            .as_deref()
            .map(SortKey::from_label)
            .unwrap_or_default();

        let mut criteria = FilterCriteria::new()
            .with_search(self.search_text)
            .with_minimum_match(self.minimum_match)
            .sorted_by(sort_key);
        for location in self.locations {
            criteria = criteria.with_location(location);
        }
        for skill in self.skills {
            criteria = criteria.with_skill(skill);
        }

        if self.salary_min.is_some() || self.salary_max.is_some() {
            let range = CompensationRange::new(
                self.salary_min.unwrap_or(0),
                self.salary_max.unwrap_or(u32::MAX),
            )?;
            criteria = criteria.with_compensation_range(range);
        }

        Ok(criteria)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchResponse {
    pub(crate) matched: usize,
    #[serde(flatten)]
    pub(crate) outcome: DiscoveryOutcome,
}

#[derive(Debug, Serialize)]
pub(crate) struct RoadmapResponse {
    pub(crate) items: Vec<RoadmapItem>,
    pub(crate) progress: RoadmapProgress,
}

pub(crate) fn search(
    candidates: &[Listing],
    request: SearchRequest,
) -> Result<SearchResponse, AppError> {
    let criteria = request.into_criteria()?;
    let outcome = discover(candidates, &criteria);
    Ok(SearchResponse {
        matched: outcome.results.len(),
        outcome,
    })
}

pub(crate) fn with_discovery_routes<S>(accounts: Arc<AccountService<S>>) -> axum::Router
where
    S: AccountStore + 'static,
{
    account_router(accounts)
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/jobs/search", post(job_search_endpoint))
        .route("/api/v1/jobs/facets", get(job_facets_endpoint))
        .route("/api/v1/jobs/:listing_id", get(job_detail_endpoint))
        .route("/api/v1/courses/search", post(course_search_endpoint))
        .route("/api/v1/courses/:listing_id", get(course_detail_endpoint))
        .route("/api/v1/dashboard", get(dashboard_endpoint))
        .route("/api/v1/roadmap", get(roadmap_endpoint))
        .route("/api/v1/insights", post(insights_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn job_search_endpoint(
    Extension(state): Extension<DiscoveryState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    search(state.jobs.listings(), request).map(Json)
}

pub(crate) async fn course_search_endpoint(
    Extension(state): Extension<DiscoveryState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    search(state.courses.listings(), request).map(Json)
}

fn find_listing(catalog: &Catalog, id: String) -> Result<Json<Listing>, AppError> {
    let id = ListingId(id);
    match catalog.get(&id) {
        Some(listing) => Ok(Json(listing.clone())),
        None => Err(AppError::ListingNotFound(id)),
    }
}

pub(crate) async fn job_detail_endpoint(
    Extension(state): Extension<DiscoveryState>,
    Path(listing_id): Path<String>,
) -> Result<Json<Listing>, AppError> {
    find_listing(&state.jobs, listing_id)
}

pub(crate) async fn course_detail_endpoint(
    Extension(state): Extension<DiscoveryState>,
    Path(listing_id): Path<String>,
) -> Result<Json<Listing>, AppError> {
    find_listing(&state.courses, listing_id)
}

pub(crate) async fn dashboard_endpoint(
    Extension(state): Extension<DiscoveryState>,
) -> Json<DashboardSummary> {
    Json(DashboardSummary::build(
        &state.jobs,
        &state.courses,
        &state.roadmap,
    ))
}

pub(crate) async fn job_facets_endpoint(
    Extension(state): Extension<DiscoveryState>,
) -> Json<FacetIndex> {
    Json(FacetIndex::build(state.jobs.listings()))
}

pub(crate) async fn roadmap_endpoint(
    Extension(state): Extension<DiscoveryState>,
) -> Json<RoadmapResponse> {
    let items = state.roadmap.as_ref().clone();
    let progress = RoadmapProgress::from_items(&items);
    Json(RoadmapResponse { items, progress })
}

pub(crate) async fn insights_endpoint(
    Extension(state): Extension<DiscoveryState>,
    Json(request): Json<InsightRequest>,
) -> Json<Vec<Insight>> {
    Json(generate_insights(&request, &state.market_demand()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemoryAccountStore;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn seed_state() -> DiscoveryState {
        DiscoveryState::new(Catalog::seed_jobs(), Catalog::seed_courses())
    }

    fn ids(response: &SearchResponse) -> Vec<&str> {
        response
            .outcome
            .results
            .iter()
            .map(|listing| listing.id.0.as_str())
            .collect()
    }

    #[tokio::test]
    async fn job_search_filters_and_sorts_by_salary() {
        let request = SearchRequest {
            locations: vec!["Remoto".to_string()],
            sort: Some("salary".to_string()),
            ..SearchRequest::default()
        };

        let Json(body) = job_search_endpoint(Extension(seed_state()), Json(request))
            .await
            .expect("search runs");

        assert_eq!(ids(&body), vec!["job-2", "job-4"]);
        assert_eq!(body.matched, 2);
        assert_eq!(body.outcome.total_candidates, 4);
        assert_eq!(body.outcome.sort_key, SortKey::Compensation);
    }

    #[tokio::test]
    async fn course_search_orders_by_duration() {
        let request = SearchRequest {
            sort: Some("duration".to_string()),
            ..SearchRequest::default()
        };

        let Json(body) = course_search_endpoint(Extension(seed_state()), Json(request))
            .await
            .expect("search runs");

        assert_eq!(ids(&body), vec!["course-3", "course-1", "course-2"]);
    }

    #[test]
    fn inverted_salary_window_is_rejected() {
        let request = SearchRequest {
            salary_min: Some(12_000),
            salary_max: Some(5_000),
            ..SearchRequest::default()
        };

        let err = search(Catalog::seed_jobs().listings(), request).expect_err("range rejected");
        assert!(matches!(err, AppError::Criteria(_)));
    }

    #[test]
    fn open_ended_salary_window_keeps_upper_bound_unbounded() {
        let request = SearchRequest {
            salary_min: Some(9_000),
            ..SearchRequest::default()
        };

        let criteria = request.into_criteria().expect("valid range");
        let range = criteria.compensation_range.expect("range set");
        assert_eq!(range.min(), 9_000);
        assert_eq!(range.max(), u32::MAX);
    }

    #[tokio::test]
    async fn detail_endpoints_look_up_by_id() {
        let Json(job) = job_detail_endpoint(Extension(seed_state()), Path("job-4".to_string()))
            .await
            .expect("job exists");
        assert_eq!(job.organization, "Data Insights");

        let err = course_detail_endpoint(Extension(seed_state()), Path("job-2".to_string()))
            .await
            .expect_err("jobs are not courses");
        assert!(matches!(err, AppError::ListingNotFound(_)));
    }

    #[tokio::test]
    async fn dashboard_endpoint_summarizes_catalogs() {
        let Json(body) = dashboard_endpoint(Extension(seed_state())).await;

        assert_eq!(body.total_jobs, 4);
        assert_eq!(body.courses_in_progress, 1);
        assert_eq!(body.top_jobs.len(), 3);
        assert_eq!(body.roadmap_preview.len(), 2);
    }

    #[tokio::test]
    async fn roadmap_endpoint_reports_progress() {
        let Json(body) = roadmap_endpoint(Extension(seed_state())).await;

        assert_eq!(body.items.len(), 3);
        assert_eq!(body.progress.completed, 1);
        assert_eq!(body.progress.total_weeks, 18);
    }

    #[tokio::test]
    async fn routes_serve_facets_and_insights() {
        let accounts = Arc::new(AccountService::new(Arc::new(
            InMemoryAccountStore::default(),
        )));
        let app = with_discovery_routes(accounts).layer(Extension(seed_state()));

        let facets = app
            .clone()
            .oneshot(
                Request::get("/api/v1/jobs/facets")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(facets.status(), StatusCode::OK);
        let bytes = to_bytes(facets.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let facets: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(facets["locations"], json!(["São Paulo, SP", "Remoto"]));

        let insights = app
            .oneshot(
                Request::post("/api/v1/insights")
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({ "skills": ["Marketing Digital"], "target_role": "Growth Lead" })
                            .to_string(),
                    ))
                    .expect("request builds"),
            )
            .await
            .expect("router responds");
        assert_eq!(insights.status(), StatusCode::OK);
        let bytes = to_bytes(insights.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let insights: Vec<Insight> = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(insights.len(), 3);
        assert!(insights[1].description.contains("Growth Lead"));
        assert!(insights[1].description.contains("SEO"));
    }

    #[tokio::test]
    async fn unknown_listing_id_returns_404() {
        let accounts = Arc::new(AccountService::new(Arc::new(
            InMemoryAccountStore::default(),
        )));
        let app = with_discovery_routes(accounts).layer(Extension(seed_state()));

        let response = app
            .oneshot(
                Request::get("/api/v1/jobs/job-99")
                    .body(Body::empty())
                    .expect("request builds"),
            )
            .await
            .expect("router responds");

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body: serde_json::Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body["error"], "listing not found: job-99");
    }
}
