use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};

use super::domain::{AccountId, Credentials, ProfileUpdate, SignupRequest, UserProfile};
use super::service::AccountService;
use super::store::AccountStore;
use crate::error::AppError;

/// Router builder exposing signup, login, and profile endpoints.
///
/// Failures surface as [`AppError`], which owns the status code mapping.
pub fn account_router<S>(service: Arc<AccountService<S>>) -> Router
where
    S: AccountStore + 'static,
{
    Router::new()
        .route("/api/v1/accounts/signup", post(signup_handler::<S>))
        .route("/api/v1/accounts/login", post(login_handler::<S>))
        .route(
            "/api/v1/accounts/:account_id",
            get(profile_handler::<S>).patch(update_handler::<S>),
        )
        .with_state(service)
}

pub(crate) async fn signup_handler<S>(
    State(service): State<Arc<AccountService<S>>>,
    Json(request): Json<SignupRequest>,
) -> Result<(StatusCode, Json<UserProfile>), AppError>
where
    S: AccountStore + 'static,
{
    let profile = service.signup(&request.name, &request.email, &request.password)?;
    Ok((StatusCode::CREATED, Json(profile)))
}

pub(crate) async fn login_handler<S>(
    State(service): State<Arc<AccountService<S>>>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<UserProfile>, AppError>
where
    S: AccountStore + 'static,
{
    Ok(Json(
        service.login(&credentials.email, &credentials.password)?,
    ))
}

pub(crate) async fn profile_handler<S>(
    State(service): State<Arc<AccountService<S>>>,
    Path(account_id): Path<String>,
) -> Result<Json<UserProfile>, AppError>
where
    S: AccountStore + 'static,
{
    Ok(Json(service.profile(&AccountId(account_id))?))
}

pub(crate) async fn update_handler<S>(
    State(service): State<Arc<AccountService<S>>>,
    Path(account_id): Path<String>,
    Json(update): Json<ProfileUpdate>,
) -> Result<Json<UserProfile>, AppError>
where
    S: AccountStore + 'static,
{
    Ok(Json(
        service.update_profile(&AccountId(account_id), update)?,
    ))
}
