use crate::accounts::AccountError;
use crate::config::ConfigError;
use crate::discovery::InvalidCompensationRange;
use crate::listings::{CatalogImportError, ListingId};
use crate::telemetry::TelemetryError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Catalog(CatalogImportError),
    Criteria(InvalidCompensationRange),
    Account(AccountError),
    ListingNotFound(ListingId),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Catalog(err) => write!(f, "catalog error: {}", err),
            AppError::Criteria(err) => write!(f, "invalid filter: {}", err),
            AppError::Account(err) => write!(f, "account error: {}", err),
            AppError::ListingNotFound(id) => write!(f, "listing not found: {}", id),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Catalog(err) => Some(err),
            AppError::Criteria(err) => Some(err),
            AppError::Account(err) => Some(err),
            AppError::ListingNotFound(_) => None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Catalog(_) | AppError::Criteria(_) => StatusCode::BAD_REQUEST,
            AppError::Account(AccountError::Invalid(_)) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Account(AccountError::EmailTaken) => StatusCode::CONFLICT,
            AppError::Account(AccountError::InvalidCredentials) => StatusCode::UNAUTHORIZED,
            AppError::Account(AccountError::NotFound) | AppError::ListingNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            AppError::Config(_)
            | AppError::Telemetry(_)
            | AppError::Io(_)
            | AppError::Account(AccountError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({ "error": self.to_string() }));
        (status, body).into_response()
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<CatalogImportError> for AppError {
    fn from(value: CatalogImportError) -> Self {
        Self::Catalog(value)
    }
}

impl From<InvalidCompensationRange> for AppError {
    fn from(value: InvalidCompensationRange) -> Self {
        Self::Criteria(value)
    }
}

impl From<AccountError> for AppError {
    fn from(value: AccountError) -> Self {
        Self::Account(value)
    }
}
