use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::service::rank_resolver::{LookupStep, UpstreamFailure};

/// Failure of a single request, converted into a JSON error envelope.
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or malformed client input. 400, never logged as a fault.
    #[error("{0}")]
    Validation(String),

    /// The provider could not be reached or answered with unusable data. 500.
    #[error(transparent)]
    Upstream(#[from] UpstreamFailure),

    /// The account store failed. 500 with the underlying message.
    #[error(transparent)]
    Store(#[from] sqlx::Error),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            // A body that is not declared as json carries no fields
            JsonRejection::MissingJsonContentType(_) => Self::Validation("Missing required fields".into()),
            other => Self::Validation(other.body_text()),
        }
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub step: Option<LookupStep>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

impl ErrorResponse {
    fn new(error: String) -> Self {
        Self {
            success: false,
            error,
            step: None,
            status: None,
            data: None,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::Validation(msg) => {
                tracing::debug!("Rejected request: {}", msg);
                (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(msg))).into_response()
            }
            Self::Upstream(failure) => {
                tracing::error!(
                    step = %failure.step(),
                    status = ?failure.status(),
                    body = ?failure.body(),
                    "Riot API error: {}",
                    failure
                );

                // Forward the provider body as json when possible
                let data = failure.body().map(|body| {
                    serde_json::from_str(body).unwrap_or_else(|_| serde_json::Value::String(body.to_string()))
                });

                let response = ErrorResponse {
                    step: Some(failure.step()),
                    status: failure.status(),
                    data,
                    ..ErrorResponse::new(failure.to_string())
                };

                (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
            }
            Self::Store(err) => {
                tracing::error!("Account store error: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, Json(ErrorResponse::new(err.to_string()))).into_response()
            }
        }
    }
}

/// Errors aborting startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
    #[error("Failed to open account store: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Server error: {0}")]
    Server(#[from] std::io::Error),
}
