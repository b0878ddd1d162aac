//! HTTP error handling and response types.

use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::error::InsightsError;
use crate::services::ViewId;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    Internal(String),
    Insights(InsightsError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
            AppError::Insights(e) => {
                let code = match &e {
                    InsightsError::InvalidFilterState { .. } => "INVALID_FILTER_STATE",
                    InsightsError::UnknownView(_) => "UNKNOWN_VIEW",
                    _ => "INTERNAL_ERROR",
                };
                let status = if e.is_client_error() {
                    StatusCode::BAD_REQUEST
                } else {
                    StatusCode::INTERNAL_SERVER_ERROR
                };
                let error = ApiError::new(code, e.to_string());
                let error = match &e {
                    InsightsError::UnknownView(_) => error.with_details(format!(
                        "available views: {}",
                        ViewId::ALL.map(|id| id.as_str()).join(", ")
                    )),
                    _ => error,
                };
                (status, error)
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<InsightsError> for AppError {
    fn from(err: InsightsError) -> Self {
        AppError::Insights(err)
    }
}

/// A query string that does not deserialize (e.g. `min_month=abc`) is an
/// invalid filter like any other.
impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::Insights(InsightsError::invalid_filter(rejection.body_text()))
    }
}
