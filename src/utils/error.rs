use crate::utils::validation::Issue;
use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use serde_json::json;

/// Stable discriminator clients can branch on.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    ValidationError,
    ServerError,
    MissingRoute,
    MissingResource,
}

/// The terminal error value: whatever fails anywhere in the pipeline is
/// turned into one of these before it becomes a response.
#[derive(Debug)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub message: String,
    pub status_code: StatusCode,
    pub details: Option<Vec<Issue>>,
}

impl ApiError {
    pub fn validation(details: Vec<Issue>) -> Self {
        Self {
            kind: ErrorKind::ValidationError,
            message: String::from("Validation error"),
            status_code: StatusCode::BAD_REQUEST,
            details: Some(details),
        }
    }

    pub fn missing_resource(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::MissingResource,
            message: message.into(),
            status_code: StatusCode::NOT_FOUND,
            details: None,
        }
    }

    pub fn missing_route() -> Self {
        Self {
            kind: ErrorKind::MissingRoute,
            message: String::from("Route not found"),
            status_code: StatusCode::NOT_FOUND,
            details: None,
        }
    }

    pub fn server_error() -> Self {
        Self {
            kind: ErrorKind::ServerError,
            message: String::from("Server Error"),
            status_code: StatusCode::INTERNAL_SERVER_ERROR,
            details: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self.kind {
            ErrorKind::ServerError => {
                tracing::error!("SERVER ERROR: {} - [{}]", self.message, self.status_code)
            }
            _ => tracing::warn!("API ERROR: {} - [{}]", self.message, self.status_code),
        };

        (
            self.status_code,
            Json(json!({
                "type": self.kind,
                "error": self.message,
                "details": self.details,
            })),
        )
            .into_response()
    }
}
