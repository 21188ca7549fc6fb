//! Unified error types for the repoviz API
//!
//! This module defines error types for each layer:
//! - `GitHubError`: GitHub API client errors, already classified by category
//! - `AppError`: Application layer errors (wraps client errors for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Upstream messages that mean the configured token itself was rejected
const BAD_CREDENTIAL_MARKERS: [&str; 2] = ["Bad credentials", "Invalid token"];

/// GitHub API client errors
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Rate limited: {0}")]
    RateLimited(String),

    #[error("Invalid credential: {0}")]
    InvalidCredential(String),

    #[error("Invalid username: {0}")]
    InvalidUsername(String),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    #[error("Client configuration error: {0}")]
    Config(String),
}

impl GitHubError {
    /// Classify a non-2xx upstream answer.
    ///
    /// `message` is the upstream error text (GitHub's `message` field when the
    /// body is JSON, otherwise the raw body).
    pub fn from_status(status: u16, username: &str, message: String) -> Self {
        match status {
            404 => GitHubError::UserNotFound(username.to_string()),
            403 if BAD_CREDENTIAL_MARKERS
                .iter()
                .any(|marker| message.contains(marker)) =>
            {
                GitHubError::InvalidCredential(message)
            }
            403 => GitHubError::RateLimited(message),
            422 => GitHubError::InvalidUsername(username.to_string()),
            _ => GitHubError::Api { status, message },
        }
    }
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("GitHub error: {0}")]
    GitHub(#[from] GitHubError),

    #[error("Invalid request: {0}")]
    BadRequest(String),
}

/// Error response body for JSON responses
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::GitHub(e) => match e {
                GitHubError::UserNotFound(_) => {
                    (StatusCode::NOT_FOUND, "User not found".to_string(), None)
                }
                GitHubError::InvalidUsername(_) => {
                    (StatusCode::BAD_REQUEST, "Invalid username".to_string(), None)
                }
                GitHubError::InvalidCredential(msg) => {
                    tracing::warn!("GitHub rejected the configured token: {}", msg);
                    (
                        StatusCode::UNAUTHORIZED,
                        "Invalid GitHub token. Please check your .env file.".to_string(),
                        Some(
                            "Make sure your GITHUB_TOKEN is correct and has the 'public_repo' scope."
                                .to_string(),
                        ),
                    )
                }
                GitHubError::RateLimited(msg) => {
                    tracing::warn!("GitHub rate limit hit: {}", msg);
                    (
                        StatusCode::TOO_MANY_REQUESTS,
                        "Rate limit exceeded. Please try again later.".to_string(),
                        Some(msg.clone()),
                    )
                }
                GitHubError::Api { message, .. } => {
                    tracing::error!("GitHub error: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Failed to fetch user data".to_string(),
                        Some(message.clone()),
                    )
                }
                GitHubError::Request(inner) => {
                    tracing::error!("GitHub error: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Failed to fetch user data".to_string(),
                        Some(inner.to_string()),
                    )
                }
                GitHubError::Deserialization(msg) | GitHubError::Config(msg) => {
                    tracing::error!("GitHub error: {}", e);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Failed to fetch user data".to_string(),
                        Some(msg.clone()),
                    )
                }
            },
        };

        let body = Json(ErrorResponse { error, details });

        (status, body).into_response()
    }
}
