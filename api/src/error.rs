//! Unified error types for the Hubz analytics service
//!
//! This module defines error types for each layer:
//! - `PortalError`: Portal backend client errors
//! - `LeaderboardError`: Leaderboard assembly errors
//! - `AppError`: Application layer errors (wraps the above for HTTP responses)

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::domain::entities::SubmissionId;

/// Portal backend client errors
#[derive(Debug, Error)]
pub enum PortalError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("Unauthorized - invalid or expired token")]
    Unauthorized,

    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

/// Leaderboard assembly errors
#[derive(Debug, Error)]
pub enum LeaderboardError {
    /// A required input could not be fetched; no rows are produced
    #[error("Leaderboard inputs could not be retrieved: {0}")]
    RetrievalFailed(#[source] PortalError),

    /// Comments for one submission could not be fetched; the submission is
    /// scored as if it had none
    #[error("Comments for submission {submission_id} unavailable: {source}")]
    PartialCommentLoss {
        submission_id: SubmissionId,
        #[source]
        source: PortalError,
    },
}

/// Application layer errors - used by HTTP handlers
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Portal error: {0}")]
    Portal(#[from] PortalError),

    #[error("{0}")]
    Leaderboard(#[from] LeaderboardError),

    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Unauthorized")]
    Unauthorized,
}

/// Error response body for JSON responses
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<String>,
}

fn portal_status(e: &PortalError) -> (StatusCode, &'static str, Option<String>) {
    match e {
        PortalError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized", None),
        PortalError::Api { status, message } => {
            // Client errors from the backend (bad credentials, validation) pass through
            let http_status = match *status {
                400 => StatusCode::BAD_REQUEST,
                403 => StatusCode::FORBIDDEN,
                404 => StatusCode::NOT_FOUND,
                _ => StatusCode::BAD_GATEWAY,
            };
            (http_status, "Portal error", Some(message.clone()))
        }
        PortalError::Request(_) | PortalError::Deserialization(_) => {
            (StatusCode::BAD_GATEWAY, "Portal unavailable", None)
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, details) = match &self {
            AppError::Portal(e) => {
                tracing::error!("Portal error: {}", e);
                portal_status(e)
            }
            AppError::Leaderboard(LeaderboardError::RetrievalFailed(e)) => {
                tracing::error!("Leaderboard retrieval failed: {}", e);
                match e {
                    PortalError::Unauthorized => {
                        (StatusCode::UNAUTHORIZED, "Unauthorized", None)
                    }
                    _ => (
                        StatusCode::BAD_GATEWAY,
                        "Leaderboard data could not be loaded",
                        None,
                    ),
                }
            }
            AppError::Leaderboard(e @ LeaderboardError::PartialCommentLoss { .. }) => {
                tracing::error!("Unexpected leaderboard error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    None,
                )
            }
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "Bad request", Some(msg.clone()))
            }
            AppError::Unauthorized => (StatusCode::UNAUTHORIZED, "Unauthorized", None),
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            details,
        });

        (status, body).into_response()
    }
}
