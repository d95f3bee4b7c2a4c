//! Leaderboard handlers
//!
//! Supports content negotiation: Accept: application/json for JSON, otherwise text/plain.

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    Extension, Json,
};

use crate::auth::Session;
use crate::error::AppError;
use crate::render::render_leaderboard;
use crate::AppState;

/// Check if the client wants JSON response
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.contains("application/json"))
        .unwrap_or(false)
}

/// GET /leaderboard
///
/// Builds a fresh leaderboard with the caller's token.
/// - Accept: application/json → JSON response
/// - Otherwise → Markdown table
pub async fn get_leaderboard(
    State(state): State<AppState>,
    Extension(session): Extension<Session>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    tracing::info!(user_id = %session.user_id, role = %session.role, "Leaderboard requested");

    let board = state
        .leaderboard_service
        .build_leaderboard(&session.token)
        .await?;

    if wants_json(&headers) {
        Ok(Json(board).into_response())
    } else {
        Ok((
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            render_leaderboard(&board, Some(session.user_id)),
        )
            .into_response())
    }
}
