//! Authentication handlers
//!
//! Proxies credential exchange to the portal backend.

use axum::{extract::State, Json};
use serde::Deserialize;

use crate::domain::ports::PortalLogin;
use crate::error::AppError;
use crate::AppState;

/// Request body for login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /auth/login
///
/// Exchanges credentials for a portal access token. A backend account with
/// no role comes back as a journalist.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<PortalLogin>, AppError> {
    let email = request.email.trim();
    if email.is_empty() || request.password.is_empty() {
        return Err(AppError::BadRequest(
            "Email and password are required".to_string(),
        ));
    }

    let login = state.portal.login(email, &request.password).await?;

    tracing::info!(user_id = %login.user.id, role = %login.user.role, "Login succeeded");

    Ok(Json(login))
}
