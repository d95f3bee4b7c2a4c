//! Bearer token authentication middleware
//!
//! Tokens are issued and verified by the portal backend. The service only
//! reads the claims it needs (`sub`, `role`, `exp`) and forwards the token
//! untouched on every backend call, where the signature is checked.

use axum::{body::Body, extract::Request, middleware::Next, response::Response};
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::Utc;
use serde::Deserialize;

use crate::domain::entities::{ContributorId, Role};
use crate::error::AppError;

/// The authenticated caller of a request
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: ContributorId,
    pub role: Role,
    /// Raw bearer token, forwarded to the portal backend
    pub token: String,
}

#[derive(Deserialize)]
struct Claims {
    sub: serde_json::Value,
    role: Option<String>,
    exp: Option<i64>,
}

/// Extract the bearer token from the Authorization header
fn extract_bearer(request: &Request<Body>) -> Option<&str> {
    request
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Decode the session carried by a JWT without verifying its signature
pub fn decode_session(token: &str) -> Result<Session, AppError> {
    let payload = token.split('.').nth(1).ok_or(AppError::Unauthorized)?;
    let bytes = URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| AppError::Unauthorized)?;
    let claims: Claims = serde_json::from_slice(&bytes).map_err(|_| AppError::Unauthorized)?;

    if claims.exp.is_some_and(|exp| exp < Utc::now().timestamp()) {
        return Err(AppError::Unauthorized);
    }

    let user_id = match &claims.sub {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    }
    .ok_or(AppError::Unauthorized)?;

    let role = match claims.role.as_deref() {
        None => Role::default(),
        Some(raw) => raw.parse().map_err(|_| AppError::Unauthorized)?,
    };

    Ok(Session {
        user_id: ContributorId(user_id),
        role,
        token: token.to_string(),
    })
}

/// Authentication middleware
///
/// Decodes the bearer token and injects the `Session` into request extensions.
pub async fn auth_middleware(mut request: Request<Body>, next: Next) -> Result<Response, AppError> {
    let token = extract_bearer(&request).ok_or(AppError::Unauthorized)?;
    let session = decode_session(token)?;

    tracing::debug!(user_id = %session.user_id, role = %session.role, "Authenticated request");

    request.extensions_mut().insert(session);

    Ok(next.run(request).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::test_token;

    fn token_with_payload(payload: &str) -> String {
        format!("header.{}.sig", URL_SAFE_NO_PAD.encode(payload))
    }

    #[test]
    fn decodes_string_subject_and_role() {
        let token = test_token(7, Role::Editor);
        let session = decode_session(&token).unwrap();

        assert_eq!(session.user_id, ContributorId(7));
        assert_eq!(session.role, Role::Editor);
        assert_eq!(session.token, token);
    }

    #[test]
    fn decodes_numeric_subject() {
        let token = token_with_payload(r#"{"sub": 12, "role": "attachment"}"#);
        let session = decode_session(&token).unwrap();

        assert_eq!(session.user_id, ContributorId(12));
        assert_eq!(session.role, Role::Attachment);
    }

    #[test]
    fn missing_role_defaults_to_journalist() {
        let token = token_with_payload(r#"{"sub": "3"}"#);
        assert_eq!(decode_session(&token).unwrap().role, Role::Journalist);
    }

    #[test]
    fn tolerates_padded_payload() {
        let payload = base64::engine::general_purpose::URL_SAFE.encode(r#"{"sub":"1"}"#);
        let token = format!("h.{}.s", payload);
        assert!(decode_session(&token).is_ok());
    }

    #[test]
    fn rejects_unknown_role() {
        let token = token_with_payload(r#"{"sub": "3", "role": "superuser"}"#);
        assert!(matches!(decode_session(&token), Err(AppError::Unauthorized)));
    }

    #[test]
    fn rejects_expired_token() {
        let token = token_with_payload(r#"{"sub": "3", "exp": 1000}"#);
        assert!(matches!(decode_session(&token), Err(AppError::Unauthorized)));
    }

    #[test]
    fn rejects_malformed_tokens() {
        assert!(decode_session("not-a-jwt").is_err());
        assert!(decode_session("a.!!!.c").is_err());
        assert!(decode_session(&token_with_payload("[]")).is_err());
        assert!(decode_session(&token_with_payload(r#"{"sub": "abc"}"#)).is_err());
        assert!(decode_session(&token_with_payload(r#"{"sub": null}"#)).is_err());
    }
}
