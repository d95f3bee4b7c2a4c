//! HTTP client for the Hubz analytics API
//!
//! Every authenticated call reads its token from the injected
//! `SessionState`; logging in begins the session and logging out ends it.

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::{Deserialize, Serialize};

use crate::session::{Role, Session, SessionState};

/// Response format for the leaderboard
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    fn accept(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text/plain",
            OutputFormat::Json => "application/json",
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}

/// HTTP client for communicating with the Hubz analytics API
#[derive(Clone)]
pub struct HubzClient {
    client: reqwest::Client,
    base_url: String,
    session: SessionState,
}

impl HubzClient {
    /// Create a new client bound to a session handle
    pub fn new(base_url: &str, session: SessionState) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchange credentials for a token and begin the session
    pub async fn login(&self, email: &str, password: &str) -> Result<Session> {
        let url = format!("{}/auth/login", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&LoginRequest { email, password })
            .send()
            .await
            .context("Failed to POST /auth/login")?;

        let body = handle_text_response(response).await?;
        let login: LoginResponse =
            serde_json::from_str(&body).context("Unexpected login response")?;
        let session = login.into_session();

        self.session.begin(session.clone())?;
        Ok(session)
    }

    /// Fetch the rendered leaderboard for the signed-in account
    pub async fn get_leaderboard(&self, format: OutputFormat) -> Result<String> {
        let token = self.session.token()?;
        let url = format!("{}/leaderboard", self.base_url);
        let response = self
            .client
            .get(&url)
            .bearer_auth(token)
            .header(ACCEPT, format.accept())
            .send()
            .await
            .context("Failed to GET /leaderboard")?;

        handle_text_response(response).await
    }

    /// End the session. The token simply stops being used; the backend keeps
    /// no server-side session to revoke.
    pub fn logout(&self) -> Option<Session> {
        self.session.end()
    }
}

async fn handle_text_response(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    if !status.is_success() {
        anyhow::bail!("API error ({}): {}", status, body);
    }

    Ok(body)
}

// --- Request / Response Types ---

#[derive(Debug, Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Debug, Deserialize)]
struct LoginResponse {
    access_token: String,
    user: LoginUser,
}

#[derive(Debug, Deserialize)]
struct LoginUser {
    id: i64,
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    role: Role,
}

impl LoginResponse {
    fn into_session(self) -> Session {
        Session {
            user_id: self.user.id,
            name: self.user.name,
            email: self.user.email,
            role: self.user.role,
            token: self.access_token,
        }
    }
}
