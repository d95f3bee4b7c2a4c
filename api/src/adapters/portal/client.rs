//! Portal backend API client implementation

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::{Client, RequestBuilder};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{
    Comment, Contributor, ContributorId, Role, Submission, SubmissionId, SubmissionStatus,
};
use crate::domain::ports::{PortalClient, PortalLogin, PortalUser};
use crate::error::PortalError;

/// Implementation of the portal backend client
pub struct PortalClientImpl {
    http: Client,
    base_url: String,
}

impl PortalClientImpl {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self, PortalError> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get(&self, path: &str, token: &str) -> RequestBuilder {
        self.http.get(self.url(path)).bearer_auth(token)
    }

    async fn handle_response<T: for<'de> Deserialize<'de>>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, PortalError> {
        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| PortalError::Deserialization(e.to_string()))
        } else if status.as_u16() == 401 {
            Err(PortalError::Unauthorized)
        } else {
            let body = response.text().await.unwrap_or_default();
            Err(PortalError::Api {
                status: status.as_u16(),
                message: error_message(&body),
            })
        }
    }
}

/// The backend reports failures as `{"msg": "..."}`; fall back to the raw body
fn error_message(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorBody {
        msg: String,
    }

    serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.msg)
        .unwrap_or_else(|_| body.to_string())
}

/// Parse the timestamp formats the backend has been seen to emit
fn parse_timestamp(raw: Option<&str>) -> Option<DateTime<Utc>> {
    let raw = raw?.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Wire types for the portal API
#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct LoginResponse {
    access_token: String,
    user: WireUser,
}

#[derive(Deserialize)]
struct WireUser {
    id: i64,
    name: Option<String>,
    email: Option<String>,
    role: Option<String>,
}

#[derive(Deserialize)]
struct WireSubmission {
    id: i64,
    author_id: Option<i64>,
    status: Option<String>,
    created_at: Option<String>,
}

#[derive(Deserialize)]
struct WireComment {
    id: i64,
    rating: Option<f64>,
    created_at: Option<String>,
}

impl WireUser {
    fn display_name(&self) -> String {
        self.name
            .clone()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| format!("User {}", self.id))
    }

    /// A missing role means journalist; an unrecognised one is an error
    fn role(&self) -> Result<Role, String> {
        match self.role.as_deref() {
            None | Some("") => Ok(Role::default()),
            Some(raw) => raw.parse(),
        }
    }
}

fn to_contributor(user: WireUser) -> Option<Contributor> {
    match user.role() {
        Ok(role) => Some(Contributor {
            id: ContributorId(user.id),
            name: user.display_name(),
            role,
        }),
        Err(e) => {
            tracing::debug!(user_id = user.id, error = %e, "Skipping user with unknown role");
            None
        }
    }
}

fn to_submission(wire: WireSubmission) -> Option<Submission> {
    let Some(author_id) = wire.author_id else {
        tracing::debug!(submission_id = wire.id, "Skipping submission without an author");
        return None;
    };

    let status = match wire.status.as_deref().map(str::parse::<SubmissionStatus>) {
        Some(Ok(status)) => status,
        None => SubmissionStatus::Pending,
        Some(Err(e)) => {
            // Counts toward the total without counting as approved
            tracing::warn!(submission_id = wire.id, error = %e, "Treating unknown status as pending");
            SubmissionStatus::Pending
        }
    };

    Some(Submission {
        id: SubmissionId(wire.id),
        contributor_id: ContributorId(author_id),
        status,
        created_at: parse_timestamp(wire.created_at.as_deref()),
    })
}

fn to_comment(wire: WireComment, submission_id: SubmissionId) -> Comment {
    Comment {
        id: wire.id,
        submission_id,
        rating: wire.rating,
        created_at: parse_timestamp(wire.created_at.as_deref()),
    }
}

#[async_trait]
impl PortalClient for PortalClientImpl {
    async fn login(&self, email: &str, password: &str) -> Result<PortalLogin, PortalError> {
        let response = self
            .http
            .post(self.url("/auth/login"))
            .json(&LoginRequest { email, password })
            .send()
            .await?;

        let login: LoginResponse = self.handle_response(response).await?;
        let role = login.user.role().map_err(PortalError::Deserialization)?;

        Ok(PortalLogin {
            access_token: login.access_token,
            user: PortalUser {
                id: ContributorId(login.user.id),
                name: login.user.display_name(),
                email: login.user.email.unwrap_or_default(),
                role,
            },
        })
    }

    async fn list_contributors(&self, token: &str) -> Result<Vec<Contributor>, PortalError> {
        let response = self.get("/auth/users", token).send().await?;
        let users: Vec<WireUser> = self.handle_response(response).await?;

        Ok(users.into_iter().filter_map(to_contributor).collect())
    }

    async fn list_submissions(&self, token: &str) -> Result<Vec<Submission>, PortalError> {
        let response = self.get("/files/list", token).send().await?;
        let submissions: Vec<WireSubmission> = self.handle_response(response).await?;

        Ok(submissions.into_iter().filter_map(to_submission).collect())
    }

    async fn list_comments(
        &self,
        token: &str,
        submission_id: SubmissionId,
    ) -> Result<Vec<Comment>, PortalError> {
        let response = self
            .get(
                &format!("/comments/submission/{}/comments", submission_id),
                token,
            )
            .send()
            .await?;
        let comments: Vec<WireComment> = self.handle_response(response).await?;

        Ok(comments
            .into_iter()
            .map(|c| to_comment(c, submission_id))
            .collect())
    }
}
