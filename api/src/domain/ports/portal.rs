//! Portal backend port trait
//!
//! Defines the read-only queries the leaderboard needs from the portal
//! backend, plus the login call the service proxies. Every call forwards the
//! caller's bearer token; the backend is the one that enforces access.

use async_trait::async_trait;
use serde::Serialize;

use crate::domain::entities::{Comment, Contributor, ContributorId, Role, Submission, SubmissionId};
use crate::error::PortalError;

/// Account details returned by a successful login
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortalUser {
    pub id: ContributorId,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Token and account returned by the backend login endpoint
#[derive(Debug, Clone, Serialize)]
pub struct PortalLogin {
    pub access_token: String,
    pub user: PortalUser,
}

/// Port trait for the portal backend
#[async_trait]
pub trait PortalClient: Send + Sync {
    /// Exchange credentials for an access token
    async fn login(&self, email: &str, password: &str) -> Result<PortalLogin, PortalError>;

    /// List every user account with its role
    async fn list_contributors(&self, token: &str) -> Result<Vec<Contributor>, PortalError>;

    /// List every submission
    async fn list_submissions(&self, token: &str) -> Result<Vec<Submission>, PortalError>;

    /// List the comments attached to one submission
    async fn list_comments(
        &self,
        token: &str,
        submission_id: SubmissionId,
    ) -> Result<Vec<Comment>, PortalError>;
}
