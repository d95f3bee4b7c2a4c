//! Mock implementations of port traits
//!
//! `InMemoryPortal` serves a fixed snapshot and can be switched to fail or
//! stall individual fetches. It records comment requests and counts the
//! fetches still in flight so tests can check fan-out and cancellation.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use crate::domain::entities::{Comment, Contributor, Submission, SubmissionId};
use crate::domain::ports::{PortalClient, PortalLogin};
use crate::error::PortalError;

// ============================================================================
// In-Memory Portal
// ============================================================================

#[derive(Default)]
pub struct InMemoryPortal {
    contributors: Vec<Contributor>,
    submissions: Vec<Submission>,
    comments: HashMap<SubmissionId, Vec<Comment>>,
    accounts: HashMap<(String, String), PortalLogin>,
    required_token: Option<String>,
    fail_contributors: bool,
    fail_submissions: bool,
    failing_comments: HashSet<SubmissionId>,
    held_comments: HashSet<SubmissionId>,
    comment_requests: Arc<RwLock<Vec<SubmissionId>>>,
    comments_in_flight: Arc<AtomicUsize>,
}

/// Counts a comment fetch as in flight until its future completes or is dropped
struct InFlight(Arc<AtomicUsize>);

impl InFlight {
    fn enter(counter: &Arc<AtomicUsize>) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter.clone())
    }
}

impl Drop for InFlight {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

impl InMemoryPortal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contributor(mut self, contributor: Contributor) -> Self {
        self.contributors.push(contributor);
        self
    }

    pub fn with_submission(mut self, submission: Submission) -> Self {
        self.submissions.push(submission);
        self
    }

    pub fn with_comment(mut self, comment: Comment) -> Self {
        self.comments
            .entry(comment.submission_id)
            .or_default()
            .push(comment);
        self
    }

    /// Accept `email`/`password` and answer with `login`
    pub fn with_account(mut self, email: &str, password: &str, login: PortalLogin) -> Self {
        self.accounts
            .insert((email.to_string(), password.to_string()), login);
        self
    }

    /// Reject every read made with a token other than `token`
    pub fn requiring_token(mut self, token: &str) -> Self {
        self.required_token = Some(token.to_string());
        self
    }

    pub fn failing_contributors(mut self) -> Self {
        self.fail_contributors = true;
        self
    }

    pub fn failing_submissions(mut self) -> Self {
        self.fail_submissions = true;
        self
    }

    pub fn failing_comments_for(mut self, submission_id: SubmissionId) -> Self {
        self.failing_comments.insert(submission_id);
        self
    }

    /// Never answer the comment fetch for `submission_id`
    pub fn holding_comments_for(mut self, submission_id: SubmissionId) -> Self {
        self.held_comments.insert(submission_id);
        self
    }

    /// Comment fetches started but neither finished nor dropped
    pub fn comments_in_flight(&self) -> usize {
        self.comments_in_flight.load(Ordering::SeqCst)
    }

    /// Submissions whose comments were requested, in request order
    pub fn comment_requests(&self) -> Vec<SubmissionId> {
        self.comment_requests.read().unwrap().clone()
    }

    fn check_token(&self, token: &str) -> Result<(), PortalError> {
        match &self.required_token {
            Some(required) if required != token => Err(PortalError::Unauthorized),
            _ => Ok(()),
        }
    }
}

fn server_error() -> PortalError {
    PortalError::Api {
        status: 500,
        message: "Internal Server Error".to_string(),
    }
}

#[async_trait]
impl PortalClient for InMemoryPortal {
    async fn login(&self, email: &str, password: &str) -> Result<PortalLogin, PortalError> {
        self.accounts
            .get(&(email.to_string(), password.to_string()))
            .cloned()
            .ok_or(PortalError::Unauthorized)
    }

    async fn list_contributors(&self, token: &str) -> Result<Vec<Contributor>, PortalError> {
        self.check_token(token)?;
        if self.fail_contributors {
            return Err(server_error());
        }
        Ok(self.contributors.clone())
    }

    async fn list_submissions(&self, token: &str) -> Result<Vec<Submission>, PortalError> {
        self.check_token(token)?;
        if self.fail_submissions {
            return Err(server_error());
        }
        Ok(self.submissions.clone())
    }

    async fn list_comments(
        &self,
        token: &str,
        submission_id: SubmissionId,
    ) -> Result<Vec<Comment>, PortalError> {
        self.check_token(token)?;
        self.comment_requests.write().unwrap().push(submission_id);
        let _in_flight = InFlight::enter(&self.comments_in_flight);
        if self.held_comments.contains(&submission_id) {
            std::future::pending::<()>().await;
        }
        if self.failing_comments.contains(&submission_id) {
            return Err(server_error());
        }
        Ok(self
            .comments
            .get(&submission_id)
            .cloned()
            .unwrap_or_default())
    }
}
