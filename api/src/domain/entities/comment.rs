//! Comment domain entity
//!
//! Reviewer feedback attached to a submission, optionally carrying a rating.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::SubmissionId;

/// A reviewer comment. The rating scale is whatever the backend stores.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comment {
    pub id: i64,
    pub submission_id: SubmissionId,
    pub rating: Option<f64>,
    pub created_at: Option<DateTime<Utc>>,
}
