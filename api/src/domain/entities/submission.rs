//! Submission domain entity
//!
//! A piece of uploaded work moving through moderation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ContributorId;

/// Unique identifier for a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SubmissionId(pub i64);

impl std::fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Moderation status of a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    Pending,
    Featured,
    Approved,
    Rejected,
}

impl SubmissionStatus {
    /// Featured and approved work both count toward the approval ratio
    pub fn counts_as_approved(&self) -> bool {
        match self {
            SubmissionStatus::Featured | SubmissionStatus::Approved => true,
            SubmissionStatus::Pending | SubmissionStatus::Rejected => false,
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Pending => write!(f, "pending"),
            SubmissionStatus::Featured => write!(f, "featured"),
            SubmissionStatus::Approved => write!(f, "approved"),
            SubmissionStatus::Rejected => write!(f, "rejected"),
        }
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(SubmissionStatus::Pending),
            "featured" => Ok(SubmissionStatus::Featured),
            "approved" => Ok(SubmissionStatus::Approved),
            "rejected" => Ok(SubmissionStatus::Rejected),
            _ => Err(format!("Unknown submission status: {}", s)),
        }
    }
}

/// An uploaded file owned by exactly one contributor
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Submission {
    pub id: SubmissionId,
    pub contributor_id: ContributorId,
    pub status: SubmissionStatus,
    pub created_at: Option<DateTime<Utc>>,
}
