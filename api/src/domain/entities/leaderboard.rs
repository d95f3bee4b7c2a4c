//! Leaderboard rows
//!
//! Derived, never persisted. Rows keep full-precision figures; rounding only
//! happens when a row is serialized or rendered.

use chrono::{DateTime, Utc};
use serde::{Serialize, Serializer};

use super::ContributorId;

/// Per-contributor performance figures
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardRow {
    pub contributor_id: ContributorId,
    pub name: String,
    pub total_submissions: usize,
    pub featured: usize,
    pub approved: usize,
    pub rejected: usize,
    /// Percentage of submissions that are featured or approved
    #[serde(serialize_with = "serialize_one_decimal")]
    pub approval_ratio: f64,
    #[serde(serialize_with = "serialize_two_decimals")]
    pub avg_rating: f64,
    #[serde(serialize_with = "serialize_two_decimals")]
    pub bayesian_score: f64,
    /// Number of ratings behind `avg_rating`
    pub rating_count: usize,
}

impl LeaderboardRow {
    /// An all-zero row for a contributor with nothing to score
    pub fn empty(contributor_id: ContributorId, name: impl Into<String>) -> Self {
        Self {
            contributor_id,
            name: name.into(),
            total_submissions: 0,
            featured: 0,
            approved: 0,
            rejected: 0,
            approval_ratio: 0.0,
            avg_rating: 0.0,
            bayesian_score: 0.0,
            rating_count: 0,
        }
    }
}

/// A ranked leaderboard produced by one aggregation run
#[derive(Debug, Clone, Serialize)]
pub struct Leaderboard {
    pub generated_at: DateTime<Utc>,
    pub rows: Vec<LeaderboardRow>,
}

/// Round to a fixed number of decimal places for display
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

fn serialize_one_decimal<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_to(*value, 1))
}

fn serialize_two_decimals<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(round_to(*value, 2))
}
