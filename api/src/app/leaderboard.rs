//! Leaderboard aggregation
//!
//! Pure ranking of contributors from snapshot data. Fetching lives in
//! `LeaderboardService`; this module only joins and scores what it is given.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use crate::app::scoring_config::{GLOBAL_MEAN_RATING, SCORED_ROLE, SMOOTHING_WEIGHT};
use crate::domain::entities::{
    Comment, Contributor, ContributorId, LeaderboardRow, Submission, SubmissionId,
    SubmissionStatus,
};

/// Bayesian-adjusted rating: `avg_rating` over `rating_count` ratings, shrunk
/// toward the global prior. Zero when there are no ratings.
pub fn bayesian_score(avg_rating: f64, rating_count: usize) -> f64 {
    if rating_count == 0 {
        return 0.0;
    }
    let n = rating_count as f64;
    (avg_rating * n + GLOBAL_MEAN_RATING * SMOOTHING_WEIGHT) / (n + SMOOTHING_WEIGHT)
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

fn score_contributor(
    contributor: &Contributor,
    submissions: &[&Submission],
    comments: &HashMap<SubmissionId, Vec<Comment>>,
) -> LeaderboardRow {
    let total = submissions.len();
    if total == 0 {
        return LeaderboardRow::empty(contributor.id, contributor.name.clone());
    }

    let count = |status: SubmissionStatus| submissions.iter().filter(|s| s.status == status).count();
    let featured = count(SubmissionStatus::Featured);
    let approved = count(SubmissionStatus::Approved);
    let rejected = count(SubmissionStatus::Rejected);

    let accepted = submissions
        .iter()
        .filter(|s| s.status.counts_as_approved())
        .count();
    let approval_ratio = accepted as f64 / total as f64 * 100.0;

    let ratings: Vec<f64> = submissions
        .iter()
        .filter_map(|s| comments.get(&s.id))
        .flatten()
        .filter_map(|c| c.rating)
        .collect();

    let avg_rating = mean(&ratings);

    LeaderboardRow {
        contributor_id: contributor.id,
        name: contributor.name.clone(),
        total_submissions: total,
        featured,
        approved,
        rejected,
        approval_ratio,
        avg_rating,
        bayesian_score: bayesian_score(avg_rating, ratings.len()),
        rating_count: ratings.len(),
    }
}

/// Rank every scored contributor.
///
/// Contributors outside the scored role are dropped entirely; scored ones
/// with no submissions still get an all-zero row. Submissions whose owner is
/// not a scored contributor are ignored. Rows are ordered by descending
/// Bayesian score; ties keep the contributors' input order.
pub fn aggregate(
    contributors: &[Contributor],
    submissions: &[Submission],
    comments: &HashMap<SubmissionId, Vec<Comment>>,
) -> Vec<LeaderboardRow> {
    let scored: Vec<&Contributor> = contributors
        .iter()
        .filter(|c| c.role == SCORED_ROLE)
        .collect();
    let scored_ids: HashSet<ContributorId> = scored.iter().map(|c| c.id).collect();

    let mut by_contributor: HashMap<ContributorId, Vec<&Submission>> = HashMap::new();
    let mut unowned = 0usize;
    for submission in submissions {
        if scored_ids.contains(&submission.contributor_id) {
            by_contributor
                .entry(submission.contributor_id)
                .or_default()
                .push(submission);
        } else {
            unowned += 1;
        }
    }

    if unowned > 0 {
        tracing::debug!(
            count = unowned,
            "Submissions without a scored contributor left out of the leaderboard"
        );
    }

    let mut rows: Vec<LeaderboardRow> = scored
        .iter()
        .map(|contributor| {
            let subs = by_contributor
                .get(&contributor.id)
                .map(Vec::as_slice)
                .unwrap_or(&[]);
            score_contributor(contributor, subs, comments)
        })
        .collect();

    // sort_by is stable
    rows.sort_by(|a, b| {
        b.bayesian_score
            .partial_cmp(&a.bayesian_score)
            .unwrap_or(Ordering::Equal)
    });

    rows
}
