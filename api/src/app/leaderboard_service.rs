//! Leaderboard service
//!
//! Fetches a fresh snapshot of contributors, submissions and comments from
//! the portal and hands it to the pure aggregator. Each call owns its own
//! snapshot, so overlapping calls never share partial state.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::Utc;
use futures::future::join_all;

use crate::app::leaderboard::aggregate;
use crate::domain::entities::{Comment, Leaderboard, Submission, SubmissionId};
use crate::domain::ports::PortalClient;
use crate::error::LeaderboardError;

/// Service for building the contributor leaderboard
pub struct LeaderboardService<PC>
where
    PC: PortalClient + ?Sized,
{
    portal: Arc<PC>,
}

impl<PC> LeaderboardService<PC>
where
    PC: PortalClient + ?Sized,
{
    pub fn new(portal: Arc<PC>) -> Self {
        Self { portal }
    }

    /// Build the leaderboard on behalf of the caller owning `token`.
    ///
    /// Contributors are fetched alongside submissions; once submissions are
    /// known, comments are fetched with one request per submission. Nothing
    /// is aggregated until every fetch has settled. Dropping the returned
    /// future abandons all outstanding requests.
    pub async fn build_leaderboard(&self, token: &str) -> Result<Leaderboard, LeaderboardError> {
        let contributors = async {
            self.portal
                .list_contributors(token)
                .await
                .map_err(LeaderboardError::RetrievalFailed)
        };
        let submissions_with_comments = async {
            let submissions = self
                .portal
                .list_submissions(token)
                .await
                .map_err(LeaderboardError::RetrievalFailed)?;
            let comments = self.fetch_comments(token, &submissions).await;
            Ok::<_, LeaderboardError>((submissions, comments))
        };

        let (contributors, (submissions, comments)) =
            tokio::try_join!(contributors, submissions_with_comments)?;

        let rows = aggregate(&contributors, &submissions, &comments);

        tracing::info!(
            contributors = contributors.len(),
            submissions = submissions.len(),
            rows = rows.len(),
            "Leaderboard built"
        );

        Ok(Leaderboard {
            generated_at: Utc::now(),
            rows,
        })
    }

    /// Fan out one comment fetch per submission. A failed fetch leaves that
    /// submission with no comments rather than failing the run.
    async fn fetch_comments(
        &self,
        token: &str,
        submissions: &[Submission],
    ) -> HashMap<SubmissionId, Vec<Comment>> {
        let results = join_all(submissions.iter().map(|submission| async move {
            let result = self.portal.list_comments(token, submission.id).await;
            (submission.id, result)
        }))
        .await;

        results
            .into_iter()
            .map(|(submission_id, result)| match result {
                Ok(comments) => (submission_id, comments),
                Err(source) => {
                    let loss = LeaderboardError::PartialCommentLoss {
                        submission_id,
                        source,
                    };
                    tracing::warn!(
                        submission_id = %submission_id,
                        error = %loss,
                        "Scoring submission without comments"
                    );
                    (submission_id, Vec::new())
                }
            })
            .collect()
    }
}
