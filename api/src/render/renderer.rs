//! Leaderboard renderer
//!
//! Renders leaderboards to a plain-text markdown table.

use crate::app::{GLOBAL_MEAN_RATING, SMOOTHING_WEIGHT};
use crate::domain::entities::{ContributorId, Leaderboard, LeaderboardRow};

/// Render a leaderboard, marking the viewer's own row
pub fn render_leaderboard(board: &Leaderboard, viewer: Option<ContributorId>) -> String {
    let mut buf = String::new();

    buf.push_str("# Attachment Leaderboard\n\n");

    if board.rows.is_empty() {
        buf.push_str("_No attachments ranked yet._\n\n");
    } else {
        buf.push_str(
            "| # | Name | Submissions | Featured | Approved | Rejected | Approval % | Avg Rating | Bayesian Score |\n",
        );
        buf.push_str(
            "|---|------|-------------|----------|----------|----------|------------|------------|----------------|\n",
        );

        for (i, row) in board.rows.iter().enumerate() {
            buf.push_str(&render_row(i + 1, row, viewer == Some(row.contributor_id)));
        }
        buf.push('\n');
    }

    buf.push_str(&format!(
        "_Scores shrink each average toward {:.1} with a weight of {} ratings. Generated {}._\n",
        GLOBAL_MEAN_RATING,
        SMOOTHING_WEIGHT,
        board.generated_at.format("%Y-%m-%d %H:%M UTC"),
    ));

    buf
}

fn render_row(rank: usize, row: &LeaderboardRow, is_viewer: bool) -> String {
    let marker = if is_viewer { " <- you" } else { "" };
    format!(
        "| {} | {}{} | {} | {} | {} | {} | {:.1}% | {:.2} | {:.2} |\n",
        rank,
        row.name,
        marker,
        row.total_submissions,
        row.featured,
        row.approved,
        row.rejected,
        row.approval_ratio,
        row.avg_rating,
        row.bayesian_score,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn board(rows: Vec<LeaderboardRow>) -> Leaderboard {
        Leaderboard {
            generated_at: Utc.with_ymd_and_hms(2025, 3, 4, 10, 20, 0).unwrap(),
            rows,
        }
    }

    fn scored_row(id: i64, name: &str) -> LeaderboardRow {
        LeaderboardRow {
            total_submissions: 3,
            featured: 1,
            approved: 1,
            rejected: 1,
            approval_ratio: 200.0 / 3.0,
            avg_rating: 7.0,
            bayesian_score: 31.5 / 7.0,
            rating_count: 2,
            ..LeaderboardRow::empty(ContributorId(id), name)
        }
    }

    #[test]
    fn render_empty_leaderboard() {
        let result = render_leaderboard(&board(vec![]), None);

        assert!(result.contains("# Attachment Leaderboard"));
        assert!(result.contains("_No attachments ranked yet._"));
        assert!(!result.contains("| # |"));
        assert!(result.contains("2025-03-04 10:20 UTC"));
    }

    #[test]
    fn render_rows_with_display_rounding() {
        let result = render_leaderboard(
            &board(vec![
                scored_row(1, "zed"),
                LeaderboardRow::empty(ContributorId(2), "xavier"),
            ]),
            None,
        );

        assert!(result.contains("| 1 | zed | 3 | 1 | 1 | 1 | 66.7% | 7.00 | 4.50 |"));
        assert!(result.contains("| 2 | xavier | 0 | 0 | 0 | 0 | 0.0% | 0.00 | 0.00 |"));
    }

    #[test]
    fn render_marks_viewer() {
        let result = render_leaderboard(
            &board(vec![scored_row(1, "zed"), scored_row(2, "yara")]),
            Some(ContributorId(2)),
        );

        assert!(result.contains("| yara <- you |"));
        assert!(!result.contains("zed <- you"));
    }
}
