//! Domain entities
//!
//! Pure domain models for the portal records the leaderboard consumes.
//! These are separate from the backend wire formats in `adapters::portal`.

pub mod comment;
pub mod contributor;
pub mod leaderboard;
pub mod submission;

pub use comment::Comment;
pub use contributor::{Contributor, ContributorId, Role};
pub use leaderboard::{Leaderboard, LeaderboardRow};
pub use submission::{Submission, SubmissionId, SubmissionStatus};
