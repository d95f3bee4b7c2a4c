//! Leaderboard scoring constants
//!
//! Defines the Bayesian prior used to rank contributors.

use crate::domain::entities::Role;

/// Prior mean rating that low-sample averages are pulled toward
pub const GLOBAL_MEAN_RATING: f64 = 3.5;

/// Weight of the prior, in rating-count units
pub const SMOOTHING_WEIGHT: f64 = 5.0;

/// Only accounts with this role are ranked
pub const SCORED_ROLE: Role = Role::Attachment;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prior_is_positive() {
        assert!(GLOBAL_MEAN_RATING > 0.0);
        assert!(SMOOTHING_WEIGHT > 0.0);
    }

    #[test]
    fn attachments_are_scored() {
        assert_eq!(SCORED_ROLE, Role::Attachment);
    }
}
