//! Application layer
//!
//! Contains use cases and service orchestration.
//! Services coordinate between domain entities, ports, and external systems.

pub mod leaderboard;
pub mod leaderboard_service;
pub mod scoring_config;

pub use leaderboard_service::LeaderboardService;
// Re-export scoring constants for consumers
#[allow(unused_imports)]
pub use scoring_config::*;
