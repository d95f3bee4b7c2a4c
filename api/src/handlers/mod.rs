//! HTTP handlers
//!
//! Axum request handlers for the API endpoints.

pub mod auth;
pub mod leaderboard;

pub use auth::login;
pub use leaderboard::get_leaderboard;
