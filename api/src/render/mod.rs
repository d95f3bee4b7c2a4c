//! Render module
//!
//! Plain-text leaderboard rendering.

pub mod renderer;

pub use renderer::render_leaderboard;
