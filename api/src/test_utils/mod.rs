//! Test utilities
//!
//! Fixture factories for portal data and unsigned bearer tokens, plus a
//! hand-written in-memory portal with per-fetch failure and stall switches.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
