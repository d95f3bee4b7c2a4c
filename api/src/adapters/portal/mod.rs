//! Portal backend adapter
//!
//! Implements the `PortalClient` port over the backend's REST API.

mod client;

pub use client::PortalClientImpl;
