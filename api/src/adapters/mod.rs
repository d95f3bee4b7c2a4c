//! Adapters layer
//!
//! Implementations of port traits for external systems.

pub mod portal;

pub use portal::PortalClientImpl;
