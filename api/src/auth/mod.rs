//! Request authentication

mod bearer;

pub use bearer::{auth_middleware, Session};
