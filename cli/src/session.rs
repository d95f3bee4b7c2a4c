//! Process-wide session state
//!
//! Holds the signed-in account for the lifetime of the process. A session is
//! begun after a successful login and ended on logout; everything that needs
//! the token or role receives a `SessionState` handle instead of reading
//! ambient storage.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Portal role of the signed-in account
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    #[default]
    Journalist,
    Attachment,
}

impl Role {
    /// The portal view this role lands on after login
    pub fn landing_view(&self) -> &'static str {
        match self {
            Role::Admin => "admin dashboard",
            Role::Editor | Role::Journalist | Role::Attachment => "dashboard",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Admin => write!(f, "admin"),
            Role::Editor => write!(f, "editor"),
            Role::Journalist => write!(f, "journalist"),
            Role::Attachment => write!(f, "attachment"),
        }
    }
}

/// The signed-in account
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub token: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("Not signed in")]
    NotSignedIn,

    #[error("Already signed in as {0}")]
    AlreadySignedIn(String),
}

/// Shared handle to the current session
#[derive(Clone, Default)]
pub struct SessionState {
    inner: Arc<RwLock<Option<Session>>>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a freshly authenticated session
    pub fn begin(&self, session: Session) -> Result<(), SessionError> {
        let mut guard = self.inner.write().unwrap_or_else(|e| e.into_inner());
        if let Some(existing) = guard.as_ref() {
            return Err(SessionError::AlreadySignedIn(existing.name.clone()));
        }
        *guard = Some(session);
        Ok(())
    }

    pub fn current(&self) -> Option<Session> {
        self.inner
            .read()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    pub fn token(&self) -> Result<String, SessionError> {
        self.current()
            .map(|s| s.token)
            .ok_or(SessionError::NotSignedIn)
    }

    /// Tear down the session, returning it if one was active
    pub fn end(&self) -> Option<Session> {
        self.inner
            .write()
            .unwrap_or_else(|e| e.into_inner())
            .take()
    }
}
