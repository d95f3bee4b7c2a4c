//! Contributor domain entity
//!
//! A portal user account. Only accounts carrying the scored role are ranked
//! on the leaderboard.

use serde::{Deserialize, Serialize};

/// Unique identifier for a portal user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContributorId(pub i64);

impl std::fmt::Display for ContributorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Portal role carried by every account and by the session token
///
/// Accounts the backend returns without a role are journalists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Editor,
    #[default]
    Journalist,
    Attachment,
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

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "editor" => Ok(Role::Editor),
            "journalist" => Ok(Role::Journalist),
            "attachment" => Ok(Role::Attachment),
            _ => Err(format!("Unknown role: {}", s)),
        }
    }
}

/// A portal account as seen by the leaderboard
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contributor {
    pub id: ContributorId,
    pub name: String,
    pub role: Role,
}
