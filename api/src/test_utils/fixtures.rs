//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::Utc;

use crate::domain::entities::{
    Comment, Contributor, ContributorId, Role, Submission, SubmissionId, SubmissionStatus,
};
use crate::domain::ports::{PortalLogin, PortalUser};

/// Create a scored (attachment) contributor
pub fn test_contributor(id: i64, name: &str) -> Contributor {
    test_contributor_with_role(id, name, Role::Attachment)
}

/// Create a contributor with a specific role
pub fn test_contributor_with_role(id: i64, name: &str, role: Role) -> Contributor {
    Contributor {
        id: ContributorId(id),
        name: name.to_string(),
        role,
    }
}

/// Create a submission owned by `contributor_id`
pub fn test_submission(id: i64, contributor_id: i64, status: SubmissionStatus) -> Submission {
    Submission {
        id: SubmissionId(id),
        contributor_id: ContributorId(contributor_id),
        status,
        created_at: Some(Utc::now()),
    }
}

/// Create a comment on `submission_id`
pub fn test_comment(id: i64, submission_id: i64, rating: Option<f64>) -> Comment {
    Comment {
        id,
        submission_id: SubmissionId(submission_id),
        rating,
        created_at: Some(Utc::now()),
    }
}

/// Create a login result for an account
pub fn test_login(id: i64, name: &str, role: Role) -> PortalLogin {
    PortalLogin {
        access_token: test_token(id, role),
        user: PortalUser {
            id: ContributorId(id),
            name: name.to_string(),
            email: format!("{}@hubz.test", name),
            role,
        },
    }
}

/// Build an unsigned JWT carrying `sub` and `role` claims
pub fn test_token(id: i64, role: Role) -> String {
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use base64::Engine;

    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"{}","role":"{}"}}"#, id, role));
    format!("{}.{}.signature", header, payload)
}
