use chrono::{DateTime, Utc};

/// Submitted signup form fields, as received.
#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub fullname: String,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl SignupRequest {
    pub fn new(fullname: &str, username: &str, email: &str, password: &str) -> Self {
        Self {
            fullname: fullname.to_string(),
            username: username.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }
}

/// A persisted user row. The password is stored as `salt$digest`, both
/// base64.
#[derive(Debug, Clone, PartialEq)]
pub struct UserRecord {
    pub id: u64,
    pub fullname: String,
    pub username: String,
    pub email: String,
    pub password_hash: String,
}

/// Server-issued session, created right after a successful signup.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub id: String,
    pub user_id: u64,
    pub username: String,
    pub fullname: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// What the signup endpoint answers with: a redirect plus the fresh
/// session, or the textual error listing.
#[derive(Debug, Clone, PartialEq)]
pub enum SignupOutcome {
    Redirect { location: String, session: Session },
    Errors(Vec<String>),
}
