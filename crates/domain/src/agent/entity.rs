use super::Username;
use chrono::{DateTime, Utc};

/// A delivery courier identity with login credentials.
///
/// `password_hash` is a salted one-way hash; the plaintext password never
/// reaches this struct.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub full_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Data needed to persist a new agent. The id and creation timestamp are
/// assigned by the store.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAgent {
    pub username: Username,
    pub password_hash: String,
    pub full_name: Option<String>,
}

impl NewAgent {
    pub fn new(username: Username, password_hash: String, full_name: Option<String>) -> Self {
        Self {
            username,
            password_hash,
            full_name,
        }
    }
}
