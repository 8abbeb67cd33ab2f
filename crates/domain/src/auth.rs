//! Ports for credential hashing and bearer tokens.

use crate::DomainError;
use async_trait::async_trait;
use chrono::Duration;
use serde::{Deserialize, Serialize};

/// Claims carried by a bearer token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the agent's username
    pub sub: String,
    /// Expiry as seconds since the Unix epoch
    pub exp: i64,
}

/// One-way salted password hashing.
///
/// Implementations are expected to be slow on purpose and must not block
/// the async runtime while they work.
#[async_trait]
pub trait CredentialHasher: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Compares a plaintext password with a stored hash. A malformed hash
    /// is reported as a mismatch.
    async fn verify(&self, password: &str, password_hash: &str) -> bool;
}

/// Stateless signed-token minting and validation.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, subject: &str, ttl: Duration) -> Result<String, DomainError>;

    /// Returns `None` for any bad signature, malformed token or expired
    /// token. Never errors.
    fn verify(&self, token: &str) -> Option<Claims>;
}
