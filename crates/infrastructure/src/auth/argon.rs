use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier};
use async_trait::async_trait;
use domain::{CredentialHasher, DomainError};
use tokio::task;
use tracing::error;

/// Argon2id with a random per-password salt, stored as a PHC string.
///
/// Hashing and verification run on tokio's blocking pool.
#[derive(Clone, Default)]
pub struct Argon2Hasher {
    argon2: Argon2<'static>,
}

impl Argon2Hasher {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialHasher for Argon2Hasher {
    async fn hash(&self, password: &str) -> Result<String, DomainError> {
        let argon2 = self.argon2.clone();
        let password = password.to_string();

        task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            argon2
                .hash_password(password.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| DomainError::Hashing(e.to_string()))
        })
        .await
        .map_err(|e| DomainError::Hashing(format!("Hashing task failed: {}", e)))?
    }

    async fn verify(&self, password: &str, password_hash: &str) -> bool {
        let argon2 = self.argon2.clone();
        let password = password.to_string();
        let password_hash = password_hash.to_string();

        let verified = task::spawn_blocking(move || match PasswordHash::new(&password_hash) {
            Ok(parsed) => argon2.verify_password(password.as_bytes(), &parsed).is_ok(),
            Err(_) => false,
        })
        .await;

        verified.unwrap_or_else(|e| {
            error!("Password verification task failed: {}", e);
            false
        })
    }
}
