use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Missing/invalid/expired token or bad credentials. Carries no detail
    /// on purpose: callers must not learn which factor failed.
    #[error("Unauthorized")]
    Unauthorized,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Token error: {0}")]
    Token(String),

    #[error("Password hashing error: {0}")]
    Hashing(String),
}

pub type Result<T> = std::result::Result<T, DomainError>;
