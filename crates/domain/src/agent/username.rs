use crate::error::{DomainError, Result};
use serde::{Deserialize, Serialize};

/// Value object representing an agent login name
///
/// Rules:
/// - Must be non-empty (after trimming surrounding whitespace)
/// - Max length 100 characters (the width of the `agents.username` column)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username(String);

impl Username {
    pub fn new(username: impl Into<String>) -> Result<Self> {
        let username = username.into();
        let trimmed = username.trim();

        if trimmed.is_empty() {
            return Err(DomainError::Validation(
                "Username cannot be empty".to_string(),
            ));
        }

        if trimmed.chars().count() > 100 {
            return Err(DomainError::Validation(format!(
                "Username too long: {} chars (max 100)",
                trimmed.chars().count()
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Username {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Username> for String {
    fn from(value: Username) -> Self {
        value.0
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
