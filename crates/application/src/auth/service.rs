use std::sync::Arc;

use chrono::Duration;
use serde::Serialize;
use tracing::{debug, info, warn};

use domain::{Agent, AgentRepository, CredentialHasher, DomainError, TokenIssuer, Username};

/// Lifetime of an access token: one day.
pub const DEFAULT_TOKEN_TTL_MINUTES: i64 = 60 * 24;

/// Response body of a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AccessToken {
    pub access_token: String,
    pub token_type: String,
}

impl AccessToken {
    fn bearer(token: String) -> Self {
        Self {
            access_token: token,
            token_type: "bearer".to_string(),
        }
    }
}

/// Login and bearer-token verification.
///
/// Failures never reveal whether the username or the password was wrong;
/// both surface as [`DomainError::Unauthorized`].
pub struct AuthService {
    agents: Arc<dyn AgentRepository>,
    hasher: Arc<dyn CredentialHasher>,
    tokens: Arc<dyn TokenIssuer>,
    token_ttl: Duration,
}

impl AuthService {
    pub fn new(
        agents: Arc<dyn AgentRepository>,
        hasher: Arc<dyn CredentialHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            agents,
            hasher,
            tokens,
            token_ttl: Duration::minutes(DEFAULT_TOKEN_TTL_MINUTES),
        }
    }

    pub fn with_token_ttl(mut self, ttl: Duration) -> Self {
        self.token_ttl = ttl;
        self
    }

    /// Usernames are normalized the same way as on creation, so `" alice "`
    /// logs in as `alice`.
    pub async fn login(&self, username: &str, password: &str) -> Result<AccessToken, DomainError> {
        let Ok(username) = Username::new(username) else {
            warn!("Rejected login attempt with invalid username");
            return Err(DomainError::Unauthorized);
        };

        let agent = match self.agents.find_by_username(username.as_str()).await? {
            Some(agent) => agent,
            None => return Err(Self::rejected(&username)),
        };
        if !self.hasher.verify(password, &agent.password_hash).await {
            return Err(Self::rejected(&username));
        }

        let token = self.tokens.issue(&agent.username, self.token_ttl)?;
        info!(agent_id = agent.id, "Agent logged in");
        Ok(AccessToken::bearer(token))
    }

    fn rejected(username: &Username) -> DomainError {
        warn!(username = %username.as_str(), "Rejected login attempt");
        DomainError::Unauthorized
    }

    /// Resolve a bearer token to the agent it was issued for.
    pub async fn authenticate(&self, token: &str) -> Result<Agent, DomainError> {
        let Some(claims) = self.tokens.verify(token) else {
            debug!("Bearer token failed verification");
            return Err(DomainError::Unauthorized);
        };

        match self.agents.find_by_username(&claims.sub).await? {
            Some(agent) => Ok(agent),
            None => {
                debug!(subject = %claims.sub, "Token subject no longer exists");
                Err(DomainError::Unauthorized)
            }
        }
    }
}
