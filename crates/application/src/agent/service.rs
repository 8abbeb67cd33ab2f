use std::sync::Arc;

use serde::Deserialize;
use tracing::info;

use domain::{Agent, AgentRepository, CredentialHasher, DomainError, NewAgent, Username};

/// Input of the agent-creation use case.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateAgent {
    pub username: String,
    pub password: String,
    #[serde(default)]
    pub full_name: Option<String>,
}

pub struct AgentService {
    agents: Arc<dyn AgentRepository>,
    hasher: Arc<dyn CredentialHasher>,
}

impl AgentService {
    pub fn new(agents: Arc<dyn AgentRepository>, hasher: Arc<dyn CredentialHasher>) -> Self {
        Self { agents, hasher }
    }

    /// Create an agent with a hashed password.
    ///
    /// The duplicate check and the insert are two statements; a concurrent
    /// request can slip between them, in which case the store's unique
    /// index turns the second insert into a [`DomainError::Conflict`] too.
    pub async fn create_agent(&self, request: CreateAgent) -> Result<Agent, DomainError> {
        let username = Username::new(request.username)?;

        if self
            .agents
            .find_by_username(username.as_str())
            .await?
            .is_some()
        {
            return Err(DomainError::Conflict("Agent exists".to_string()));
        }

        let password_hash = self.hasher.hash(&request.password).await?;
        let full_name = request.full_name.filter(|n| !n.trim().is_empty());

        let agent = self
            .agents
            .insert(NewAgent::new(username, password_hash, full_name))
            .await?;

        info!(agent_id = agent.id, username = %agent.username, "Agent created");
        Ok(agent)
    }
}
