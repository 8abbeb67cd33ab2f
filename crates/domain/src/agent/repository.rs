use super::{Agent, NewAgent};
use crate::DomainError;
use async_trait::async_trait;

/// Repository interface for Agent persistence
///
/// Agents are created once and never updated or deleted.
#[async_trait]
pub trait AgentRepository: Send + Sync {
    /// Find agent by primary key
    async fn find_by_id(&self, id: i32) -> Result<Option<Agent>, DomainError>;

    /// Find agent by its unique username
    async fn find_by_username(&self, username: &str) -> Result<Option<Agent>, DomainError>;

    /// Insert a new agent and return the stored record
    async fn insert(&self, agent: NewAgent) -> Result<Agent, DomainError>;
}
