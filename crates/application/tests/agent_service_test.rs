mod common;

use std::sync::Arc;

use application::{AgentService, CreateAgent};
use common::{InMemoryAgents, PlainHasher};
use domain::{AgentRepository, DomainError};

fn request(username: &str, password: &str, full_name: Option<&str>) -> CreateAgent {
    CreateAgent {
        username: username.to_string(),
        password: password.to_string(),
        full_name: full_name.map(str::to_string),
    }
}

#[tokio::test]
async fn test_create_agent_hashes_password() {
    let agents = Arc::new(InMemoryAgents::default());
    let service = AgentService::new(agents.clone(), Arc::new(PlainHasher));

    let agent = service
        .create_agent(request("alice", "pw123", Some("Alice")))
        .await
        .expect("Failed to create agent");

    assert_eq!(agent.username, "alice");
    assert_eq!(agent.full_name.as_deref(), Some("Alice"));
    assert_ne!(agent.password_hash, "pw123");

    let stored = agents.find_by_username("alice").await.unwrap().unwrap();
    assert_eq!(stored.id, agent.id);
}

#[tokio::test]
async fn test_duplicate_username_conflicts_regardless_of_other_fields() {
    let agents = Arc::new(InMemoryAgents::default());
    let service = AgentService::new(agents, Arc::new(PlainHasher));

    service
        .create_agent(request("alice", "pw123", None))
        .await
        .unwrap();

    let err = service
        .create_agent(request("alice", "different", Some("Another Alice")))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Conflict(_)));
}

#[tokio::test]
async fn test_empty_username_is_rejected() {
    let service = AgentService::new(Arc::new(InMemoryAgents::default()), Arc::new(PlainHasher));

    let err = service
        .create_agent(request("  ", "pw123", None))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[tokio::test]
async fn test_blank_full_name_is_dropped() {
    let service = AgentService::new(Arc::new(InMemoryAgents::default()), Arc::new(PlainHasher));

    let agent = service
        .create_agent(request("bob", "pw", Some("   ")))
        .await
        .unwrap();
    assert_eq!(agent.full_name, None);
}
