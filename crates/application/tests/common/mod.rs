#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use domain::{
    Agent, AgentRepository, Claims, CredentialHasher, Delivery, DeliveryRepository, DomainError,
    MediaStore, NewAgent, NewDelivery, NewPackage, Package, PackageRepository, PackageStatus,
    TokenIssuer,
};

// --- Infrastructure Fakes (Ports) ---

#[derive(Default)]
pub struct InMemoryAgents {
    rows: Mutex<Vec<Agent>>,
}

#[async_trait]
impl AgentRepository for InMemoryAgents {
    async fn find_by_id(&self, id: i32) -> Result<Option<Agent>, DomainError> {
        Ok(self.rows.lock().unwrap().iter().find(|a| a.id == id).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Agent>, DomainError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|a| a.username == username)
            .cloned())
    }

    async fn insert(&self, agent: NewAgent) -> Result<Agent, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        let stored = Agent {
            id: rows.len() as i32 + 1,
            username: agent.username.as_str().to_string(),
            password_hash: agent.password_hash,
            full_name: agent.full_name,
            created_at: Utc::now(),
        };
        rows.push(stored.clone());
        Ok(stored)
    }
}

#[derive(Default)]
pub struct InMemoryPackages {
    rows: Mutex<Vec<Package>>,
}

#[async_trait]
impl PackageRepository for InMemoryPackages {
    async fn find_by_id(&self, id: i32) -> Result<Option<Package>, DomainError> {
        Ok(self.rows.lock().unwrap().iter().find(|p| p.id == id).cloned())
    }

    async fn find_by_uid(&self, package_uid: &str) -> Result<Option<Package>, DomainError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.package_uid == package_uid)
            .cloned())
    }

    async fn find_by_agent(&self, agent_id: i32) -> Result<Vec<Package>, DomainError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|p| p.assigned_agent_id == Some(agent_id))
            .cloned()
            .collect())
    }

    async fn insert(&self, package: NewPackage) -> Result<Package, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        let stored = Package {
            id: rows.len() as i32 + 1,
            package_uid: package.package_uid,
            address: package.address,
            city: package.city,
            state: package.state,
            postal_code: package.postal_code,
            status: PackageStatus::Assigned,
            assigned_agent_id: package.assigned_agent_id,
            created_at: Utc::now(),
        };
        rows.push(stored.clone());
        Ok(stored)
    }

    async fn update_status(&self, id: i32, status: PackageStatus) -> Result<bool, DomainError> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|p| p.id == id) {
            Some(p) => {
                p.status = status;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

pub struct InMemoryDeliveries {
    packages: Arc<InMemoryPackages>,
    rows: Mutex<Vec<Delivery>>,
    fail: bool,
}

impl InMemoryDeliveries {
    pub fn new(packages: Arc<InMemoryPackages>) -> Self {
        Self {
            packages,
            rows: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    pub fn failing(packages: Arc<InMemoryPackages>) -> Self {
        Self {
            fail: true,
            ..Self::new(packages)
        }
    }

    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl DeliveryRepository for InMemoryDeliveries {
    async fn record(&self, delivery: NewDelivery) -> Result<Delivery, DomainError> {
        if self.fail {
            return Err(DomainError::Database("connection reset".to_string()));
        }

        let stored = {
            let mut rows = self.rows.lock().unwrap();
            let stored = Delivery {
                id: rows.len() as i32 + 1,
                package_id: delivery.package_id,
                agent_id: delivery.agent_id,
                photo_path: delivery.photo_path,
                coordinates: delivery.coordinates,
                delivered_at: Utc::now(),
                notes: delivery.notes,
            };
            rows.push(stored.clone());
            stored
        };

        self.packages
            .update_status(stored.package_id, PackageStatus::Delivered)
            .await?;
        Ok(stored)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Delivery>, DomainError> {
        Ok(self.rows.lock().unwrap().iter().find(|d| d.id == id).cloned())
    }

    async fn find_by_package(&self, package_id: i32) -> Result<Vec<Delivery>, DomainError> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|d| d.package_id == package_id)
            .cloned()
            .collect())
    }
}

/// Reversible "hash" so tests stay fast.
pub struct PlainHasher;

#[async_trait]
impl CredentialHasher for PlainHasher {
    async fn hash(&self, password: &str) -> Result<String, DomainError> {
        Ok(format!("plain${password}"))
    }

    async fn verify(&self, password: &str, password_hash: &str) -> bool {
        password_hash == format!("plain${password}")
    }
}

/// Tokens of the form `{subject}|{exp}`.
pub struct FakeTokens;

impl TokenIssuer for FakeTokens {
    fn issue(&self, subject: &str, ttl: Duration) -> Result<String, DomainError> {
        Ok(format!("{}|{}", subject, (Utc::now() + ttl).timestamp()))
    }

    fn verify(&self, token: &str) -> Option<Claims> {
        let (sub, exp) = token.rsplit_once('|')?;
        let exp: i64 = exp.parse().ok()?;
        if exp <= Utc::now().timestamp() {
            return None;
        }
        Some(Claims {
            sub: sub.to_string(),
            exp,
        })
    }
}

#[derive(Default)]
pub struct MemoryMedia {
    pub files: Mutex<HashMap<String, Vec<u8>>>,
}

#[async_trait]
impl MediaStore for MemoryMedia {
    async fn store(&self, file_name: &str, contents: &[u8]) -> Result<String, DomainError> {
        self.files
            .lock()
            .unwrap()
            .insert(file_name.to_string(), contents.to_vec());
        Ok(format!("media/{file_name}"))
    }
}
