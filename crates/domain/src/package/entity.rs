use super::PackageStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A shipment with a delivery address and status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub id: i32,
    pub package_uid: String,
    pub address: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub status: PackageStatus,
    pub assigned_agent_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Packages are created by tooling outside the HTTP surface.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPackage {
    pub package_uid: String,
    pub address: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub assigned_agent_id: Option<i32>,
}

impl NewPackage {
    pub fn new(package_uid: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            package_uid: package_uid.into(),
            address: address.into(),
            city: None,
            state: None,
            postal_code: None,
            assigned_agent_id: None,
        }
    }

    pub fn assigned_to(mut self, agent_id: i32) -> Self {
        self.assigned_agent_id = Some(agent_id);
        self
    }

    pub fn with_locality(
        mut self,
        city: impl Into<String>,
        state: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        self.city = Some(city.into());
        self.state = Some(state.into());
        self.postal_code = Some(postal_code.into());
        self
    }
}
