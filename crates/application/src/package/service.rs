use std::sync::Arc;

use tracing::debug;

use domain::{DomainError, Package, PackageRepository};

pub struct PackageService {
    packages: Arc<dyn PackageRepository>,
}

impl PackageService {
    pub fn new(packages: Arc<dyn PackageRepository>) -> Self {
        Self { packages }
    }

    /// Packages assigned to an agent. An agent with nothing assigned gets
    /// an empty list.
    pub async fn packages_for_agent(&self, agent_id: i32) -> Result<Vec<Package>, DomainError> {
        let packages = self.packages.find_by_agent(agent_id).await?;
        debug!(agent_id, count = packages.len(), "Listed assigned packages");
        Ok(packages)
    }

    pub async fn package(&self, id: i32) -> Result<Package, DomainError> {
        self.packages
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Package {id}")))
    }

    pub async fn package_by_uid(&self, package_uid: &str) -> Result<Package, DomainError> {
        self.packages
            .find_by_uid(package_uid)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Package {package_uid}")))
    }
}
