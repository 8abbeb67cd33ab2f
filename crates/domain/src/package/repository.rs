use super::{NewPackage, Package, PackageStatus};
use crate::DomainError;
use async_trait::async_trait;

/// Repository interface for Package persistence
#[async_trait]
pub trait PackageRepository: Send + Sync {
    /// Find package by primary key
    async fn find_by_id(&self, id: i32) -> Result<Option<Package>, DomainError>;

    /// Find package by its external tracking uid
    async fn find_by_uid(&self, package_uid: &str) -> Result<Option<Package>, DomainError>;

    /// All packages assigned to an agent, in insertion order
    async fn find_by_agent(&self, agent_id: i32) -> Result<Vec<Package>, DomainError>;

    /// Insert a new package with status `Assigned`
    async fn insert(&self, package: NewPackage) -> Result<Package, DomainError>;

    /// Overwrite the status of a package. Returns `false` if no row matched.
    async fn update_status(&self, id: i32, status: PackageStatus) -> Result<bool, DomainError>;
}
