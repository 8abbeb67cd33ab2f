use super::{Delivery, NewDelivery};
use crate::DomainError;
use async_trait::async_trait;

/// Repository interface for delivery evidence
#[async_trait]
pub trait DeliveryRepository: Send + Sync {
    /// Insert the delivery row and mark the referenced package as
    /// `Delivered` as one atomic unit.
    ///
    /// The status change is unconditional: the previous status and the
    /// assigned agent are not checked. When the package does not exist the
    /// delivery row is still stored and no package is touched.
    async fn record(&self, delivery: NewDelivery) -> Result<Delivery, DomainError>;

    /// Find delivery by primary key
    async fn find_by_id(&self, id: i32) -> Result<Option<Delivery>, DomainError>;

    /// All deliveries recorded for a package, oldest first
    async fn find_by_package(&self, package_id: i32) -> Result<Vec<Delivery>, DomainError>;
}
