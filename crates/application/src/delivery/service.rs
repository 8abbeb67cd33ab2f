use std::sync::Arc;

use tracing::{info, warn};

use domain::{
    Agent, Coordinates, Delivery, DeliveryRepository, DomainError, MediaStore, NewDelivery,
    delivery_photo_name,
};

/// Evidence submitted by an agent for one package.
#[derive(Debug, Clone)]
pub struct SubmitDelivery {
    pub package_id: i32,
    pub coordinates: Coordinates,
    pub notes: Option<String>,
    pub file_name: String,
    pub contents: Vec<u8>,
}

pub struct DeliveryService {
    deliveries: Arc<dyn DeliveryRepository>,
    media: Arc<dyn MediaStore>,
}

impl DeliveryService {
    pub fn new(deliveries: Arc<dyn DeliveryRepository>, media: Arc<dyn MediaStore>) -> Self {
        Self { deliveries, media }
    }

    /// Store the photo, then record the delivery and mark the package
    /// delivered.
    ///
    /// The file write and the database transaction are not coordinated: if
    /// recording fails the photo stays on disk.
    pub async fn submit(
        &self,
        agent: &Agent,
        submission: SubmitDelivery,
    ) -> Result<Delivery, DomainError> {
        let file_name = delivery_photo_name(submission.package_id, agent.id, &submission.file_name);
        let photo_path = self.media.store(&file_name, &submission.contents).await?;

        let notes = submission.notes.filter(|n| !n.is_empty());
        let result = self
            .deliveries
            .record(NewDelivery {
                package_id: submission.package_id,
                agent_id: agent.id,
                photo_path: photo_path.clone(),
                coordinates: submission.coordinates,
                notes,
            })
            .await;

        match result {
            Ok(delivery) => {
                info!(
                    delivery_id = delivery.id,
                    package_id = delivery.package_id,
                    agent_id = agent.id,
                    "📦 Delivery recorded"
                );
                Ok(delivery)
            }
            Err(e) => {
                warn!(photo = %photo_path, "Recording delivery failed, photo left on disk: {}", e);
                Err(e)
            }
        }
    }
}
