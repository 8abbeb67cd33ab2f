use crate::database::db_err;
use crate::database::entities::{deliveries, packages};
use async_trait::async_trait;
use chrono::Utc;
use domain::{
    Coordinates, Delivery, DeliveryRepository, DomainError, NewDelivery, PackageStatus,
};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};
use tracing::{debug, warn};

#[derive(Clone)]
pub struct SeaOrmDeliveryRepository {
    db: DatabaseConnection,
}

impl SeaOrmDeliveryRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_delivery(model: deliveries::Model) -> Result<Delivery, DomainError> {
        let coordinates = Coordinates::new(model.latitude, model.longitude).map_err(|e| {
            DomainError::Database(format!("Delivery {} has bad coordinates: {}", model.id, e))
        })?;

        Ok(Delivery {
            id: model.id,
            package_id: model.package_id,
            agent_id: model.agent_id,
            photo_path: model.photo_path,
            coordinates,
            delivered_at: model.delivered_at.with_timezone(&Utc),
            notes: model.notes,
        })
    }
}

#[async_trait]
impl DeliveryRepository for SeaOrmDeliveryRepository {
    async fn record(&self, delivery: NewDelivery) -> Result<Delivery, DomainError> {
        // Dropping `txn` without commit rolls back, so every `?` below
        // leaves neither change visible.
        let txn = self.db.begin().await.map_err(db_err)?;

        let active_model = deliveries::ActiveModel {
            package_id: Set(delivery.package_id),
            agent_id: Set(delivery.agent_id),
            photo_path: Set(delivery.photo_path),
            latitude: Set(delivery.coordinates.latitude()),
            longitude: Set(delivery.coordinates.longitude()),
            delivered_at: Set(Utc::now().fixed_offset()),
            notes: Set(delivery.notes),
            ..Default::default()
        };
        let model = active_model.insert(&txn).await.map_err(db_err)?;

        let updated = packages::Entity::update_many()
            .col_expr(
                packages::Column::Status,
                Expr::value(PackageStatus::Delivered.as_str()),
            )
            .filter(packages::Column::Id.eq(delivery.package_id))
            .exec(&txn)
            .await
            .map_err(db_err)?;

        if updated.rows_affected == 0 {
            warn!(
                package_id = delivery.package_id,
                delivery_id = model.id,
                "Delivery recorded for unknown package; no status updated"
            );
        } else {
            debug!(package_id = delivery.package_id, "Package marked delivered");
        }

        txn.commit().await.map_err(db_err)?;

        Self::model_to_delivery(model)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Delivery>, DomainError> {
        let model = deliveries::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        model.map(Self::model_to_delivery).transpose()
    }

    async fn find_by_package(&self, package_id: i32) -> Result<Vec<Delivery>, DomainError> {
        let models = deliveries::Entity::find()
            .filter(deliveries::Column::PackageId.eq(package_id))
            .order_by_asc(deliveries::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        models.into_iter().map(Self::model_to_delivery).collect()
    }
}
