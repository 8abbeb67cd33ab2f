use crate::database::db_err;
use crate::database::entities::packages;
use async_trait::async_trait;
use chrono::Utc;
use domain::{DomainError, NewPackage, Package, PackageRepository, PackageStatus};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

#[derive(Clone)]
pub struct SeaOrmPackageRepository {
    db: DatabaseConnection,
}

impl SeaOrmPackageRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_package(model: packages::Model) -> Result<Package, DomainError> {
        let status: PackageStatus = model.status.parse().map_err(|_| {
            DomainError::Database(format!(
                "Package {} has unknown status '{}'",
                model.id, model.status
            ))
        })?;

        Ok(Package {
            id: model.id,
            package_uid: model.package_uid,
            address: model.address,
            city: model.city,
            state: model.state,
            postal_code: model.postal_code,
            status,
            assigned_agent_id: model.assigned_agent_id,
            created_at: model.created_at.with_timezone(&Utc),
        })
    }
}

#[async_trait]
impl PackageRepository for SeaOrmPackageRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Package>, DomainError> {
        let model = packages::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        model.map(Self::model_to_package).transpose()
    }

    async fn find_by_uid(&self, package_uid: &str) -> Result<Option<Package>, DomainError> {
        let model = packages::Entity::find()
            .filter(packages::Column::PackageUid.eq(package_uid))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        model.map(Self::model_to_package).transpose()
    }

    async fn find_by_agent(&self, agent_id: i32) -> Result<Vec<Package>, DomainError> {
        let models = packages::Entity::find()
            .filter(packages::Column::AssignedAgentId.eq(agent_id))
            .order_by_asc(packages::Column::Id)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        models.into_iter().map(Self::model_to_package).collect()
    }

    async fn insert(&self, package: NewPackage) -> Result<Package, DomainError> {
        let active_model = packages::ActiveModel {
            package_uid: Set(package.package_uid),
            address: Set(package.address),
            city: Set(package.city),
            state: Set(package.state),
            postal_code: Set(package.postal_code),
            status: Set(PackageStatus::Assigned.as_str().to_string()),
            assigned_agent_id: Set(package.assigned_agent_id),
            created_at: Set(Utc::now().fixed_offset()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(db_err)?;
        Self::model_to_package(model)
    }

    async fn update_status(&self, id: i32, status: PackageStatus) -> Result<bool, DomainError> {
        let result = packages::Entity::update_many()
            .col_expr(packages::Column::Status, Expr::value(status.as_str()))
            .filter(packages::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .map_err(db_err)?;

        Ok(result.rows_affected > 0)
    }
}
