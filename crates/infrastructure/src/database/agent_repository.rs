use crate::database::db_err;
use crate::database::entities::agents;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{Agent, AgentRepository, DomainError, NewAgent};
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};

#[derive(Clone)]
pub struct SeaOrmAgentRepository {
    db: DatabaseConnection,
}

impl SeaOrmAgentRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn model_to_agent(model: agents::Model) -> Agent {
        Agent {
            id: model.id,
            username: model.username,
            password_hash: model.password_hash,
            full_name: model.full_name,
            created_at: model.created_at.with_timezone(&Utc),
        }
    }
}

#[async_trait]
impl AgentRepository for SeaOrmAgentRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Agent>, DomainError> {
        let model = agents::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(Self::model_to_agent))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Agent>, DomainError> {
        let model = agents::Entity::find()
            .filter(agents::Column::Username.eq(username))
            .one(&self.db)
            .await
            .map_err(db_err)?;

        Ok(model.map(Self::model_to_agent))
    }

    async fn insert(&self, agent: NewAgent) -> Result<Agent, DomainError> {
        let now: DateTime<Utc> = Utc::now();

        let active_model = agents::ActiveModel {
            username: Set(agent.username.into()),
            password_hash: Set(agent.password_hash),
            full_name: Set(agent.full_name),
            created_at: Set(now.fixed_offset()),
            ..Default::default()
        };

        let model = active_model.insert(&self.db).await.map_err(|e| match db_err(e) {
            // Lost the race against a concurrent create with the same username
            DomainError::Conflict(_) => DomainError::Conflict("Agent exists".to_string()),
            other => other,
        })?;

        Ok(Self::model_to_agent(model))
    }
}
