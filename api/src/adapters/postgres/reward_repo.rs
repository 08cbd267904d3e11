//! PostgreSQL adapter for RewardRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::entities::{BusinessId, Reward, RewardId};
use crate::domain::ports::RewardRepository;
use crate::entity::rewards;
use crate::error::DomainError;

/// PostgreSQL implementation of RewardRepository
pub struct PostgresRewardRepository {
    db: DatabaseConnection,
}

impl PostgresRewardRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RewardRepository for PostgresRewardRepository {
    async fn list(&self, business_id: Option<&BusinessId>) -> Result<Vec<Reward>, DomainError> {
        let mut query = rewards::Entity::find().order_by_asc(rewards::Column::Title);
        if let Some(business_id) = business_id {
            query = query.filter(rewards::Column::BusinessId.eq(business_id.0));
        }

        let results = query
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<rewards::Model> for Reward {
    fn from(model: rewards::Model) -> Self {
        Reward {
            id: RewardId(model.id),
            business_id: BusinessId(model.business_id),
            title: model.title,
            subtitle: model.subtitle,
            quantity_remaining: model.quantity_remaining,
        }
    }
}
