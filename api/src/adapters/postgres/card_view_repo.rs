//! PostgreSQL adapter for CardViewRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::entities::{BusinessId, CardView, CardViewId, RewardId};
use crate::domain::ports::CardViewRepository;
use crate::entity::card_views;
use crate::error::DomainError;

/// PostgreSQL implementation of CardViewRepository
pub struct PostgresCardViewRepository {
    db: DatabaseConnection,
}

impl PostgresCardViewRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CardViewRepository for PostgresCardViewRepository {
    async fn list(&self, business_id: Option<&BusinessId>) -> Result<Vec<CardView>, DomainError> {
        let mut query = card_views::Entity::find().order_by_asc(card_views::Column::ViewedAt);
        if let Some(business_id) = business_id {
            query = query.filter(card_views::Column::BusinessId.eq(business_id.0));
        }

        let results = query
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<card_views::Model> for CardView {
    fn from(model: card_views::Model) -> Self {
        CardView {
            id: CardViewId(model.id),
            reward_id: RewardId(model.reward_id),
            business_id: BusinessId(model.business_id),
            viewed_at: model.viewed_at.with_timezone(&Utc),
        }
    }
}
