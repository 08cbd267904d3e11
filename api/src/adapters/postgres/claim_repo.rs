//! PostgreSQL adapter for RewardClaimRepository

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::entities::{BusinessId, ClaimId, RewardClaim, RewardId};
use crate::domain::ports::RewardClaimRepository;
use crate::entity::reward_claims;
use crate::error::DomainError;

/// PostgreSQL implementation of RewardClaimRepository
pub struct PostgresRewardClaimRepository {
    db: DatabaseConnection,
}

impl PostgresRewardClaimRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RewardClaimRepository for PostgresRewardClaimRepository {
    async fn list(
        &self,
        business_id: Option<&BusinessId>,
    ) -> Result<Vec<RewardClaim>, DomainError> {
        let mut query =
            reward_claims::Entity::find().order_by_asc(reward_claims::Column::ClaimedAt);
        if let Some(business_id) = business_id {
            query = query.filter(reward_claims::Column::BusinessId.eq(business_id.0));
        }

        let results = query
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<reward_claims::Model> for RewardClaim {
    fn from(model: reward_claims::Model) -> Self {
        RewardClaim {
            id: ClaimId(model.id),
            reward_id: RewardId(model.reward_id),
            business_id: BusinessId(model.business_id),
            claimed_at: model.claimed_at.with_timezone(&Utc),
            redeemed_at: model.redeemed_at.map(|ts| ts.with_timezone(&Utc)),
        }
    }
}
