//! PostgreSQL adapter for BusinessRepository

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::domain::entities::{Business, BusinessId, BusinessStatus};
use crate::domain::ports::BusinessRepository;
use crate::entity::businesses;
use crate::error::DomainError;

/// PostgreSQL implementation of BusinessRepository
pub struct PostgresBusinessRepository {
    db: DatabaseConnection,
}

impl PostgresBusinessRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl BusinessRepository for PostgresBusinessRepository {
    async fn find_by_id(&self, id: &BusinessId) -> Result<Option<Business>, DomainError> {
        let result = businesses::Entity::find_by_id(id.0)
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(|m| m.into()))
    }

    async fn list(&self, status: Option<BusinessStatus>) -> Result<Vec<Business>, DomainError> {
        let mut query = businesses::Entity::find().order_by_asc(businesses::Column::Name);
        if let Some(status) = status {
            query = query.filter(businesses::Column::Status.eq(status.to_string()));
        }

        let results = query
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(|m| m.into()).collect())
    }
}

/// Convert SeaORM model to domain entity
impl From<businesses::Model> for Business {
    fn from(model: businesses::Model) -> Self {
        Business {
            id: BusinessId(model.id),
            name: model.name,
            status: model
                .status
                .parse()
                .unwrap_or(BusinessStatus::PendingApproval),
        }
    }
}
