//! Repository port traits
//!
//! Read-only access to the three append-only event collections and the
//! business/reward catalogs. The analytics engine only ever reads and
//! folds over these; mutation belongs to the CRUD layer outside this
//! subsystem.

use async_trait::async_trait;

use crate::domain::entities::{
    Business, BusinessId, BusinessStatus, CardView, Reward, RewardClaim,
};
use crate::error::DomainError;

/// Repository for card view events
#[async_trait]
pub trait CardViewRepository: Send + Sync {
    /// List view events, optionally scoped to one business
    async fn list(&self, business_id: Option<&BusinessId>) -> Result<Vec<CardView>, DomainError>;
}

/// Repository for reward claim events
#[async_trait]
pub trait RewardClaimRepository: Send + Sync {
    /// List claim events, optionally scoped to one business
    async fn list(&self, business_id: Option<&BusinessId>)
        -> Result<Vec<RewardClaim>, DomainError>;
}

/// Repository for the reward catalog
#[async_trait]
pub trait RewardRepository: Send + Sync {
    /// List rewards, optionally scoped to one business
    async fn list(&self, business_id: Option<&BusinessId>) -> Result<Vec<Reward>, DomainError>;
}

/// Repository for business accounts
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// Find a business by ID
    async fn find_by_id(&self, id: &BusinessId) -> Result<Option<Business>, DomainError>;

    /// List businesses, optionally filtered by status
    async fn list(&self, status: Option<BusinessStatus>) -> Result<Vec<Business>, DomainError>;
}
