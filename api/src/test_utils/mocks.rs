//! Mock implementations of port traits
//!
//! In-memory implementations that can be pre-populated for testing, plus
//! a failing repository for exercising the no-partial-reports rule.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::domain::entities::{
    Business, BusinessId, BusinessStatus, CardView, Reward, RewardClaim,
};
use crate::domain::ports::{
    BusinessRepository, CardViewRepository, RewardClaimRepository, RewardRepository,
};
use crate::error::DomainError;

// ============================================================================
// In-Memory Card View Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryCardViewRepository {
    views: Arc<RwLock<Vec<CardView>>>,
}

impl InMemoryCardViewRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with view events
    pub fn with_views(self, views: Vec<CardView>) -> Self {
        self.views.write().unwrap().extend(views);
        self
    }
}

#[async_trait]
impl CardViewRepository for InMemoryCardViewRepository {
    async fn list(&self, business_id: Option<&BusinessId>) -> Result<Vec<CardView>, DomainError> {
        let views = self.views.read().unwrap();
        Ok(views
            .iter()
            .filter(|v| business_id.map(|id| v.business_id == *id).unwrap_or(true))
            .cloned()
            .collect())
    }
}

// ============================================================================
// In-Memory Reward Claim Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryRewardClaimRepository {
    claims: Arc<RwLock<Vec<RewardClaim>>>,
}

impl InMemoryRewardClaimRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with claim events
    pub fn with_claims(self, claims: Vec<RewardClaim>) -> Self {
        self.claims.write().unwrap().extend(claims);
        self
    }
}

#[async_trait]
impl RewardClaimRepository for InMemoryRewardClaimRepository {
    async fn list(
        &self,
        business_id: Option<&BusinessId>,
    ) -> Result<Vec<RewardClaim>, DomainError> {
        let claims = self.claims.read().unwrap();
        Ok(claims
            .iter()
            .filter(|c| business_id.map(|id| c.business_id == *id).unwrap_or(true))
            .cloned()
            .collect())
    }
}

// ============================================================================
// In-Memory Reward Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryRewardRepository {
    rewards: Arc<RwLock<Vec<Reward>>>,
}

impl InMemoryRewardRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with rewards
    pub fn with_rewards(self, rewards: Vec<Reward>) -> Self {
        self.rewards.write().unwrap().extend(rewards);
        self
    }
}

#[async_trait]
impl RewardRepository for InMemoryRewardRepository {
    async fn list(&self, business_id: Option<&BusinessId>) -> Result<Vec<Reward>, DomainError> {
        let rewards = self.rewards.read().unwrap();
        Ok(rewards
            .iter()
            .filter(|r| business_id.map(|id| r.business_id == *id).unwrap_or(true))
            .cloned()
            .collect())
    }
}

// ============================================================================
// In-Memory Business Repository
// ============================================================================

#[derive(Default)]
pub struct InMemoryBusinessRepository {
    businesses: Arc<RwLock<Vec<Business>>>,
}

impl InMemoryBusinessRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate with businesses
    pub fn with_businesses(self, businesses: Vec<Business>) -> Self {
        self.businesses.write().unwrap().extend(businesses);
        self
    }
}

#[async_trait]
impl BusinessRepository for InMemoryBusinessRepository {
    async fn find_by_id(&self, id: &BusinessId) -> Result<Option<Business>, DomainError> {
        let businesses = self.businesses.read().unwrap();
        Ok(businesses.iter().find(|b| b.id == *id).cloned())
    }

    async fn list(&self, status: Option<BusinessStatus>) -> Result<Vec<Business>, DomainError> {
        let businesses = self.businesses.read().unwrap();
        Ok(businesses
            .iter()
            .filter(|b| status.map(|s| b.status == s).unwrap_or(true))
            .cloned()
            .collect())
    }
}

// ============================================================================
// Failing Card View Repository
// ============================================================================

/// Always fails with a database error, for testing that a failed store
/// read fails the whole report instead of producing zeros
pub struct FailingCardViewRepository;

#[async_trait]
impl CardViewRepository for FailingCardViewRepository {
    async fn list(&self, _business_id: Option<&BusinessId>) -> Result<Vec<CardView>, DomainError> {
        Err(DomainError::Database("connection refused".to_string()))
    }
}
