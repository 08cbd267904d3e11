//! Reward domain entity
//!
//! A reward (a.k.a. "card") is a single offer a business publishes for
//! customers to claim. Immutable once events reference it, except for
//! `quantity_remaining` which counts down as claims are redeemed.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::BusinessId;

/// Unique identifier for a reward card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RewardId(pub Uuid);

impl RewardId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RewardId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for RewardId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for RewardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reward card published by a business
#[derive(Debug, Clone, Serialize)]
pub struct Reward {
    pub id: RewardId,
    pub business_id: BusinessId,
    pub title: String,
    pub subtitle: Option<String>,
    pub quantity_remaining: i32,
}

impl Reward {
    /// A reward is active while it still has stock to hand out
    pub fn is_active(&self) -> bool {
        self.quantity_remaining > 0
    }
}
