//! Reward claim event
//!
//! Created once when a customer claims a reward. `redeemed_at` is set at
//! most once, later, when the customer redeems it in person. Claims are
//! append-only from this subsystem's perspective.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BusinessId, RewardId};

/// Unique identifier for a claim event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ClaimId(pub Uuid);

impl ClaimId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ClaimId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for ClaimId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ClaimId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A claim on a reward, possibly later redeemed
///
/// Invariant: `redeemed_at`, if present, is `>= claimed_at`. All reporting
/// attributes a redemption to the period the reward was *claimed* in, so
/// window filtering and bucketing key on `claimed_at` for both counts.
#[derive(Debug, Clone, Serialize)]
pub struct RewardClaim {
    pub id: ClaimId,
    pub reward_id: RewardId,
    pub business_id: BusinessId,
    pub claimed_at: DateTime<Utc>,
    pub redeemed_at: Option<DateTime<Utc>>,
}

impl RewardClaim {
    pub fn is_redeemed(&self) -> bool {
        self.redeemed_at.is_some()
    }
}
