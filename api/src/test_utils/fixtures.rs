//! Test fixtures
//!
//! Factory functions for creating test data with sensible defaults.

use chrono::{DateTime, Utc};

use crate::domain::entities::{
    Business, BusinessId, BusinessStatus, CardView, CardViewId, ClaimId, Reward, RewardClaim,
    RewardId,
};

/// Create an approved test business
pub fn test_business(name: &str) -> Business {
    Business {
        id: BusinessId::new(),
        name: name.to_string(),
        status: BusinessStatus::Approved,
    }
}

/// Create a test business with a specific status
pub fn test_business_with_status(name: &str, status: BusinessStatus) -> Business {
    Business {
        id: BusinessId::new(),
        name: name.to_string(),
        status,
    }
}

/// Create a test reward with the given stock
pub fn test_reward(business_id: BusinessId, title: &str, quantity_remaining: i32) -> Reward {
    Reward {
        id: RewardId::new(),
        business_id,
        title: title.to_string(),
        subtitle: None,
        quantity_remaining,
    }
}

/// Create a view event at a specific instant
pub fn test_view(reward_id: RewardId, business_id: BusinessId, viewed_at: DateTime<Utc>) -> CardView {
    CardView {
        id: CardViewId::new(),
        reward_id,
        business_id,
        viewed_at,
    }
}

/// Create a claim event, optionally already redeemed
pub fn test_claim(
    reward_id: RewardId,
    business_id: BusinessId,
    claimed_at: DateTime<Utc>,
    redeemed_at: Option<DateTime<Utc>>,
) -> RewardClaim {
    RewardClaim {
        id: ClaimId::new(),
        reward_id,
        business_id,
        claimed_at,
        redeemed_at,
    }
}
