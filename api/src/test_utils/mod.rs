//! Test utilities
//!
//! In-memory port implementations and fixture factories shared by unit
//! and integration tests.

pub mod fixtures;
pub mod mocks;

pub use fixtures::{test_business, test_business_with_status, test_claim, test_reward, test_view};
pub use mocks::{
    FailingCardViewRepository, InMemoryBusinessRepository, InMemoryCardViewRepository,
    InMemoryRewardClaimRepository, InMemoryRewardRepository,
};
