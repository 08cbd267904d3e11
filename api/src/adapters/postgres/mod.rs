//! PostgreSQL repository implementations

pub mod business_repo;
pub mod card_view_repo;
pub mod claim_repo;
pub mod reward_repo;

pub use business_repo::PostgresBusinessRepository;
pub use card_view_repo::PostgresCardViewRepository;
pub use claim_repo::PostgresRewardClaimRepository;
pub use reward_repo::PostgresRewardRepository;
