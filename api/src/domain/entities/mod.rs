//! Domain entities
//!
//! Pure domain models representing core business concepts.
//! These are separate from the SeaORM entities in the `entity` module.

pub mod business;
pub mod card_view;
pub mod reward;
pub mod reward_claim;

pub use business::{Business, BusinessId, BusinessStatus};
pub use card_view::{CardView, CardViewId};
pub use reward::{Reward, RewardId};
pub use reward_claim::{ClaimId, RewardClaim};
