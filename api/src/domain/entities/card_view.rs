//! Card view event
//!
//! One impression event per customer opening a reward card. Views are
//! append-only: this subsystem never updates or deletes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{BusinessId, RewardId};

/// Unique identifier for a view event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardViewId(pub Uuid);

impl CardViewId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CardViewId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for CardViewId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for CardViewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An impression event on a reward card
///
/// `business_id` is denormalized from the reward so streams can be
/// filtered without a join. A view whose reward has since been deleted is
/// an orphan: it still counts towards scalar totals but cannot be
/// attributed in per-reward breakdowns.
#[derive(Debug, Clone, Serialize)]
pub struct CardView {
    pub id: CardViewId,
    pub reward_id: RewardId,
    pub business_id: BusinessId,
    pub viewed_at: DateTime<Utc>,
}
