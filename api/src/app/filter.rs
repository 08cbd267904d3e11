//! Event stream filtering
//!
//! Narrows the raw event streams by business scope and by the resolved
//! time window, one pass per stream. Redemptions are attributed to the
//! period the reward was claimed in, so claim filtering keys on
//! `claimed_at` regardless of when (or whether) the claim was redeemed.

use crate::app::time_window::Window;
use crate::domain::entities::{BusinessId, CardView, RewardClaim};
use crate::error::DomainError;

/// Which businesses a report covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusinessScope {
    All,
    One(BusinessId),
}

impl BusinessScope {
    /// Parse the HTTP-level selector: the sentinel `"all"` or a business UUID
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(BusinessScope::All);
        }
        s.parse::<uuid::Uuid>()
            .map(|id| BusinessScope::One(BusinessId(id)))
            .map_err(|_| {
                DomainError::Validation(format!(
                    "business_id must be 'all' or a UUID, got '{}'",
                    s
                ))
            })
    }

    pub fn includes(&self, business_id: &BusinessId) -> bool {
        match self {
            BusinessScope::All => true,
            BusinessScope::One(id) => id == business_id,
        }
    }

    /// The pushdown filter for repository calls, `None` meaning unscoped
    pub fn as_param(&self) -> Option<&BusinessId> {
        match self {
            BusinessScope::All => None,
            BusinessScope::One(id) => Some(id),
        }
    }
}

impl std::fmt::Display for BusinessScope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BusinessScope::All => write!(f, "all"),
            BusinessScope::One(id) => write!(f, "{}", id),
        }
    }
}

/// Retain views inside the scope and window
pub fn filter_views(views: Vec<CardView>, scope: &BusinessScope, window: &Window) -> Vec<CardView> {
    views
        .into_iter()
        .filter(|v| scope.includes(&v.business_id) && window.contains(v.viewed_at))
        .collect()
}

/// Retain claims inside the scope and window, keyed on `claimed_at`
pub fn filter_claims(
    claims: Vec<RewardClaim>,
    scope: &BusinessScope,
    window: &Window,
) -> Vec<RewardClaim> {
    claims
        .into_iter()
        .filter(|c| scope.includes(&c.business_id) && window.contains(c.claimed_at))
        .collect()
}
