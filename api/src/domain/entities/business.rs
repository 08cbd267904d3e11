//! Business domain entity
//!
//! A business signs up, gets approved by an admin, and then publishes
//! reward cards for customers to claim.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a business
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BusinessId(pub Uuid);

impl BusinessId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for BusinessId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for BusinessId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for BusinessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lifecycle status of a business account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusinessStatus {
    PendingApproval,
    Approved,
    Rejected,
    Paused,
}

impl std::fmt::Display for BusinessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BusinessStatus::PendingApproval => write!(f, "pending_approval"),
            BusinessStatus::Approved => write!(f, "approved"),
            BusinessStatus::Rejected => write!(f, "rejected"),
            BusinessStatus::Paused => write!(f, "paused"),
        }
    }
}

impl std::str::FromStr for BusinessStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending_approval" => Ok(BusinessStatus::PendingApproval),
            "approved" => Ok(BusinessStatus::Approved),
            "rejected" => Ok(BusinessStatus::Rejected),
            "paused" => Ok(BusinessStatus::Paused),
            _ => Err(format!("Unknown business status: {}", s)),
        }
    }
}

/// A business account
#[derive(Debug, Clone, Serialize)]
pub struct Business {
    pub id: BusinessId,
    pub name: String,
    pub status: BusinessStatus,
}
