//! SeaORM table models
//!
//! Database-facing models for the Postgres adapters. Domain conversions
//! live next to the repositories in `adapters::postgres`.

pub mod businesses;
pub mod card_views;
pub mod reward_claims;
pub mod rewards;
