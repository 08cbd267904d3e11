//! Adapters implementing the domain ports
//!
//! PostgreSQL (SeaORM) implementations of the repository traits.

pub mod postgres;

pub use postgres::{
    PostgresBusinessRepository, PostgresCardViewRepository, PostgresRewardClaimRepository,
    PostgresRewardRepository,
};
