//! HTTP handlers

pub mod analytics;

pub use analytics::{get_admin_analytics, get_business_analytics};
