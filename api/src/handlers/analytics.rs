//! Analytics report handlers
//!
//! Thin wrappers over the two `AnalyticsService` facades. Unknown
//! `time_range` values fall back to `month` inside the service; a bad
//! `business_id` selector is a 400.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::app::Report;
use crate::domain::entities::BusinessId;
use crate::error::AppError;
use crate::AppState;

fn default_time_range() -> String {
    "month".to_string()
}

fn default_business_selector() -> String {
    "all".to_string()
}

/// Query parameters for GET /businesses/:id/analytics
#[derive(Deserialize)]
pub struct BusinessAnalyticsQuery {
    #[serde(default = "default_time_range")]
    pub time_range: String,
}

/// GET /businesses/:id/analytics
///
/// Single-business report: per-reward breakdown always included,
/// per-business breakdown never included.
pub async fn get_business_analytics(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<BusinessAnalyticsQuery>,
) -> Result<Json<Report>, AppError> {
    let report = state
        .analytics_service
        .get_business_analytics(&BusinessId(id), &query.time_range)
        .await?;

    Ok(Json(report))
}

/// Query parameters for GET /admin/analytics
#[derive(Deserialize)]
pub struct AdminAnalyticsQuery {
    #[serde(default = "default_time_range")]
    pub time_range: String,
    /// `"all"` or a business UUID
    #[serde(default = "default_business_selector")]
    pub business_id: String,
    /// When true the per-business breakdown rows are included in the
    /// payload; the leaderboard is included either way
    #[serde(default)]
    pub show_all: bool,
}

/// GET /admin/analytics
pub async fn get_admin_analytics(
    State(state): State<AppState>,
    Query(query): Query<AdminAnalyticsQuery>,
) -> Result<Json<Report>, AppError> {
    let report = state
        .analytics_service
        .get_admin_analytics(&query.time_range, &query.business_id, query.show_all)
        .await?;

    Ok(Json(report))
}
