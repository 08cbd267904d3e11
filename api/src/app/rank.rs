//! Business leaderboard ranking

use serde::Serialize;

use crate::app::aggregate::BusinessMetrics;
use crate::domain::entities::BusinessId;

/// How many businesses the admin leaderboard shows
pub const LEADERBOARD_LIMIT: usize = 10;

/// One leaderboard row
#[derive(Debug, Clone, Serialize)]
pub struct LeaderboardEntry {
    pub rank: i64,
    pub business_id: BusinessId,
    pub name: String,
    pub claims: i64,
    pub views: i64,
}

/// Rank businesses by claims, ties broken by views, further ties keeping
/// encounter order. Zero-claim businesses still appear when fewer than
/// `limit` rows exist.
pub fn rank(rows: &[BusinessMetrics], limit: usize) -> Vec<LeaderboardEntry> {
    let mut ordered: Vec<&BusinessMetrics> = rows.iter().collect();
    // sort_by is stable, so equal (claims, views) keep their input order
    ordered.sort_by(|a, b| b.claims.cmp(&a.claims).then(b.views.cmp(&a.views)));

    ordered
        .into_iter()
        .take(limit)
        .enumerate()
        .map(|(i, row)| LeaderboardEntry {
            rank: (i + 1) as i64,
            business_id: row.business_id,
            name: row.name.clone(),
            claims: row.claims,
            views: row.views,
        })
        .collect()
}
