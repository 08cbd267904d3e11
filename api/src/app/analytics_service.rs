//! Analytics service
//!
//! One parameterized report engine behind two thin facades: the
//! business-facing dashboard report and the cross-business admin report.
//! Both run the same pipeline — resolve window, filter streams, aggregate,
//! rank, assemble — so the two report shapes cannot drift apart.
//!
//! Every call recomputes from a fresh snapshot. There is no caching and
//! no partial result: if any store read fails the whole report fails.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::app::aggregate::{
    self, BusinessMetrics, RewardMetrics, StreamSeries, Totals,
};
use crate::app::filter::{filter_claims, filter_views, BusinessScope};
use crate::app::rank::{rank, LeaderboardEntry, LEADERBOARD_LIMIT};
use crate::app::time_window::TimeRange;
use crate::domain::entities::BusinessId;
use crate::domain::ports::{
    BusinessRepository, CardViewRepository, RewardClaimRepository, RewardRepository,
};
use crate::error::{AppError, DomainError};

/// Chart series for the three event streams. Series cover full history
/// (never the filter window); business-scoped reports scope them by
/// business. The redeemed series buckets redeemed claims by `claimed_at`.
#[derive(Debug, Clone, Serialize)]
pub struct ReportSeries {
    pub views: StreamSeries,
    pub claims: StreamSeries,
    pub redeemed: StreamSeries,
}

/// A complete, immutable analytics report
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub time_range: TimeRange,
    /// Echoed scope: `"all"` or the business UUID
    pub business_id: String,
    pub show_all: bool,
    #[serde(flatten)]
    pub totals: Totals,
    pub rewards: Vec<RewardMetrics>,
    /// Per-business breakdown; empty unless an admin asked for the
    /// individual-businesses view (payload shaping, not a computation
    /// difference)
    pub businesses: Vec<BusinessMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub leaderboard: Option<Vec<LeaderboardEntry>>,
    pub series: ReportSeries,
}

/// Which caller class a report is for
#[derive(Debug, Clone, Copy)]
pub enum ReportKind {
    /// Single-business dashboard: per-reward rows, no leaderboard
    Business,
    /// Admin view: leaderboard always, per-business rows when `show_all`
    Admin { show_all: bool },
}

/// Service computing analytics reports over the event stores
pub struct AnalyticsService<CV, RC, RW, BZ>
where
    CV: CardViewRepository,
    RC: RewardClaimRepository,
    RW: RewardRepository,
    BZ: BusinessRepository,
{
    views: Arc<CV>,
    claims: Arc<RC>,
    rewards: Arc<RW>,
    businesses: Arc<BZ>,
}

impl<CV, RC, RW, BZ> AnalyticsService<CV, RC, RW, BZ>
where
    CV: CardViewRepository,
    RC: RewardClaimRepository,
    RW: RewardRepository,
    BZ: BusinessRepository,
{
    pub fn new(views: Arc<CV>, claims: Arc<RC>, rewards: Arc<RW>, businesses: Arc<BZ>) -> Self {
        Self {
            views,
            claims,
            rewards,
            businesses,
        }
    }

    /// Single-business report for the business dashboard.
    /// Fails with `NotFound` for an unknown business.
    pub async fn get_business_analytics(
        &self,
        business_id: &BusinessId,
        time_range: &str,
    ) -> Result<Report, AppError> {
        self.compute_report(
            Utc::now(),
            TimeRange::parse_lenient(time_range),
            BusinessScope::One(*business_id),
            ReportKind::Business,
        )
        .await
    }

    /// Cross-business report for the admin dashboard.
    /// `business_selector` is `"all"` or a business UUID.
    pub async fn get_admin_analytics(
        &self,
        time_range: &str,
        business_selector: &str,
        show_all: bool,
    ) -> Result<Report, AppError> {
        let scope = BusinessScope::parse(business_selector)?;
        self.compute_report(
            Utc::now(),
            TimeRange::parse_lenient(time_range),
            scope,
            ReportKind::Admin { show_all },
        )
        .await
    }

    /// The shared report pipeline. `now` is threaded through explicitly so
    /// the whole computation is a pure function of the event snapshot.
    pub async fn compute_report(
        &self,
        now: DateTime<Utc>,
        time_range: TimeRange,
        scope: BusinessScope,
        kind: ReportKind,
    ) -> Result<Report, AppError> {
        let window = time_range.resolve(now);
        let business_param = scope.as_param();

        let businesses = match &scope {
            BusinessScope::All => self.businesses.list(None).await?,
            BusinessScope::One(id) => {
                let business = self.businesses.find_by_id(id).await?.ok_or_else(|| {
                    DomainError::NotFound(format!("Business not found: {}", id))
                })?;
                vec![business]
            }
        };

        let rewards = self.rewards.list(business_param).await?;
        let all_views = self.views.list(business_param).await?;
        let all_claims = self.claims.list(business_param).await?;

        // Chart series span full history, scoped by business only, so a
        // "day" report still renders a six-month trend.
        let view_times: Vec<_> = all_views
            .iter()
            .filter(|v| scope.includes(&v.business_id))
            .map(|v| v.viewed_at)
            .collect();
        let claim_times: Vec<_> = all_claims
            .iter()
            .filter(|c| scope.includes(&c.business_id))
            .map(|c| c.claimed_at)
            .collect();
        let redeemed_times: Vec<_> = all_claims
            .iter()
            .filter(|c| scope.includes(&c.business_id) && c.is_redeemed())
            .map(|c| c.claimed_at)
            .collect();
        let series = ReportSeries {
            views: aggregate::series(now, &view_times),
            claims: aggregate::series(now, &claim_times),
            redeemed: aggregate::series(now, &redeemed_times),
        };

        // Totals and breakdowns use the window-scoped streams.
        let views = filter_views(all_views, &scope, &window);
        let claims = filter_claims(all_claims, &scope, &window);

        let totals = aggregate::totals(&views, &claims);
        let reward_rows = aggregate::per_reward(&rewards, &views, &claims);

        let (business_rows, leaderboard, show_all) = match kind {
            ReportKind::Business => (Vec::new(), None, false),
            ReportKind::Admin { show_all } => {
                // Always computed so the leaderboard is available; only
                // shipped in the payload when the admin wants rows.
                let rows = aggregate::per_business(&businesses, &rewards, &views, &claims);
                let board = rank(&rows, LEADERBOARD_LIMIT);
                let shipped = if show_all { rows } else { Vec::new() };
                (shipped, Some(board), show_all)
            }
        };

        tracing::debug!(
            scope = %scope,
            time_range = %time_range,
            total_views = totals.total_views,
            total_claims = totals.total_claims,
            "analytics report computed"
        );

        Ok(Report {
            time_range,
            business_id: scope.to_string(),
            show_all,
            totals,
            rewards: reward_rows,
            businesses: business_rows,
            leaderboard,
            series,
        })
    }
}
