//! Metric aggregation
//!
//! Folds the filtered event streams into scalar totals, per-reward and
//! per-business breakdowns, and the fixed chart series.
//!
//! Attribution rules:
//! - Scalar totals are keyed by the event streams themselves, so an orphan
//!   event (reward deleted after the event was recorded) still counts.
//! - Breakdowns are keyed by the catalogs, so orphan events are excluded
//!   there: a row exists for every reward/business in scope, including
//!   ones with zero events, and an event with no catalog row has nowhere
//!   to land.
//! - Redeemed counts and series attribute redemptions by `claimed_at`.
//!
//! Percentages round to the nearest integer, half away from zero.

use std::collections::{HashMap, HashSet};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::app::time_window::{daily_buckets, month_key, monthly_keys, weekly_buckets, Bucket};
use crate::domain::entities::{
    Business, BusinessId, BusinessStatus, CardView, Reward, RewardClaim, RewardId,
};

/// Integer percentage of `part` over `whole`, 0 when `whole` is 0.
/// Rounds half away from zero. Never NaN, never negative for counts.
pub fn percentage(part: i64, whole: i64) -> i64 {
    if whole == 0 {
        return 0;
    }
    (100.0 * part as f64 / whole as f64).round() as i64
}

/// Scalar totals over the filtered streams
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Totals {
    pub total_views: i64,
    pub total_claims: i64,
    pub total_redeemed: i64,
    pub conversion_rate: i64,
    pub redemption_rate: i64,
}

/// Compute scalar totals from the filtered streams
pub fn totals(views: &[CardView], claims: &[RewardClaim]) -> Totals {
    let total_views = views.len() as i64;
    let total_claims = claims.len() as i64;
    let total_redeemed = claims.iter().filter(|c| c.is_redeemed()).count() as i64;

    Totals {
        total_views,
        total_claims,
        total_redeemed,
        conversion_rate: percentage(total_claims, total_views),
        redemption_rate: percentage(total_redeemed, total_claims),
    }
}

/// Event counts accumulated while walking a stream
#[derive(Debug, Clone, Copy, Default)]
struct Tally {
    views: i64,
    claims: i64,
    redeemed: i64,
    last_claimed_at: Option<DateTime<Utc>>,
    last_redeemed_at: Option<DateTime<Utc>>,
}

impl Tally {
    fn record_view(&mut self) {
        self.views += 1;
    }

    fn record_claim(&mut self, claim: &RewardClaim) {
        self.claims += 1;
        self.last_claimed_at = self.last_claimed_at.max(Some(claim.claimed_at));
        if let Some(redeemed_at) = claim.redeemed_at {
            self.redeemed += 1;
            self.last_redeemed_at = self.last_redeemed_at.max(Some(redeemed_at));
        }
    }
}

/// Per-reward metrics row
#[derive(Debug, Clone, Serialize)]
pub struct RewardMetrics {
    pub reward_id: RewardId,
    pub title: String,
    pub quantity_remaining: i32,
    pub views: i64,
    pub claims: i64,
    pub redeemed: i64,
    pub conversion_rate: i64,
    pub redemption_rate: i64,
    pub last_claimed_at: Option<DateTime<Utc>>,
    pub last_redeemed_at: Option<DateTime<Utc>>,
}

/// One row per catalog reward, in catalog order. Rewards with zero events
/// in the window still get a row; reward existence drives the row set.
pub fn per_reward(
    rewards: &[Reward],
    views: &[CardView],
    claims: &[RewardClaim],
) -> Vec<RewardMetrics> {
    let mut tallies: HashMap<RewardId, Tally> = HashMap::new();
    for view in views {
        tallies.entry(view.reward_id).or_default().record_view();
    }
    for claim in claims {
        tallies.entry(claim.reward_id).or_default().record_claim(claim);
    }

    rewards
        .iter()
        .map(|reward| {
            let tally = tallies.get(&reward.id).copied().unwrap_or_default();
            RewardMetrics {
                reward_id: reward.id,
                title: reward.title.clone(),
                quantity_remaining: reward.quantity_remaining,
                views: tally.views,
                claims: tally.claims,
                redeemed: tally.redeemed,
                conversion_rate: percentage(tally.claims, tally.views),
                redemption_rate: percentage(tally.redeemed, tally.claims),
                last_claimed_at: tally.last_claimed_at,
                last_redeemed_at: tally.last_redeemed_at,
            }
        })
        .collect()
}

/// Per-business metrics row (admin cross-business reports)
#[derive(Debug, Clone, Serialize)]
pub struct BusinessMetrics {
    pub business_id: BusinessId,
    pub name: String,
    pub status: BusinessStatus,
    pub views: i64,
    pub claims: i64,
    pub redeemed: i64,
    pub conversion_rate: i64,
    pub redemption_rate: i64,
    pub total_rewards: i64,
    pub active_rewards: i64,
    pub last_claimed_at: Option<DateTime<Utc>>,
    pub last_redeemed_at: Option<DateTime<Utc>>,
}

/// One row per business, in catalog order. Only events whose reward still
/// exists are attributed; orphans are counted in the scalar totals only.
pub fn per_business(
    businesses: &[Business],
    rewards: &[Reward],
    views: &[CardView],
    claims: &[RewardClaim],
) -> Vec<BusinessMetrics> {
    let known_rewards: HashSet<RewardId> = rewards.iter().map(|r| r.id).collect();

    let mut tallies: HashMap<BusinessId, Tally> = HashMap::new();
    for view in views {
        if known_rewards.contains(&view.reward_id) {
            tallies.entry(view.business_id).or_default().record_view();
        }
    }
    for claim in claims {
        if known_rewards.contains(&claim.reward_id) {
            tallies
                .entry(claim.business_id)
                .or_default()
                .record_claim(claim);
        }
    }

    let mut reward_counts: HashMap<BusinessId, (i64, i64)> = HashMap::new();
    for reward in rewards {
        let counts = reward_counts.entry(reward.business_id).or_default();
        counts.0 += 1;
        if reward.is_active() {
            counts.1 += 1;
        }
    }

    businesses
        .iter()
        .map(|business| {
            let tally = tallies.get(&business.id).copied().unwrap_or_default();
            let (total_rewards, active_rewards) =
                reward_counts.get(&business.id).copied().unwrap_or((0, 0));
            BusinessMetrics {
                business_id: business.id,
                name: business.name.clone(),
                status: business.status,
                views: tally.views,
                claims: tally.claims,
                redeemed: tally.redeemed,
                conversion_rate: percentage(tally.claims, tally.views),
                redemption_rate: percentage(tally.redeemed, tally.claims),
                total_rewards,
                active_rewards,
                last_claimed_at: tally.last_claimed_at,
                last_redeemed_at: tally.last_redeemed_at,
            }
        })
        .collect()
}

/// One labeled count in a chart series
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    pub key: String,
    pub count: i64,
}

/// Daily/weekly/monthly chart series for one event stream
#[derive(Debug, Clone, Serialize)]
pub struct StreamSeries {
    pub by_day: Vec<SeriesPoint>,
    pub by_week: Vec<SeriesPoint>,
    pub by_month: Vec<SeriesPoint>,
}

fn count_into(buckets: &[Bucket], timestamps: &[DateTime<Utc>]) -> Vec<SeriesPoint> {
    buckets
        .iter()
        .map(|bucket| SeriesPoint {
            key: bucket.key.clone(),
            count: timestamps.iter().filter(|ts| bucket.contains(**ts)).count() as i64,
        })
        .collect()
}

/// Bucket a stream of timestamps into the trailing daily, weekly, and
/// monthly chart series. Series always span full history: the caller
/// passes unwindowed timestamps, business-scoped or not as the report
/// requires.
pub fn series(now: DateTime<Utc>, timestamps: &[DateTime<Utc>]) -> StreamSeries {
    let by_day = count_into(&daily_buckets(now), timestamps);
    let by_week = count_into(&weekly_buckets(now), timestamps);

    let mut month_counts: HashMap<String, i64> = HashMap::new();
    for ts in timestamps {
        *month_counts.entry(month_key(*ts)).or_default() += 1;
    }
    let by_month = monthly_keys(now)
        .into_iter()
        .map(|key| {
            let count = month_counts.get(&key).copied().unwrap_or(0);
            SeriesPoint { key, count }
        })
        .collect();

    StreamSeries {
        by_day,
        by_week,
        by_month,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{test_business, test_claim, test_reward, test_view};
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn percentage_of_zero_whole_is_zero() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(5, 0), 0);
    }

    #[test]
    fn percentage_rounds_half_away_from_zero() {
        assert_eq!(percentage(1, 2), 50);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        // 12.5% rounds up, not to even
        assert_eq!(percentage(1, 8), 13);
    }

    #[test]
    fn percentage_can_exceed_one_hundred() {
        // Pathological data: more claims than views
        assert_eq!(percentage(6, 4), 150);
    }

    #[test]
    fn totals_empty_streams_degrade_to_zero() {
        let t = totals(&[], &[]);
        assert_eq!(t.total_views, 0);
        assert_eq!(t.total_claims, 0);
        assert_eq!(t.total_redeemed, 0);
        assert_eq!(t.conversion_rate, 0);
        assert_eq!(t.redemption_rate, 0);
    }

    #[test]
    fn totals_ten_views_five_claims_two_redeemed() {
        let business = BusinessId::new();
        let reward = RewardId::new();
        let views: Vec<_> = (0..10)
            .map(|i| test_view(reward, business, now() - Duration::hours(i)))
            .collect();
        let claims: Vec<_> = (0..5)
            .map(|i| {
                let redeemed = if i < 2 { Some(now()) } else { None };
                test_claim(reward, business, now() - Duration::hours(i), redeemed)
            })
            .collect();

        let t = totals(&views, &claims);
        assert_eq!(t.total_views, 10);
        assert_eq!(t.total_claims, 5);
        assert_eq!(t.total_redeemed, 2);
        assert_eq!(t.conversion_rate, 50);
        assert_eq!(t.redemption_rate, 40);
    }

    #[test]
    fn redeemed_never_exceeds_claims() {
        let business = BusinessId::new();
        let reward = RewardId::new();
        let claims: Vec<_> = (0..7)
            .map(|i| test_claim(reward, business, now(), (i % 2 == 0).then(|| now())))
            .collect();
        let t = totals(&[], &claims);
        assert!(t.total_redeemed <= t.total_claims);
    }

    #[test]
    fn per_reward_includes_zero_event_rows() {
        let business = BusinessId::new();
        let quiet = test_reward(business, "Quiet", 0);
        let busy = test_reward(business, "Busy", 5);
        let views = vec![test_view(busy.id, business, now())];
        let claims = vec![test_claim(busy.id, business, now(), None)];

        let rows = per_reward(&[quiet.clone(), busy.clone()], &views, &claims);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].reward_id, quiet.id);
        assert_eq!(rows[0].views, 0);
        assert_eq!(rows[0].claims, 0);
        assert_eq!(rows[0].conversion_rate, 0);
        assert_eq!(rows[0].last_claimed_at, None);
        assert_eq!(rows[1].views, 1);
        assert_eq!(rows[1].claims, 1);
    }

    #[test]
    fn per_reward_tracks_last_claimed_and_redeemed() {
        let business = BusinessId::new();
        let reward = test_reward(business, "Coffee", 3);
        let older = now() - Duration::days(2);
        let newer = now() - Duration::days(1);
        let claims = vec![
            test_claim(reward.id, business, newer, None),
            test_claim(reward.id, business, older, Some(older + Duration::hours(4))),
        ];

        let rows = per_reward(&[reward], &[], &claims);
        assert_eq!(rows[0].last_claimed_at, Some(newer));
        assert_eq!(rows[0].last_redeemed_at, Some(older + Duration::hours(4)));
    }

    #[test]
    fn orphan_events_count_in_totals_but_not_breakdowns() {
        let business = BusinessId::new();
        let reward = test_reward(business, "Live", 1);
        let deleted_reward = RewardId::new();

        let views = vec![
            test_view(reward.id, business, now()),
            test_view(deleted_reward, business, now()),
        ];
        let claims = vec![test_claim(deleted_reward, business, now(), None)];

        let t = totals(&views, &claims);
        assert_eq!(t.total_views, 2);
        assert_eq!(t.total_claims, 1);

        let reward_rows = per_reward(&[reward.clone()], &views, &claims);
        assert_eq!(reward_rows.len(), 1);
        assert_eq!(reward_rows[0].views, 1);
        assert_eq!(reward_rows[0].claims, 0);

        let biz = test_business("Cafe");
        let biz_rows = per_business(
            &[Business {
                id: business,
                ..biz
            }],
            &[reward],
            &views,
            &claims,
        );
        assert_eq!(biz_rows[0].views, 1);
        assert_eq!(biz_rows[0].claims, 0);
    }

    #[test]
    fn per_business_counts_rewards_and_active_rewards() {
        let biz = test_business("Cafe");
        let active = test_reward(biz.id, "Active", 4);
        let exhausted = test_reward(biz.id, "Gone", 0);

        let rows = per_business(&[biz.clone()], &[active, exhausted], &[], &[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].total_rewards, 2);
        assert_eq!(rows[0].active_rewards, 1);
        assert_eq!(rows[0].views, 0);
    }

    #[test]
    fn zero_quantity_reward_appears_but_is_not_active() {
        let biz = test_business("Cafe");
        let exhausted = test_reward(biz.id, "Gone", 0);

        let reward_rows = per_reward(&[exhausted.clone()], &[], &[]);
        assert_eq!(reward_rows.len(), 1);
        assert_eq!(reward_rows[0].claims, 0);
        assert_eq!(reward_rows[0].quantity_remaining, 0);

        let biz_rows = per_business(&[biz], &[exhausted], &[], &[]);
        assert_eq!(biz_rows[0].total_rewards, 1);
        assert_eq!(biz_rows[0].active_rewards, 0);
    }

    #[test]
    fn series_counts_into_daily_and_monthly_buckets() {
        let timestamps = vec![
            now() - Duration::hours(1),          // today
            now() - Duration::days(1),           // yesterday
            now() - Duration::days(1),           // yesterday
            now() - Duration::days(40),          // previous month only
        ];
        let s = series(now(), &timestamps);

        assert_eq!(s.by_day.len(), 7);
        assert_eq!(s.by_day[6].key, "2025-03-15");
        assert_eq!(s.by_day[6].count, 1);
        assert_eq!(s.by_day[5].count, 2);
        assert_eq!(s.by_day.iter().map(|p| p.count).sum::<i64>(), 3);

        assert_eq!(s.by_week.len(), 8);
        assert_eq!(s.by_week[7].count, 3);

        assert_eq!(s.by_month.len(), 6);
        assert_eq!(s.by_month[5].key, "2025-03");
        assert_eq!(s.by_month[5].count, 3);
        assert_eq!(s.by_month[4].key, "2025-02");
        assert_eq!(s.by_month[4].count, 1);
    }

    #[test]
    fn series_of_empty_stream_is_all_zeros() {
        let s = series(now(), &[]);
        assert!(s.by_day.iter().all(|p| p.count == 0));
        assert!(s.by_week.iter().all(|p| p.count == 0));
        assert!(s.by_month.iter().all(|p| p.count == 0));
    }
}
