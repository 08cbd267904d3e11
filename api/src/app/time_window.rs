//! Time window resolution and chart bucketing
//!
//! Two independent jobs live here. `TimeRange::resolve` maps a symbolic
//! range plus "now" to the half-open `[start, now)` window used to filter
//! scalar totals. The bucket builders generate the fixed trailing series
//! used for charts (7 daily, 8 weekly, 6 monthly buckets); those always
//! span full history regardless of the active filter window.
//!
//! All reporting is in UTC.

use chrono::{DateTime, Datelike, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

/// Symbolic reporting range selected by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeRange {
    Day,
    Week,
    Month,
}

impl TimeRange {
    /// Parse a range string, falling back to `Month` for anything
    /// unrecognized. The leniency is deliberate: a bad `time_range` query
    /// parameter degrades to the widest window instead of failing.
    pub fn parse_lenient(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "day" => TimeRange::Day,
            "week" => TimeRange::Week,
            _ => TimeRange::Month,
        }
    }

    /// Resolve to a concrete half-open window `[start, now)`
    pub fn resolve(&self, now: DateTime<Utc>) -> Window {
        let start = match self {
            TimeRange::Day => midnight(now),
            TimeRange::Week => now - Duration::days(7),
            // Rolling 30 days, not calendar-month
            TimeRange::Month => now - Duration::days(30),
        };
        Window { start, end: now }
    }
}

impl std::fmt::Display for TimeRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeRange::Day => write!(f, "day"),
            TimeRange::Week => write!(f, "week"),
            TimeRange::Month => write!(f, "month"),
        }
    }
}

/// A half-open time interval `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Window {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Window {
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.start <= ts && ts < self.end
    }
}

/// One labeled chart bucket covering `[start, end)`
#[derive(Debug, Clone)]
pub struct Bucket {
    pub key: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Bucket {
    pub fn contains(&self, ts: DateTime<Utc>) -> bool {
        self.start <= ts && ts < self.end
    }
}

/// Start of the UTC calendar day containing `ts`
fn midnight(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Trailing 7 daily buckets, oldest first, newest covering today.
/// Keys are `YYYY-MM-DD`.
pub fn daily_buckets(now: DateTime<Utc>) -> Vec<Bucket> {
    (0..7)
        .rev()
        .map(|i| {
            let start = midnight(now - Duration::days(i));
            Bucket {
                key: start.format("%Y-%m-%d").to_string(),
                start,
                end: start + Duration::days(1),
            }
        })
        .collect()
}

/// Trailing 8 weekly buckets, oldest first. Week starts are aligned to the
/// current day-of-week (the newest bucket covers the 7 days ending today),
/// not to Monday. Keys are the bucket start date, `YYYY-MM-DD`.
pub fn weekly_buckets(now: DateTime<Utc>) -> Vec<Bucket> {
    let today_end = midnight(now) + Duration::days(1);
    (0..8)
        .rev()
        .map(|i| {
            let end = today_end - Duration::days(7 * i);
            let start = end - Duration::days(7);
            Bucket {
                key: start.format("%Y-%m-%d").to_string(),
                start,
                end,
            }
        })
        .collect()
}

/// Trailing 6 calendar-month keys, oldest first, including the current
/// month. Keys are `YYYY-MM`; counting matches events by formatting their
/// timestamp the same way.
pub fn monthly_keys(now: DateTime<Utc>) -> Vec<String> {
    let mut year = now.year();
    let mut month = now.month();
    let mut keys = Vec::with_capacity(6);
    for _ in 0..6 {
        keys.push(format!("{:04}-{:02}", year, month));
        if month == 1 {
            month = 12;
            year -= 1;
        } else {
            month -= 1;
        }
    }
    keys.reverse();
    keys
}

/// `YYYY-MM` key for a timestamp, matching `monthly_keys`
pub fn month_key(ts: DateTime<Utc>) -> String {
    format!("{:04}-{:02}", ts.year(), ts.month())
}
