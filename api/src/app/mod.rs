//! Application layer
//!
//! The analytics aggregation engine: window resolution, stream filtering,
//! metric aggregation, leaderboard ranking, and report assembly.

pub mod aggregate;
pub mod analytics_service;
pub mod filter;
pub mod rank;
pub mod time_window;

pub use aggregate::{BusinessMetrics, RewardMetrics, SeriesPoint, StreamSeries, Totals};
pub use analytics_service::{AnalyticsService, Report, ReportKind, ReportSeries};
pub use filter::BusinessScope;
pub use rank::{LeaderboardEntry, LEADERBOARD_LIMIT};
pub use time_window::{TimeRange, Window};
