//! Perkdeck API Server
//!
//! Analytics read path for the Perkdeck loyalty platform: turns the raw
//! card view, claim, and redemption event streams into time-bucketed
//! metrics, conversion/redemption rates, and ranked leaderboards.
//! Uses hexagonal (ports & adapters) architecture for clean separation of
//! concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{routing::get, Json, Router};
use sea_orm::Database;
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod entity;
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::{
    PostgresBusinessRepository, PostgresCardViewRepository, PostgresRewardClaimRepository,
    PostgresRewardRepository,
};
use app::AnalyticsService;
use config::Config;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub analytics_service: Arc<
        AnalyticsService<
            PostgresCardViewRepository,
            PostgresRewardClaimRepository,
            PostgresRewardRepository,
            PostgresBusinessRepository,
        >,
    >,
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,perkdeck_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Perkdeck API...");

    // Load configuration
    let config = Config::from_env();

    // Connect to PostgreSQL
    tracing::info!("Connecting to database...");
    let db = Database::connect(&config.database_url)
        .await
        .expect("Failed to connect to database");
    tracing::info!("Database connected");

    // Create adapters
    let view_repo = Arc::new(PostgresCardViewRepository::new(db.clone()));
    let claim_repo = Arc::new(PostgresRewardClaimRepository::new(db.clone()));
    let reward_repo = Arc::new(PostgresRewardRepository::new(db.clone()));
    let business_repo = Arc::new(PostgresBusinessRepository::new(db.clone()));

    // Create the analytics service
    let analytics_service = Arc::new(AnalyticsService::new(
        view_repo,
        claim_repo,
        reward_repo,
        business_repo,
    ));

    let state = AppState { analytics_service };

    // Rate limiting config: 2 req/sec sustained, burst of 5.
    // Every report recomputes from scratch, so the read path is the
    // expensive one. Uses PeerIpKeyExtractor to get the client IP from
    // the socket connection.
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .expect("Failed to build governor config"),
    );

    // Report routes are rate limited per IP
    let report_routes = Router::new()
        .route(
            "/businesses/:id/analytics",
            get(handlers::get_business_analytics),
        )
        .route("/admin/analytics", get(handlers::get_admin_analytics))
        .layer(GovernorLayer {
            config: governor_config,
        });

    // Build router
    let app = Router::new()
        // Health check
        .route("/health", get(health))
        .merge(report_routes)
        // Middleware
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .unwrap();
}
