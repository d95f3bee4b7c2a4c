//! Hubz Analytics API Server
//!
//! Ranks portal attachments by the quality of their submissions.
//! Uses hexagonal (ports & adapters) architecture: the portal backend sits
//! behind the `PortalClient` port and the ranking itself is a pure function.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_governor::governor::GovernorConfigBuilder;
use tower_governor::key_extractor::PeerIpKeyExtractor;
use tower_governor::GovernorLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod auth;
mod config;
mod domain;
mod error;
mod handlers;
mod render;

#[cfg(test)]
mod test_utils;


use adapters::PortalClientImpl;
use app::LeaderboardService;
use config::Config;
use domain::ports::PortalClient;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub leaderboard_service: Arc<LeaderboardService<dyn PortalClient>>,
    pub portal: Arc<dyn PortalClient>,
}

impl AppState {
    pub fn new(portal: Arc<dyn PortalClient>) -> Self {
        Self {
            leaderboard_service: Arc::new(LeaderboardService::new(portal.clone())),
            portal,
        }
    }
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

/// Credential exchange; `main` puts the rate limiter in front of it
fn login_routes() -> Router<AppState> {
    Router::new().route("/auth/login", post(handlers::login))
}

/// Full application router. CORS and request tracing wrap every route,
/// including the login routes passed in.
fn api_routes(state: AppState, login_routes: Router<AppState>) -> Router {
    Router::new()
        // Health check (no auth)
        .route("/health", get(health))
        .merge(login_routes)
        // Protected routes
        .merge(
            Router::new()
                .route("/leaderboard", get(handlers::get_leaderboard))
                .layer(middleware::from_fn(auth::auth_middleware)),
        )
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,hubz_analytics=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Hubz Analytics API...");

    // Load configuration
    let config = Config::from_env();

    let portal = Arc::new(
        PortalClientImpl::new(config.portal_url.clone(), config.portal_timeout)
            .expect("Failed to build portal HTTP client"),
    );
    tracing::info!(portal_url = %config.portal_url, "Portal client ready");

    let state = AppState::new(portal);

    // Rate limiting for credential exchange, per peer IP
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_millisecond(config.login_replenish_ms())
            .burst_size(config.login_burst)
            .finish()
            .expect("Failed to build governor config"),
    );

    let app = api_routes(
        state,
        login_routes().layer(GovernorLayer {
            config: governor_config,
        }),
    );

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind listener");
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .expect("Server error");
}
