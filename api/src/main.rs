//! repoviz API Server
//!
//! Looks up a GitHub user's profile and repositories, aggregates star and
//! language statistics, and serves them to the repoviz front end.
//! Uses hexagonal (ports & adapters) architecture for clean separation of concerns.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{extract::State, routing::get, Json, Router};
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
mod error;
mod handlers;

#[cfg(test)]
mod test_utils;


use adapters::GitHubClientImpl;
use app::UserDataService;
use config::Config;
use domain::ports::GitHubClient;

/// Application state shared across all handlers
pub struct AppState<GC>
where
    GC: GitHubClient,
{
    pub user_data_service: Arc<UserDataService<GC>>,
    pub config: Config,
}

impl<GC> Clone for AppState<GC>
where
    GC: GitHubClient,
{
    fn clone(&self) -> Self {
        Self {
            user_data_service: self.user_data_service.clone(),
            config: self.config.clone(),
        }
    }
}

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    version: &'static str,
    /// Whether upstream calls carry a token (higher rate limit)
    authenticated: bool,
}

async fn health<GC>(State(state): State<AppState<GC>>) -> Json<HealthResponse>
where
    GC: GitHubClient + 'static,
{
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        authenticated: state.config.has_token(),
    })
}

/// Build the router for the given state (no rate limiting; see `main`)
pub fn router<GC>(state: AppState<GC>) -> Router
where
    GC: GitHubClient + 'static,
{
    Router::new()
        .route("/health", get(health::<GC>))
        .route("/api/github", get(handlers::get_user_data::<GC>))
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
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,repoviz_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting repoviz API...");

    // Load configuration
    let config = Config::from_env();
    if config.has_token() {
        tracing::info!("GitHub token found and being used");
    } else {
        tracing::warn!("No GitHub token found, using unauthenticated requests (60 requests/hour)");
    }

    // Create adapters
    let github_client = Arc::new(
        GitHubClientImpl::new(
            config.github_api_url.clone(),
            config.github_token.clone(),
            &config.user_agent,
        )
        .context("Failed to build GitHub client")?,
    );

    // Create application services
    let user_data_service = Arc::new(UserDataService::new(github_client));

    let state = AppState {
        user_data_service,
        config: config.clone(),
    };

    // Rate limiting config: 2 req/sec sustained, burst of 5
    // Every search spends two calls of the shared upstream quota
    let governor_config = Arc::new(
        GovernorConfigBuilder::default()
            .key_extractor(PeerIpKeyExtractor)
            .per_second(2)
            .burst_size(5)
            .finish()
            .context("Failed to build governor config")?,
    );

    let app = router(state).layer(GovernorLayer {
        config: governor_config,
    });

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await
    .context("Server error")?;

    Ok(())
}
