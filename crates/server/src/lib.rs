//! REST API for skeletonify.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use skeletonify_core::config::{ConfigError, PartialConfig, SkeletonConfig, SkeletonProvider};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Shared server state.
pub struct AppState {
    provider: SkeletonProvider,
    config: ServerConfig,
}

/// Server configuration.
pub struct ServerConfig {
    pub port: u16,
    /// Overrides applied to every request before the request's own.
    pub defaults: PartialConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3848,
            defaults: PartialConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Read `SKELETONIFY_PORT` and `SKELETONIFY_CONFIG` from the environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Ok(raw) = std::env::var("SKELETONIFY_PORT") {
            match raw.trim().parse() {
                Ok(port) => config.port = port,
                Err(e) => tracing::warn!(
                    value = %raw,
                    error = %e,
                    default = config.port,
                    "ignoring invalid SKELETONIFY_PORT"
                ),
            }
        }
        if let Ok(path) = std::env::var("SKELETONIFY_CONFIG") {
            config.defaults = PartialConfig::load(std::path::Path::new(&path))?;
        }
        Ok(config)
    }
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            provider: SkeletonProvider::new(&config.defaults),
            config,
        }
    }

    pub fn port(&self) -> u16 {
        self.config.port
    }
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SkeletonizeParams {
    pub html: String,
    #[serde(default = "default_loading")]
    pub loading: bool,
    /// Treat `html` as a full document.
    #[serde(default)]
    pub document: bool,
    #[serde(default)]
    pub config: Option<PartialConfig>,
}

fn default_loading() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct SkeletonizeResponse {
    pub html: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

fn map_config_error(e: ConfigError) -> (StatusCode, Json<ErrorResponse>) {
    let status = match &e {
        ConfigError::Io { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        ConfigError::Json(_)
        | ConfigError::Toml(_)
        | ConfigError::UnsupportedFormat(_)
        | ConfigError::InvalidAnimationSpeed(_) => StatusCode::BAD_REQUEST,
    };
    (
        status,
        Json(ErrorResponse {
            error: e.to_string(),
        }),
    )
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the axum router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/config", get(get_config))
        .route("/api/skeletonize", post(skeletonize))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn health() -> &'static str {
    "ok"
}

/// GET /api/config
async fn get_config(State(state): State<Arc<AppState>>) -> Json<SkeletonConfig> {
    Json(state.provider.config().clone())
}

/// POST /api/skeletonize  { html, loading?, document?, config? }
async fn skeletonize(
    State(state): State<Arc<AppState>>,
    Json(params): Json<SkeletonizeParams>,
) -> axum::response::Response {
    let overrides = params.config.unwrap_or_default();
    if let Err(e) = overrides.validate() {
        return map_config_error(e).into_response();
    }
    let config = state.provider.nested(&overrides);

    tracing::debug!(
        bytes = params.html.len(),
        loading = params.loading,
        document = params.document,
        "skeletonize request"
    );

    let html = if params.document {
        skeletonify_core::skeletonize_document(&params.html, config.config(), params.loading)
    } else {
        skeletonify_core::skeletonize_html(&params.html, config.config(), params.loading)
    };
    Json(SkeletonizeResponse { html }).into_response()
}
