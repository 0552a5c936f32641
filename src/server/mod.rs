//! HTTP service.
//!
//! | Route | Behaviour |
//! |-------|-----------|
//! | `GET /` | health and solver configuration |
//! | `POST /solve` | configured strategy |
//! | `POST /solve-greedy` | greedy strategy |
//! | `POST /solve-sequential` | 501, not implemented |
//! | `POST /solve-cpsat` | 501, not implemented |
//!
//! Malformed request bodies answer 400 with the failure envelope.

mod config;
mod response;

pub use config::ServerConfig;
pub use response::{ApiEnvelope, ApiReply};

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::models::{local_timestamp, ENGINE_VERSION};
use crate::solver::{SolverSelector, SolverStrategy};

const ENDPOINTS: [&str; 5] = [
    "GET  /",
    "POST /solve",
    "POST /solve-greedy",
    "POST /solve-sequential",
    "POST /solve-cpsat",
];

/// Shared handler state.
#[derive(Debug, Clone, Copy)]
pub struct AppState {
    pub strategy: SolverStrategy,
}

impl AppState {
    pub fn new(strategy: SolverStrategy) -> Self {
        Self { strategy }
    }
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: String,
    pub solver_configuration: SolverConfiguration,
}

#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct SolverConfiguration {
    pub strategy: String,
    pub primary: String,
    pub fallback: Option<String>,
}

/// Builds the router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/solve", post(solve_configured))
        .route("/solve-greedy", post(solve_greedy))
        .route("/solve-sequential", post(solve_sequential))
        .route("/solve-cpsat", post(solve_cpsat))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    info!("Health check");
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: ENGINE_VERSION.to_string(),
        timestamp: local_timestamp(),
        solver_configuration: SolverConfiguration {
            strategy: state.strategy.key().to_string(),
            primary: state.strategy.label().to_string(),
            fallback: state.strategy.fallback().map(|s| s.display_name().to_string()),
        },
    })
}

async fn solve_configured(State(state): State<AppState>, body: String) -> ApiReply {
    run(state.strategy, &body)
}

async fn solve_greedy(body: String) -> ApiReply {
    run(SolverStrategy::Greedy, &body)
}

async fn solve_sequential(body: String) -> ApiReply {
    run(SolverStrategy::Sequential, &body)
}

async fn solve_cpsat(body: String) -> ApiReply {
    run(SolverStrategy::CpSat, &body)
}

fn run(strategy: SolverStrategy, body: &str) -> ApiReply {
    info!(solver = strategy.label(), "Solve request");
    match SolverSelector::new(strategy).solve_json(body) {
        Ok(response) if response.success => {
            if let Some(result) = response.result() {
                info!(
                    coverage_rate = result.coverage_rate,
                    fully_covered = result.is_fully_covered(),
                    locked = result.locked_count(),
                    solve_time_seconds = result.solve_time_seconds,
                    "Solve succeeded"
                );
            }
            ApiReply::ok(response)
        }
        Ok(response) => {
            let error = response
                .error
                .unwrap_or_else(|| format!("{} solver failed", strategy.display_name()));
            ApiReply::not_implemented(strategy, error)
        }
        Err(err) => {
            warn!(
                solver = strategy.label(),
                list = err.list(),
                error = %err,
                "Rejected malformed request"
            );
            ApiReply::bad_request(strategy, err.to_string())
        }
    }
}

async fn not_found(uri: Uri) -> impl IntoResponse {
    warn!(path = %uri.path(), "Endpoint not found");
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({
            "success": false,
            "error": format!("Endpoint not found: {}", uri.path()),
            "available_endpoints": ENDPOINTS,
        })),
    )
}
