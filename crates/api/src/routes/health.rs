//! Liveness endpoint. Mounted at the root, outside `/api`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Body of `GET /health`.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the store answers, `degraded` otherwise.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
}

impl HealthResponse {
    fn from_ping(ping: Result<(), sqlx::Error>) -> Self {
        let db_healthy = match ping {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Store ping failed");
                false
            }
        };
        Self {
            status: if db_healthy { "ok" } else { "degraded" },
            version: env!("CARGO_PKG_VERSION"),
            db_healthy,
        }
    }
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::from_ping(state.chatbots.ping().await))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
