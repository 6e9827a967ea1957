//! Liveness endpoint, mounted at the root rather than under `/filmes`.

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

#[derive(Serialize)]
struct Health {
    status: &'static str,
    version: &'static str,
    db_healthy: bool,
}

/// GET /health
///
/// Always answers 200; an unreachable database reports `status:
/// "degraded"` with `db_healthy: false` instead of an error response.
async fn health(State(state): State<AppState>) -> Json<Health> {
    let db_healthy = filmes_db::health_check(&state.pool).await.is_ok();

    Json(Health {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
    })
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
