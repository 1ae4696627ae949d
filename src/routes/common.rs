//! Common routes: health, readiness, version.

use crate::state::{AppState, Storage};
use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use serde::Serialize;

#[derive(Serialize)]
struct HealthBody {
    status: &'static str,
}

#[derive(Serialize)]
struct ReadyBody {
    status: &'static str,
    storage: &'static str,
}

async fn health() -> Json<HealthBody> {
    Json(HealthBody { status: "ok" })
}

async fn ready(State(state): State<AppState>) -> Result<Json<ReadyBody>, (StatusCode, Json<ReadyBody>)> {
    match &state.storage {
        Storage::Memory => Ok(Json(ReadyBody {
            status: "ok",
            storage: "memory",
        })),
        Storage::Postgres(pool) => {
            if sqlx::query("SELECT 1").fetch_optional(pool).await.is_err() {
                return Err((
                    StatusCode::SERVICE_UNAVAILABLE,
                    Json(ReadyBody {
                        status: "degraded",
                        storage: "unavailable",
                    }),
                ));
            }
            Ok(Json(ReadyBody {
                status: "ok",
                storage: "postgres",
            }))
        }
    }
}

async fn version() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Common routes including readiness against the configured storage.
pub fn common_routes_with_ready(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/ready", get(ready))
        .route("/version", get(version))
        .route("/info", get(version))
        .with_state(state)
}
