//! `GET /health`: whether the catalog can serve produtos.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};
use produtos_db::SchemaStatus;
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// `ok` when the schema is current, otherwise `degraded`.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// `None` when the database could not be asked.
    pub schema: Option<SchemaStatus>,
}

/// Reports 503 while the database is unreachable, the `produtos` table is
/// missing, or embedded migrations are still pending.
async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let schema = match produtos_db::schema_status(&state.pool).await {
        Ok(schema) => Some(schema),
        Err(e) => {
            tracing::warn!(error = %e, "Schema status query failed");
            None
        }
    };
    let ready = schema.is_some_and(|s| s.is_ready());

    let (code, status) = if ready {
        (StatusCode::OK, "ok")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "degraded")
    };

    let body = HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        db_healthy: schema.is_some(),
        schema,
    };
    (code, Json(body))
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
