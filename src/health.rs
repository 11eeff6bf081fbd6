use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;
use tracing::warn;

use crate::state::AppState;

#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: &'static str,
    pub database: &'static str,
}

/// 200 when the database answers a trivial query, 503 otherwise.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    match state.employees.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthStatus {
                status: "healthy",
                database: "connected",
            }),
        ),
        Err(e) => {
            warn!(error = %e, "health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthStatus {
                    status: "unhealthy",
                    database: "disconnected",
                }),
            )
        }
    }
}
