use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use models::HealthReport;
use tracing::info;

use crate::state::AppState;

/// Composite liveness: 200 only when every backend probe succeeds within
/// its bound, 503 otherwise, always with the full per-service report.
pub async fn check(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    info!("health check requested");
    let report = state.health.check().await;
    let status = if report.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };
    (status, Json(report))
}

pub async fn metrics() -> (StatusCode, String) {
    common::observability::encode_metrics()
}
