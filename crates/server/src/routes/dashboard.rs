use axum::extract::{Path, State};
use axum::http::header::AUTHORIZATION;
use axum::http::HeaderMap;
use axum::{Extension, Json};
use models::DashboardView;
use service::auth::Claims;
use tracing::info;

use crate::errors::ApiError;
use crate::state::AppState;

/// The one route whose authorization goes beyond authentication: the
/// requested user must be the token subject. The caller's bearer header is
/// forwarded to the user-scoped backend reads.
pub async fn get(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Extension(claims): Extension<Claims>,
    headers: HeaderMap,
) -> Result<Json<DashboardView>, ApiError> {
    info!(%user_id, token_user_id = %claims.sub, "fetching dashboard data");
    let bearer = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();
    let view = state.dashboard.get_dashboard(&user_id, &claims, bearer).await?;
    Ok(Json(view))
}
