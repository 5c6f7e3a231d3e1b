use axum::extract::{Request, State};
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;

use crate::errors::ApiError;
use crate::state::AppState;

/// Route layer for the protected surface: verifies the bearer credential
/// and attaches the resulting claims to the request for downstream handlers.
/// Rejections happen here, before any handler or backend call runs.
pub async fn require_bearer(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let header = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok());
    let claims = state.verifier.verify(header)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}
