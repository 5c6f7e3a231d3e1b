use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::{ErrorCode, ServiceError};
use models::ModelError;
use service::aggregate::DashboardError;
use service::auth::AuthError;
use tracing::{error, warn};
use uuid::Uuid;

/// Error surface shared by every handler. The raw upstream detail never
/// reaches the caller; it is logged under a correlation id that the caller
/// gets back instead.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    correlation_id: Uuid,
}

impl ApiError {
    fn new(status: StatusCode, message: impl Into<String>, detail: impl std::fmt::Display) -> Self {
        let correlation_id = Uuid::new_v4();
        error!(%correlation_id, status = %status, detail = %detail, "request failed");
        Self { status, message: message.into(), correlation_id }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "error": self.message,
            "correlationId": self.correlation_id,
        });
        (self.status, Json(body)).into_response()
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        let (status, message) = match err.code {
            ErrorCode::NotFound => (StatusCode::NOT_FOUND, "resource not found"),
            ErrorCode::InvalidArgument => (StatusCode::BAD_REQUEST, "invalid request"),
            ErrorCode::Unauthorized => (StatusCode::UNAUTHORIZED, "authentication failed"),
            ErrorCode::Unavailable | ErrorCode::Timeout => {
                (StatusCode::BAD_GATEWAY, "upstream service unavailable")
            }
            ErrorCode::Internal => (StatusCode::INTERNAL_SERVER_ERROR, "internal server error"),
        };
        ApiError::new(status, message, &err)
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        let status = match err {
            AuthError::MissingHeader | AuthError::Malformed => StatusCode::UNAUTHORIZED,
            AuthError::InvalidSignature | AuthError::Expired => StatusCode::FORBIDDEN,
        };
        warn!(%status, error = %err, "authentication rejected");
        // Auth failures carry no upstream detail worth hiding.
        Self {
            status,
            message: err.to_string(),
            correlation_id: Uuid::new_v4(),
        }
    }
}

impl From<DashboardError> for ApiError {
    fn from(err: DashboardError) -> Self {
        match err {
            DashboardError::Forbidden => {
                warn!("dashboard access denied");
                Self {
                    status: StatusCode::FORBIDDEN,
                    message: "access denied".into(),
                    correlation_id: Uuid::new_v4(),
                }
            }
            DashboardError::Upstream(e) => e.into(),
        }
    }
}

impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        // Gateway-side validation messages are ours, not upstream text; echo
        // them so callers learn what was missing.
        let ModelError::Validation(message) = err;
        warn!(%message, "request validation failed");
        Self {
            status: StatusCode::BAD_REQUEST,
            message,
            correlation_id: Uuid::new_v4(),
        }
    }
}
