//! Shared plumbing for the two HTTP backends: transport-level error shape,
//! transient classification, retry loop, and normalization into
//! [`ServiceError`].

use common::observability::UPSTREAM_ERRORS_TOTAL;
use common::{ErrorCode, ServiceError};
use reqwest::StatusCode;
use thiserror::Error;

use super::retry::{retry_with_policy, RetryPolicy};

/// HTTP failure before normalization. Retry classification needs the raw
/// shape; callers never see it.
#[derive(Debug, Error)]
pub(crate) enum HttpCallError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("upstream returned {status}")]
    Status { status: StatusCode, body: String },
}

impl HttpCallError {
    /// Network-level failures and any 5xx retry; 4xx never does.
    pub(crate) fn is_transient(&self) -> bool {
        match self {
            HttpCallError::Transport(e) => e.is_connect() || e.is_timeout(),
            HttpCallError::Status { status, .. } => status.is_server_error(),
        }
    }
}

pub(crate) fn normalize(err: HttpCallError) -> ServiceError {
    match err {
        HttpCallError::Transport(e) if e.is_timeout() => ServiceError::timeout(e.to_string()),
        HttpCallError::Transport(e) => ServiceError::unavailable(e.to_string()),
        HttpCallError::Status { status, body } => {
            let detail = if body.trim().is_empty() {
                status.to_string()
            } else {
                format!("{status}: {body}")
            };
            let code = match status {
                StatusCode::BAD_REQUEST => ErrorCode::InvalidArgument,
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ErrorCode::Unauthorized,
                StatusCode::NOT_FOUND => ErrorCode::NotFound,
                s if s.is_server_error() => ErrorCode::Unavailable,
                _ => ErrorCode::Internal,
            };
            ServiceError::new(code, detail)
        }
    }
}

/// Run one logical request under the adapter's retry policy. `build` is
/// invoked once per attempt so each retry sends a fresh request.
pub(crate) async fn send_with_retry<B>(
    policy: &RetryPolicy,
    build: B,
) -> Result<reqwest::Response, ServiceError>
where
    B: Fn() -> reqwest::RequestBuilder,
{
    let result = retry_with_policy(
        policy,
        || {
            let req = build();
            async move {
                let resp = req.send().await.map_err(HttpCallError::from)?;
                let status = resp.status();
                if status.is_success() {
                    Ok(resp)
                } else {
                    let body = resp.text().await.unwrap_or_default();
                    Err(HttpCallError::Status { status, body })
                }
            }
        },
        HttpCallError::is_transient,
    )
    .await;

    result.map_err(|e| {
        UPSTREAM_ERRORS_TOTAL.inc();
        normalize(e)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_err(status: StatusCode) -> HttpCallError {
        HttpCallError::Status { status, body: String::new() }
    }

    #[test]
    fn server_errors_are_transient_client_errors_are_not() {
        assert!(status_err(StatusCode::SERVICE_UNAVAILABLE).is_transient());
        assert!(status_err(StatusCode::INTERNAL_SERVER_ERROR).is_transient());
        assert!(!status_err(StatusCode::NOT_FOUND).is_transient());
        assert!(!status_err(StatusCode::BAD_REQUEST).is_transient());
        assert!(!status_err(StatusCode::UNAUTHORIZED).is_transient());
    }

    #[test]
    fn statuses_normalize_to_transport_neutral_codes() {
        assert_eq!(normalize(status_err(StatusCode::BAD_REQUEST)).code, ErrorCode::InvalidArgument);
        assert_eq!(normalize(status_err(StatusCode::UNAUTHORIZED)).code, ErrorCode::Unauthorized);
        assert_eq!(normalize(status_err(StatusCode::NOT_FOUND)).code, ErrorCode::NotFound);
        assert_eq!(normalize(status_err(StatusCode::BAD_GATEWAY)).code, ErrorCode::Unavailable);
        assert_eq!(normalize(status_err(StatusCode::CONFLICT)).code, ErrorCode::Internal);
    }

    #[test]
    fn upstream_body_is_kept_for_the_server_side_log() {
        let err = HttpCallError::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
            body: "{\"error\":\"db down\"}".into(),
        };
        let normalized = normalize(err);
        assert!(normalized.message.contains("db down"));
    }
}
