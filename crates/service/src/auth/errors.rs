use thiserror::Error;

/// Why a bearer credential was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("authorization header required")]
    MissingHeader,
    #[error("malformed authorization header")]
    Malformed,
    #[error("invalid token")]
    InvalidSignature,
    #[error("token expired")]
    Expired,
}
