use jsonwebtoken::{decode, errors::ErrorKind, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::errors::AuthError;

/// Verified identity attributes extracted from a signed token. Produced only
/// by [`TokenVerifier::verify`] and scoped to a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    /// Opaque user identifier the token was issued for.
    pub sub: String,
    #[serde(default)]
    pub roles: Vec<String>,
    pub exp: usize,
}

/// Verifies `Authorization: Bearer <token>` headers against the shared
/// HMAC-SHA512 signing secret.
pub struct TokenVerifier {
    key: DecodingKey,
    validation: Validation,
}

impl TokenVerifier {
    /// `secret` is the raw (already base64-decoded) signing key.
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS512);
        validation.leeway = 0;
        Self { key: DecodingKey::from_secret(secret), validation }
    }

    /// Verify a raw header value. The header must be exactly the two-part
    /// `Bearer <token>` shape; anything else is rejected before the
    /// signature is even looked at.
    pub fn verify(&self, header: Option<&str>) -> Result<Claims, AuthError> {
        let header = header.ok_or_else(|| {
            warn!("missing authorization header");
            AuthError::MissingHeader
        })?;

        let parts: Vec<&str> = header.split(' ').collect();
        if parts.len() != 2 || parts[0] != "Bearer" {
            warn!("malformed authorization header");
            return Err(AuthError::Malformed);
        }

        match decode::<Claims>(parts[1], &self.key, &self.validation) {
            Ok(data) => {
                debug!(sub = %data.claims.sub, "token verified");
                Ok(data.claims)
            }
            Err(e) if matches!(e.kind(), ErrorKind::ExpiredSignature) => Err(AuthError::Expired),
            Err(e) => {
                debug!(error = %e, "token verification failed");
                Err(AuthError::InvalidSignature)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const SECRET: &[u8] = b"test-signing-secret-with-plenty-of-bytes-for-hs512";

    fn mint(sub: &str, exp_offset_secs: i64, secret: &[u8], alg: Algorithm) -> String {
        let exp = (chrono::Utc::now().timestamp() + exp_offset_secs) as usize;
        let claims = Claims { sub: sub.into(), roles: vec!["ROLE_USER".into()], exp };
        encode(&Header::new(alg), &claims, &EncodingKey::from_secret(secret)).unwrap()
    }

    #[test]
    fn accepts_valid_bearer_token() {
        let verifier = TokenVerifier::new(SECRET);
        let token = mint("42", 3600, SECRET, Algorithm::HS512);
        let claims = verifier.verify(Some(&format!("Bearer {token}"))).unwrap();
        assert_eq!(claims.sub, "42");
        assert_eq!(claims.roles, vec!["ROLE_USER".to_string()]);
    }

    #[test]
    fn missing_header_rejected() {
        let verifier = TokenVerifier::new(SECRET);
        assert_eq!(verifier.verify(None), Err(AuthError::MissingHeader));
    }

    #[test]
    fn non_bearer_scheme_rejected() {
        let verifier = TokenVerifier::new(SECRET);
        let token = mint("42", 3600, SECRET, Algorithm::HS512);
        assert_eq!(
            verifier.verify(Some(&format!("Basic {token}"))),
            Err(AuthError::Malformed)
        );
    }

    #[test]
    fn one_part_and_three_part_headers_rejected() {
        let verifier = TokenVerifier::new(SECRET);
        assert_eq!(verifier.verify(Some("Bearer")), Err(AuthError::Malformed));
        assert_eq!(
            verifier.verify(Some("Bearer abc def")),
            Err(AuthError::Malformed)
        );
    }

    #[test]
    fn wrong_secret_rejected_as_invalid_signature() {
        let verifier = TokenVerifier::new(SECRET);
        let token = mint("42", 3600, b"some-other-secret", Algorithm::HS512);
        assert_eq!(
            verifier.verify(Some(&format!("Bearer {token}"))),
            Err(AuthError::InvalidSignature)
        );
    }

    #[test]
    fn wrong_algorithm_rejected_as_invalid_signature() {
        let verifier = TokenVerifier::new(SECRET);
        let token = mint("42", 3600, SECRET, Algorithm::HS256);
        assert_eq!(
            verifier.verify(Some(&format!("Bearer {token}"))),
            Err(AuthError::InvalidSignature)
        );
    }

    #[test]
    fn expired_token_rejected_as_expired() {
        let verifier = TokenVerifier::new(SECRET);
        let token = mint("42", -3600, SECRET, Algorithm::HS512);
        assert_eq!(
            verifier.verify(Some(&format!("Bearer {token}"))),
            Err(AuthError::Expired)
        );
    }
}
