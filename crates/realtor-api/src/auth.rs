//! Bearer-token authentication.
//!
//! Tokens are signed locally with HS256 and verified without a store
//! round trip; role checks happen afterwards in [`crate::roles`].

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

/// Fixed access-token lifetime.
pub const TOKEN_TTL_SECS: i64 = 2 * 60 * 60;

/// Identity claim embedded in an access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User's email, the identity this token asserts
    pub email: String,
    /// Display name carried through from sign-in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Issued at (unix seconds)
    pub iat: i64,
    /// Expiry (unix seconds)
    pub exp: i64,
}

/// HS256 signing and verification keys, derived once at startup.
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    pub fn from_secret(secret: &[u8]) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
        }
    }

    /// Issue a signed token for the given identity.
    pub fn issue(&self, email: &str, name: Option<&str>) -> Result<String, ApiError> {
        let now = Utc::now();
        let claims = Claims {
            email: email.to_string(),
            name: name.map(|s| s.to_string()),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(TOKEN_TTL_SECS)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding)
            .map_err(|e| ApiError::internal(format!("Failed to sign token: {}", e)))
    }

    /// Verify a presented token, checking signature and expiry.
    pub fn verify(&self, token: &str) -> Result<Claims, ApiError> {
        decode::<Claims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|_| ApiError::unauthorized("unauthorized access"))
    }
}

/// Authenticated identity extracted from the Authorization header.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
    pub name: Option<String>,
}

impl From<Claims> for AuthUser {
    fn from(claims: Claims) -> Self {
        Self {
            email: claims.email,
            name: claims.name,
        }
    }
}

/// Axum extractor: rejects with 401 on a missing, malformed, expired or
/// mis-signed bearer token. Pure gate, no store access.
#[axum::async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| ApiError::unauthorized("unauthorized access"))?;

        let token = auth_header
            .strip_prefix("Bearer ")
            .ok_or_else(|| ApiError::unauthorized("unauthorized access"))?;

        let claims = state.keys.verify(token)?;

        Ok(AuthUser::from(claims))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> TokenKeys {
        TokenKeys::from_secret(b"test-secret")
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let keys = keys();
        let token = keys.issue("a@x.com", Some("Ana")).unwrap();
        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.email, "a@x.com");
        assert_eq!(claims.name.as_deref(), Some("Ana"));
        assert!(claims.exp - claims.iat == TOKEN_TTL_SECS);
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let token = keys().issue("a@x.com", None).unwrap();
        let other = TokenKeys::from_secret(b"other-secret");
        assert!(matches!(
            other.verify(&token),
            Err(ApiError::Unauthorized(_))
        ));
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let keys = keys();
        let now = Utc::now();
        let claims = Claims {
            email: "a@x.com".to_string(),
            name: None,
            iat: (now - Duration::hours(3)).timestamp(),
            exp: (now - Duration::hours(1)).timestamp(),
        };
        let token = encode(&Header::default(), &claims, &keys.encoding).unwrap();
        assert!(matches!(keys.verify(&token), Err(ApiError::Unauthorized(_))));
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        assert!(matches!(
            keys().verify("not-a-jwt"),
            Err(ApiError::Unauthorized(_))
        ));
    }
}
