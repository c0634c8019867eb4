use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::config::AppConfig;
use crate::error::ApiError;

/// The identity embedded in every issued token. This service gates access on
/// token validity alone; the claim is a fixed constant, not tied to any user.
pub const TOKEN_IDENTITY: &str = "some_identity";

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: i64,
    pub iat: i64,
}

impl Claims {
    pub fn new(identity: String, ttl_hours: i64) -> Self {
        let now = Utc::now();
        Self {
            sub: identity,
            exp: (now + Duration::hours(ttl_hours)).timestamp(),
            iat: now.timestamp(),
        }
    }
}

/// Sign a bearer token carrying the fixed identity claim.
///
/// Never fails under normal operation; an empty secret or encoder failure
/// surfaces as an internal error.
pub fn issue(config: &AppConfig) -> Result<String, ApiError> {
    if config.jwt_secret.is_empty() {
        return Err(ApiError::internal("JWT secret not configured"));
    }

    let claims = Claims::new(TOKEN_IDENTITY.to_string(), config.token_ttl_hours);
    let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());

    encode(&Header::default(), &claims, &encoding_key)
        .map_err(|e| ApiError::internal(format!("JWT generation error: {}", e)))
}

/// Validate a bearer token and return its claims.
///
/// Rejects malformed, expired, and foreign-signed tokens with `Unauthorized`.
/// `Validation::default()` checks the signature and the `exp` claim.
pub fn verify(config: &AppConfig, token: &str) -> Result<Claims, ApiError> {
    if config.jwt_secret.is_empty() {
        return Err(ApiError::internal("JWT secret not configured"));
    }

    let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

    decode::<Claims>(token, &decoding_key, &Validation::default())
        .map(|data| data.claims)
        .map_err(|e| ApiError::unauthorized(format!("Invalid token: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config(secret: &str) -> AppConfig {
        AppConfig {
            database_url: "sqlite::memory:".to_string(),
            jwt_secret: secret.to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            token_ttl_hours: 1,
        }
    }

    #[test]
    fn issue_then_verify_roundtrip() {
        let config = test_config("test-secret");
        let token = issue(&config).expect("token issued");
        let claims = verify(&config, &token).expect("token verified");
        assert_eq!(claims.sub, TOKEN_IDENTITY);
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn foreign_signed_token_is_rejected() {
        let issuer = test_config("secret-a");
        let verifier = test_config("secret-b");
        let token = issue(&issuer).expect("token issued");
        assert!(matches!(verify(&verifier, &token), Err(ApiError::Unauthorized(_))));
    }

    #[test]
    fn garbage_token_is_rejected() {
        let config = test_config("test-secret");
        assert!(matches!(verify(&config, "not-a-jwt"), Err(ApiError::Unauthorized(_))));
    }

    #[test]
    fn expired_token_is_rejected() {
        let config = test_config("test-secret");
        let now = Utc::now();
        let claims = Claims {
            sub: TOKEN_IDENTITY.to_string(),
            exp: (now - Duration::hours(2)).timestamp(),
            iat: (now - Duration::hours(3)).timestamp(),
        };
        let key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let token = encode(&Header::default(), &claims, &key).expect("encode");
        assert!(matches!(verify(&config, &token), Err(ApiError::Unauthorized(_))));
    }

    #[test]
    fn empty_secret_is_an_internal_error() {
        let config = test_config("");
        assert!(matches!(issue(&config), Err(ApiError::Internal(_))));
    }
}
