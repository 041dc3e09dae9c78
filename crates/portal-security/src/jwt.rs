//! JWT token handling

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use portal_shared::constants::TOKEN_TYPE_ACCESS;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Token creation failed: {0}")]
    CreationError(String),
    #[error("Token validation failed: {0}")]
    ValidationError(String),
    #[error("Token expired")]
    TokenExpired,
}

/// Claims carried by a portal access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: String,
    /// Role tag as issued, e.g. `seller` or `hireUser`. Empty means no role.
    #[serde(default)]
    pub role: String,
    pub iat: i64,
    pub exp: i64,
    pub token_type: String,
}

impl AccessClaims {
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.exp, 0)
    }
}

pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry: i64,
    leeway: u64,
}

impl TokenService {
    pub fn new(secret: &str, access_token_expiry: i64, leeway: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_expiry,
            leeway,
        }
    }

    pub fn issue_access_token(&self, subject: &str, role: &str) -> Result<String, JwtError> {
        self.issue_with_expiry(subject, role, self.access_token_expiry)
    }

    /// Issues a token expiring `expiry` seconds from now. Negative values
    /// produce an already expired token.
    pub fn issue_with_expiry(
        &self,
        subject: &str,
        role: &str,
        expiry: i64,
    ) -> Result<String, JwtError> {
        let now = Utc::now();
        let claims = AccessClaims {
            sub: subject.to_string(),
            role: role.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(expiry)).timestamp(),
            token_type: TOKEN_TYPE_ACCESS.to_string(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| JwtError::CreationError(e.to_string()))
    }

    pub fn decode_access_token(&self, token: &str) -> Result<AccessClaims, JwtError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = self.leeway;

        let claims = decode::<AccessClaims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => JwtError::TokenExpired,
                _ => JwtError::ValidationError(e.to_string()),
            })?;

        if claims.token_type != TOKEN_TYPE_ACCESS {
            return Err(JwtError::ValidationError(format!(
                "unexpected token type: {}",
                claims.token_type
            )));
        }

        debug!("Decoded access token for subject {}", claims.sub);
        Ok(claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::new("unit-test-secret", 900, 0)
    }

    #[test]
    fn test_issue_and_decode() {
        let service = service();
        let token = service.issue_access_token("seller-42", "seller").unwrap();
        let claims = service.decode_access_token(&token).unwrap();
        assert_eq!(claims.sub, "seller-42");
        assert_eq!(claims.role, "seller");
        assert!(claims.expires_at().unwrap() > Utc::now());
    }

    #[test]
    fn test_expired_token_detected() {
        let service = service();
        let token = service.issue_with_expiry("seller-42", "seller", -120).unwrap();
        assert!(matches!(
            service.decode_access_token(&token),
            Err(JwtError::TokenExpired)
        ));
    }

    #[test]
    fn test_foreign_signature_rejected() {
        let other = TokenService::new("another-secret", 900, 0);
        let token = other.issue_access_token("admin-1", "admin").unwrap();
        assert!(matches!(
            service().decode_access_token(&token),
            Err(JwtError::ValidationError(_))
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            service().decode_access_token("not-a-token"),
            Err(JwtError::ValidationError(_))
        ));
    }
}
