//! Signed bearer token codec (HS256).

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use thiserror::Error;

use soletrack_core::{Brand, UserId};

use crate::{Claims, Role};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("token signature is invalid")]
    BadSignature,

    #[error("token is malformed")]
    Malformed,
}

/// Issues and verifies compact signed tokens carrying [`Claims`].
///
/// The signature is deterministic over claims + expiry; any mutation of the
/// encoded token invalidates it. Tokens are stateless: there is no revocation
/// list, so a verified, non-expired token is trusted for its whole claimed
/// validity window.
pub struct TokenCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl TokenCodec {
    pub fn new(secret: &[u8], ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Sign a prepared claim set into a compact token string.
    pub fn issue(&self, claims: &Claims) -> Result<String, TokenError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding)
            .map_err(|_| TokenError::Malformed)
    }

    /// Issue a token for an identity, valid for the configured TTL from now.
    pub fn issue_for(
        &self,
        sub: UserId,
        role: Role,
        brand: Option<Brand>,
    ) -> Result<String, TokenError> {
        let claims = Claims::new(sub, role, brand, Utc::now(), self.ttl);
        self.issue(&claims)
    }

    /// Verify signature and expiry, returning the embedded claims.
    ///
    /// Fails closed: every decode failure maps to a [`TokenError`], and the
    /// request boundary treats all of them identically (reject).
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 0;
        validation.required_spec_claims.clear();

        decode::<Claims>(token, &self.decoding, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
                jsonwebtoken::errors::ErrorKind::InvalidSignature => TokenError::BadSignature,
                _ => TokenError::Malformed,
            })
    }
}
