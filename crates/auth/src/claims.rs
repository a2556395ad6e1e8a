use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use soletrack_core::{Brand, UserId};

use crate::Role;

/// JWT claims model (transport-agnostic).
///
/// This is the full set of claims a token carries: the principal-equivalent
/// identity attributes plus the validity window. Timestamps are seconds since
/// epoch, per RFC 7519.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject: the authenticated user's id.
    pub sub: UserId,

    /// Role granted to the subject.
    pub role: Role,

    /// Brand scope; present iff the role is brand-scoped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<Brand>,

    /// Issued-at timestamp.
    pub iat: i64,

    /// Expiration timestamp.
    pub exp: i64,
}

impl Claims {
    /// Claims for `sub` valid for `ttl` starting at `now`.
    pub fn new(
        sub: UserId,
        role: Role,
        brand: Option<Brand>,
        now: DateTime<Utc>,
        ttl: Duration,
    ) -> Self {
        Self {
            sub,
            role,
            brand,
            iat: now.timestamp(),
            exp: (now + ttl).timestamp(),
        }
    }
}
