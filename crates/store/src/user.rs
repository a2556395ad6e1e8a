use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use soletrack_auth::Role;
use soletrack_core::{Brand, UserId};

/// Stored user record.
///
/// # Invariants
/// - `email` is unique within the store (enforced by the store, lowercased at
///   registration).
/// - A `BrandUser` always carries a brand; a `SuperAdmin` carries none.
/// - The credential digest never leaves the store layer in API responses;
///   serialize [`PublicUser`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: Role,
    pub brand: Option<Brand>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Public view of the user (credential excluded).
    pub fn public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            brand: self.brand.clone(),
            created_at: self.created_at,
        }
    }
}

/// User as exposed over the API: identity and authorization attributes only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PublicUser {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand: Option<Brand>,
    pub created_at: DateTime<Utc>,
}
