use core::str::FromStr;

use serde::{Deserialize, Serialize};

use soletrack_core::DomainError;

/// Closed set of roles used for RBAC.
///
/// Modeled as a sum type rather than an opaque string so an unknown role is
/// unrepresentable past the request boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular user scoped to a single brand.
    BrandUser,
    /// Cross-brand administrator.
    SuperAdmin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::BrandUser => "brand_user",
            Role::SuperAdmin => "super_admin",
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "brand_user" => Ok(Role::BrandUser),
            "super_admin" => Ok(Role::SuperAdmin),
            other => Err(DomainError::validation(format!("unknown role: {other}"))),
        }
    }
}
