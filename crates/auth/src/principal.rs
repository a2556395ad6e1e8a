use soletrack_core::{Brand, UserId};

use crate::{Claims, Role};

/// The authenticated identity attached to a request after token verification.
///
/// Derived, never persisted; lifetime = one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Principal {
    pub user_id: UserId,
    pub role: Role,
    /// Brand scope for brand-scoped roles; a super admin carries none.
    pub brand: Option<Brand>,
}

impl Principal {
    pub fn is_super_admin(&self) -> bool {
        self.role == Role::SuperAdmin
    }
}

impl From<Claims> for Principal {
    fn from(claims: Claims) -> Self {
        Self {
            user_id: claims.sub,
            role: claims.role,
            brand: claims.brand,
        }
    }
}
