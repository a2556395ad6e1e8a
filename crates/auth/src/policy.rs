//! Brand-scoping policy for shoe CRUD.
//!
//! Pure decision functions combining the principal's role and brand identity.
//! No IO, no side effects; the HTTP layer maps every denial to 403.

use thiserror::Error;

use soletrack_core::Brand;

use crate::{Principal, Role};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("operation is outside the principal's brand")]
    BrandMismatch,

    /// A brand-scoped principal without a brand claim. Registration and admin
    /// updates keep this unrepresentable in stored users, so a token like
    /// this is inconsistent; fail closed.
    #[error("principal has no brand scope")]
    MissingBrand,
}

fn own_brand(principal: &Principal) -> Result<&Brand, PolicyError> {
    principal.brand.as_ref().ok_or(PolicyError::MissingBrand)
}

fn require_own_brand(principal: &Principal, brand: &Brand) -> Result<(), PolicyError> {
    match principal.role {
        Role::SuperAdmin => Ok(()),
        Role::BrandUser => {
            if own_brand(principal)? == brand {
                Ok(())
            } else {
                Err(PolicyError::BrandMismatch)
            }
        }
    }
}

/// Brand filter to apply to a List query.
///
/// `None` means no filter (all brands visible).
pub fn list_scope(principal: &Principal) -> Result<Option<&Brand>, PolicyError> {
    match principal.role {
        Role::SuperAdmin => Ok(None),
        Role::BrandUser => own_brand(principal).map(Some),
    }
}

/// Create: a brand-scoped principal may only create within its own brand.
pub fn authorize_create(principal: &Principal, target: &Brand) -> Result<(), PolicyError> {
    require_own_brand(principal, target)
}

/// Ownership check against an existing record's brand (update/delete).
///
/// Evaluated on the record's *current* brand, independent of any requested
/// change.
pub fn authorize_existing(principal: &Principal, current: &Brand) -> Result<(), PolicyError> {
    require_own_brand(principal, current)
}

/// A brand-scoped principal may not move a record to another brand.
pub fn authorize_brand_change(principal: &Principal, new_brand: &Brand) -> Result<(), PolicyError> {
    require_own_brand(principal, new_brand)
}
