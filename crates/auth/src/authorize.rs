use thiserror::Error;

use crate::{Principal, Role};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("role '{0}' is not allowed here")]
    RoleNotAllowed(Role),
}

/// Route-group authorization: allow the principal iff its role is in the
/// configured set.
///
/// - No IO
/// - No panics
/// - No business logic (pure policy check)
pub fn authorize_role(principal: &Principal, allowed: &[Role]) -> Result<(), AuthzError> {
    if allowed.contains(&principal.role) {
        Ok(())
    } else {
        Err(AuthzError::RoleNotAllowed(principal.role))
    }
}
