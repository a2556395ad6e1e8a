//! Authorization gate for route groups.
//!
//! Each guard is configured with a fixed allowed-role set and runs after the
//! authentication gate: the decision is pure and stateless, using only the
//! principal already attached to the request.

use axum::{middleware::Next, response::Response};

use soletrack_auth::{Role, authorize_role};

use crate::app::errors::ApiError;
use crate::context::PrincipalContext;

/// Restrict a route group to `super_admin` principals.
pub async fn require_super_admin(
    req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let principal = req
        .extensions()
        .get::<PrincipalContext>()
        .ok_or(ApiError::Unauthenticated)?;

    authorize_role(principal.principal(), &[Role::SuperAdmin])
        .map_err(|_| ApiError::Forbidden)?;

    Ok(next.run(req).await)
}
