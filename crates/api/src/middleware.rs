//! Authentication gate.
//!
//! Mandatory on every route except registration, login and the health probe.

use axum::{extract::State, http::HeaderMap, middleware::Next, response::Response};

use crate::app::errors::ApiError;
use crate::context::{AppContext, PrincipalContext};

/// Verify the bearer token and attach the decoded principal to the request.
///
/// Expired, malformed and badly-signed tokens all map to the same 401 so the
/// response does not leak verification internals.
pub async fn auth_middleware(
    State(ctx): State<AppContext>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, ApiError> {
    let token = extract_bearer(req.headers())?;

    let claims = ctx.tokens.verify(token).map_err(|e| {
        tracing::debug!("token verification failed: {e}");
        ApiError::Unauthenticated
    })?;

    req.extensions_mut()
        .insert(PrincipalContext::new(claims.into()));

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, ApiError> {
    let header = headers
        .get(axum::http::header::AUTHORIZATION)
        .ok_or(ApiError::Unauthenticated)?;

    let header = header.to_str().map_err(|_| ApiError::Unauthenticated)?;

    let header = header
        .strip_prefix("Bearer ")
        .ok_or(ApiError::Unauthenticated)?;

    let token = header.trim();
    if token.is_empty() {
        return Err(ApiError::Unauthenticated);
    }

    Ok(token)
}
