//! Registration/login flow.

use axum::{Json, extract::Extension, http::StatusCode, response::IntoResponse};
use chrono::Utc;

use soletrack_auth::{Role, hash_password, verify_password};
use soletrack_core::{Brand, UserId};
use soletrack_store::User;

use crate::app::{dto, errors::ApiError};
use crate::context::AppContext;

pub async fn register(
    Extension(ctx): Extension<AppContext>,
    Json(body): Json<dto::RegisterRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let name = dto::require(body.name, "name")?;
    let email = dto::require(body.email, "email")?.to_lowercase();
    let password = dto::require(body.password, "password")?;

    let role = match body.role.as_deref() {
        None => Role::BrandUser,
        Some(raw) => raw.parse::<Role>()?,
    };

    let brand = match role {
        Role::BrandUser => {
            let raw = dto::require(body.brand, "brand")?;
            Some(Brand::new(raw)?)
        }
        // A super admin is not brand-scoped; any supplied brand is ignored.
        Role::SuperAdmin => None,
    };

    if ctx.users.find_by_email(&email)?.is_some() {
        return Err(ApiError::DuplicateEmail);
    }

    let password_hash = hash_password(&password).map_err(|e| ApiError::Internal(e.to_string()))?;

    let user = ctx.users.create(User {
        id: UserId::new(),
        name,
        email,
        password_hash,
        role,
        brand,
        created_at: Utc::now(),
    })?;

    let token = ctx
        .tokens
        .issue_for(user.id, user.role, user.brand.clone())
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    tracing::info!(user_id = %user.id, role = %user.role, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(dto::auth_response(user.public(), token)),
    ))
}

pub async fn login(
    Extension(ctx): Extension<AppContext>,
    Json(body): Json<dto::LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let email = dto::require(body.email, "email")?.to_lowercase();
    let password = dto::require(body.password, "password")?;

    // Unknown email and wrong password collapse into one generic error so the
    // endpoint cannot be used to enumerate accounts.
    let user = ctx
        .users
        .find_by_email(&email)?
        .ok_or(ApiError::InvalidCredentials)?;

    if !verify_password(&password, &user.password_hash) {
        return Err(ApiError::InvalidCredentials);
    }

    let token = ctx
        .tokens
        .issue_for(user.id, user.role, user.brand.clone())
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok(Json(dto::auth_response(user.public(), token)))
}
