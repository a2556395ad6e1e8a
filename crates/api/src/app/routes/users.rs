//! User management. The whole group sits behind the super-admin guard.

use axum::{
    Json,
    extract::{Extension, Path},
    response::IntoResponse,
};

use soletrack_auth::Role;
use soletrack_core::{Brand, UserId};
use soletrack_store::PublicUser;

use crate::app::{dto, errors::ApiError};
use crate::context::AppContext;

pub async fn list_users(
    Extension(ctx): Extension<AppContext>,
) -> Result<impl IntoResponse, ApiError> {
    let users: Vec<PublicUser> = ctx.users.list_all()?.iter().map(|u| u.public()).collect();
    Ok(Json(users))
}

pub async fn update_user(
    Extension(ctx): Extension<AppContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = id.parse::<UserId>()?;
    let mut user = ctx.users.find_by_id(id)?.ok_or(ApiError::NotFound)?;

    if let Some(raw) = body.role {
        user.role = raw.parse::<Role>()?;
    }
    if let Some(raw) = body.brand {
        user.brand = Some(Brand::new(raw)?);
    }

    match user.role {
        // Invariant: a brand-scoped user always carries a brand.
        Role::BrandUser if user.brand.is_none() => {
            return Err(ApiError::MissingField("brand"));
        }
        // A super admin's brand is irrelevant; keep it unset.
        Role::SuperAdmin => user.brand = None,
        Role::BrandUser => {}
    }

    let user = ctx.users.save(user)?;
    Ok(Json(user.public()))
}

pub async fn delete_user(
    Extension(ctx): Extension<AppContext>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = id.parse::<UserId>()?;
    let user = ctx.users.find_by_id(id)?.ok_or(ApiError::NotFound)?;

    ctx.users.delete(user.id)?;

    tracing::info!(user_id = %user.id, "user deleted by administrator");
    Ok(Json(serde_json::json!({ "message": "user deleted" })))
}
