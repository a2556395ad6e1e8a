//! Shoe CRUD, brand-scoped by the access policy.

use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::Utc;

use soletrack_auth::policy;
use soletrack_core::{Brand, ShoeId};
use soletrack_store::Shoe;

use crate::app::{dto, errors::ApiError};
use crate::context::{AppContext, PrincipalContext};

fn parse_shoe_id(raw: &str) -> Result<ShoeId, ApiError> {
    raw.parse::<ShoeId>().map_err(ApiError::from)
}

fn validate_price(price: f64) -> Result<f64, ApiError> {
    if price.is_finite() && price >= 0.0 {
        Ok(price)
    } else {
        Err(ApiError::Validation(
            "price must be a non-negative number".to_string(),
        ))
    }
}

pub async fn list_shoes(
    Extension(ctx): Extension<AppContext>,
    Extension(principal): Extension<PrincipalContext>,
) -> Result<impl IntoResponse, ApiError> {
    let scope = policy::list_scope(principal.principal())?;
    let shoes = ctx.shoes.list(scope)?;
    Ok(Json(shoes))
}

pub async fn create_shoe(
    Extension(ctx): Extension<AppContext>,
    Extension(principal): Extension<PrincipalContext>,
    Json(body): Json<dto::CreateShoeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let name = dto::require(body.name, "name")?;
    let brand = Brand::new(dto::require(body.brand, "brand")?)?;
    let price = validate_price(body.price.ok_or(ApiError::MissingField("price"))?)?;

    policy::authorize_create(principal.principal(), &brand)?;

    let shoe = ctx.shoes.insert(Shoe {
        id: ShoeId::new(),
        name,
        brand,
        price,
        description: body.description,
        created_at: Utc::now(),
    })?;

    Ok((StatusCode::CREATED, Json(shoe)))
}

pub async fn update_shoe(
    Extension(ctx): Extension<AppContext>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
    Json(body): Json<dto::UpdateShoeRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_shoe_id(&id)?;
    let mut shoe = ctx.shoes.find_by_id(id)?.ok_or(ApiError::NotFound)?;

    // Ownership is checked against the record's current brand, before any
    // requested change is considered.
    policy::authorize_existing(principal.principal(), &shoe.brand)?;

    if let Some(raw) = body.brand {
        let new_brand = Brand::new(raw)?;
        policy::authorize_brand_change(principal.principal(), &new_brand)?;
        shoe.brand = new_brand;
    }
    if let Some(name) = body.name {
        shoe.name = name;
    }
    if let Some(price) = body.price {
        shoe.price = validate_price(price)?;
    }
    if let Some(description) = body.description {
        shoe.description = Some(description);
    }

    let shoe = ctx.shoes.update(shoe)?;
    Ok(Json(shoe))
}

pub async fn delete_shoe(
    Extension(ctx): Extension<AppContext>,
    Extension(principal): Extension<PrincipalContext>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id = parse_shoe_id(&id)?;
    let shoe = ctx.shoes.find_by_id(id)?.ok_or(ApiError::NotFound)?;

    policy::authorize_existing(principal.principal(), &shoe.brand)?;

    ctx.shoes.delete(shoe.id)?;
    Ok(Json(serde_json::json!({ "message": "shoe deleted" })))
}
