//! Request DTOs and small response helpers.
//!
//! Mutating DTOs use explicit `Option` fields so "not provided" and "provided
//! as zero/empty" are distinguishable; presence checks happen in handlers,
//! not in serde.

use serde::Deserialize;

use soletrack_store::PublicUser;

use crate::app::errors::ApiError;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub brand: Option<String>,
    pub role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateShoeRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub brand: Option<String>,
}

/// Partial update: an absent field keeps its stored value; a present field is
/// applied verbatim, including `0` and `""`.
#[derive(Debug, Deserialize)]
pub struct UpdateShoeRequest {
    pub name: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub brand: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateUserRequest {
    pub brand: Option<String>,
    pub role: Option<String>,
}

// -------------------------
// Helpers
// -------------------------

/// Presence check: a missing, empty or whitespace-only field is absent.
pub fn require(value: Option<String>, name: &'static str) -> Result<String, ApiError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ApiError::MissingField(name)),
    }
}

pub fn auth_response(user: PublicUser, token: String) -> serde_json::Value {
    serde_json::json!({
        "user": user,
        "token": token,
    })
}
