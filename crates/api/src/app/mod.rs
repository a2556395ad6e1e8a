//! HTTP API application wiring (Axum router + middleware).
//!
//! Layout:
//! - `routes/`: HTTP handlers (one file per domain area)
//! - `dto.rs`: request DTOs and JSON mapping helpers
//! - `errors.rs`: consistent error responses

use axum::{
    Extension, Router,
    http::{HeaderValue, Method, header},
    routing::{get, post, put},
};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::{authz, context::AppContext, middleware};

pub mod dto;
pub mod errors;
pub mod routes;

/// Build the full HTTP router (public entrypoint used by `main.rs` and the
/// black-box tests).
pub fn build_app(ctx: AppContext, cors_origins: &[String]) -> Router {
    // Open routes: registration, login, health probe.
    let open = Router::new()
        .route("/health", get(routes::system::health))
        .route("/api/auth/register", post(routes::auth::register))
        .route("/api/auth/login", post(routes::auth::login));

    // Shoe CRUD: any authenticated principal; brand scoping is applied per
    // operation by the policy layer, not by routing.
    let shoes = Router::new()
        .route("/api/shoes", get(routes::shoes::list_shoes))
        .route("/api/shoes/create", post(routes::shoes::create_shoe))
        .route(
            "/api/shoes/:id",
            put(routes::shoes::update_shoe).delete(routes::shoes::delete_shoe),
        );

    // User management: super_admin only.
    let users = Router::new()
        .route("/api/users", get(routes::users::list_users))
        .route(
            "/api/users/:id",
            put(routes::users::update_user).delete(routes::users::delete_user),
        )
        .layer(axum::middleware::from_fn(authz::require_super_admin));

    let protected = shoes
        .merge(users)
        .layer(axum::middleware::from_fn_with_state(
            ctx.clone(),
            middleware::auth_middleware,
        ));

    Router::new()
        .merge(open)
        .merge(protected)
        .fallback(routes::system::not_found)
        .layer(Extension(ctx))
        .layer(cors_layer(cors_origins))
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    if origins.is_empty() {
        // Dev default: no allow-list configured.
        layer.allow_origin(Any)
    } else {
        let list: Vec<HeaderValue> = origins.iter().filter_map(|o| o.parse().ok()).collect();
        layer.allow_origin(AllowOrigin::list(list))
    }
}
