//! API routes and handlers
//!
//! This module defines all API endpoints and their routing.

use axum::{
    http::Uri,
    middleware::{from_fn, from_fn_with_state},
    routing::get,
    Router,
};

use crate::{
    middleware::{identity_middleware, require_user},
    utils::AppError,
    AppState,
};

mod articles;
mod current_user;
mod dining_commons_menu_items;
pub mod extract;
mod health;
mod help_requests;
mod menu_item_reviews;
mod organizations;
mod recommendation_requests;
pub mod resource;
mod system_info;

pub use health::*;
pub use resource::{DeleteResponse, Resource};
pub use system_info::SystemInfo;

/// Every API route with identity resolution applied
///
/// Shared by the server binary and the test harness; transport layers
/// (CORS, tracing, compression) are added by the caller.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(public_routes())
        .merge(resource_routes())
        .route(
            "/api/currentUser",
            get(current_user::current_user).route_layer(from_fn(require_user)),
        )
        .fallback(fallback)
        .layer(from_fn_with_state(state.clone(), identity_middleware))
        .with_state(state)
}

/// Public API routes (no authentication required)
fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/api/health", get(health::health_check))
        .route("/api/health/detailed", get(health::health_check_detailed))
        .route("/api/systemInfo", get(system_info::system_info))
}

/// CRUD resources, each guarded per method
fn resource_routes() -> Router<AppState> {
    Router::new()
        .merge(help_requests::routes())
        .merge(menu_item_reviews::routes())
        .merge(dining_commons_menu_items::routes())
        .merge(organizations::routes())
        .merge(articles::routes())
        .merge(recommendation_requests::routes())
}

async fn fallback(uri: Uri) -> AppError {
    AppError::not_found(uri.path().to_string())
}
