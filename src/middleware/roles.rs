//! Role guards
//!
//! Attach with `route_layer` on individual method routes so that the guard
//! runs before any extractor parses query parameters or the request body:
//!
//! ```ignore
//! Router::new()
//!     .route("/api/helprequest/all", get(list).route_layer(from_fn(require_user)))
//! ```

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::debug;

use crate::{models::Role, utils::AppError};

use super::auth::CurrentUser;

/// Check that the request carries an authenticated caller holding `role`
pub fn authorize(request: &Request, role: Role) -> Result<(), AppError> {
    let user = request
        .extensions()
        .get::<CurrentUser>()
        .ok_or_else(|| AppError::forbidden("Authentication required"))?;

    if user.has_role(role) {
        Ok(())
    } else {
        debug!(
            email = %user.email,
            required = %role,
            path = %request.uri().path(),
            "Role check failed"
        );
        Err(AppError::forbidden(format!("{} required", role.authority())))
    }
}

/// Allow any signed-in user
pub async fn require_user(request: Request, next: Next) -> Result<Response, AppError> {
    authorize(&request, Role::User)?;
    Ok(next.run(request).await)
}

/// Allow administrators only
pub async fn require_admin(request: Request, next: Next) -> Result<Response, AppError> {
    authorize(&request, Role::Admin)?;
    Ok(next.run(request).await)
}
