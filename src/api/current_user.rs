//! Signed-in user endpoint (`/api/currentUser`)

use axum::Json;

use crate::{
    middleware::CurrentUser,
    models::{Authority, CurrentUserResponse, UserProfile},
};

/// Profile and granted authorities of the caller
pub async fn current_user(user: CurrentUser) -> Json<CurrentUserResponse> {
    let roles = user
        .roles
        .iter()
        .map(|role| Authority {
            authority: role.authority().to_string(),
        })
        .collect();

    Json(CurrentUserResponse {
        user: UserProfile {
            email: user.email,
            name: user.name,
        },
        roles,
    })
}
