//! Middleware components
//!
//! This module contains middleware for:
//! - Identity (JWT bearer tokens)
//! - Role guards (user / admin)

pub mod auth;
pub mod roles;

pub use auth::{identity_middleware, Claims, CurrentUser};
pub use roles::{require_admin, require_user};
