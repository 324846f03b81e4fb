//! Shared utilities

pub mod datetime;
pub mod error;
pub mod validation;

pub use error::{AppError, AppResult, ErrorResponse};
