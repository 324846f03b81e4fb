//! Request extractors
//!
//! Wrappers around axum's `Query`, `Form` and `Json` that turn every
//! rejection into a 400 [`AppError::BadRequest`] with the usual JSON body.

use std::collections::HashMap;

use axum::{
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{header::CONTENT_TYPE, request::Parts},
    Form, Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::utils::AppError;

use super::resource::Resource;

/// The record key of resource `R`, read from its key query parameter
/// (`?id=` or `?orgCode=`)
#[derive(Debug)]
pub struct ResourceKey<R: Resource>(pub R::Key);

impl<R, S> FromRequestParts<S> for ResourceKey<R>
where
    R: Resource,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map_err(|e| AppError::bad_request(e.body_text()))?;

        let raw = params.get(R::KEY_PARAM).ok_or_else(|| {
            AppError::bad_request(format!("Required parameter '{}' is missing", R::KEY_PARAM))
        })?;

        raw.parse::<R::Key>().map(ResourceKey).map_err(|_| {
            AppError::bad_request(format!(
                "Invalid value '{}' for parameter '{}'",
                raw,
                R::KEY_PARAM
            ))
        })
    }
}

/// Fields supplied as individual request parameters
///
/// Read from a url-encoded form body when the request carries one, from the
/// query string otherwise.
#[derive(Debug)]
pub struct RequestParams<T>(pub T);

impl<T, S> FromRequest<S> for RequestParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|e| AppError::bad_request(e.body_text()))?;
            Ok(RequestParams(value))
        } else {
            let Query(value) = Query::<T>::try_from_uri(req.uri())
                .map_err(|e| AppError::bad_request(e.body_text()))?;
            Ok(RequestParams(value))
        }
    }
}

/// JSON body that must deserialize completely and pass validation
#[derive(Debug)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::bad_request(e.body_text()))?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
