//! Generic resource endpoints
//!
//! Each resource exposes the same five endpoints under its base path:
//!
//! | Method | Path            | Role  |
//! |--------|-----------------|-------|
//! | GET    | `{base}/all`    | user  |
//! | GET    | `{base}?key=`   | user  |
//! | POST   | `{base}/post`   | admin |
//! | PUT    | `{base}?key=`   | admin |
//! | DELETE | `{base}?key=`   | admin |

use axum::{
    extract::State,
    middleware::from_fn,
    routing::{get, post, put},
    Json, Router,
};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use validator::Validate;

use crate::{
    db::Entity,
    middleware::{require_admin, require_user},
    services::CrudService,
    utils::AppResult,
    AppState,
};

use super::extract::{RequestParams, ResourceKey, ValidatedJson};

/// An entity served over HTTP
pub trait Resource: Entity + Serialize + DeserializeOwned + Validate {
    /// Route prefix, e.g. `/api/helprequest`
    const BASE_PATH: &'static str;
    /// Query parameter carrying the key on get/update/delete
    const KEY_PARAM: &'static str;

    /// Fields accepted by the create endpoint
    type CreateParams: DeserializeOwned + Send + 'static;

    fn from_params(params: Self::CreateParams) -> Self;
}

/// Body returned by delete
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
}

/// Mount the five endpoints for `R`
///
/// Guards are attached per method so they reject before the key, the request
/// parameters, or the body are parsed.
pub fn routes<R: Resource>() -> Router<AppState> {
    let base = R::BASE_PATH;

    Router::new()
        .route(
            &format!("{base}/all"),
            get(list::<R>).route_layer(from_fn(require_user)),
        )
        .route(
            &format!("{base}/post"),
            post(create::<R>).route_layer(from_fn(require_admin)),
        )
        .route(
            base,
            get(get_by_key::<R>)
                .route_layer(from_fn(require_user))
                .merge(
                    put(update::<R>)
                        .delete(remove::<R>)
                        .route_layer(from_fn(require_admin)),
                ),
        )
}

/// List every record
async fn list<R: Resource>(State(state): State<AppState>) -> AppResult<Json<Vec<R>>> {
    let service = CrudService::<R, _>::for_pool(&state.db);
    Ok(Json(service.list().await?))
}

/// Get one record by key
async fn get_by_key<R: Resource>(
    State(state): State<AppState>,
    ResourceKey(id): ResourceKey<R>,
) -> AppResult<Json<R>> {
    let service = CrudService::<R, _>::for_pool(&state.db);
    Ok(Json(service.get(&id).await?))
}

/// Create a record from request parameters
async fn create<R: Resource>(
    State(state): State<AppState>,
    RequestParams(params): RequestParams<R::CreateParams>,
) -> AppResult<Json<R>> {
    let entity = R::from_params(params);
    entity.validate()?;

    let service = CrudService::<R, _>::for_pool(&state.db);
    Ok(Json(service.create(entity).await?))
}

/// Overwrite a record with the JSON body
async fn update<R: Resource>(
    State(state): State<AppState>,
    ResourceKey(id): ResourceKey<R>,
    ValidatedJson(incoming): ValidatedJson<R>,
) -> AppResult<Json<R>> {
    let service = CrudService::<R, _>::for_pool(&state.db);
    Ok(Json(service.update(&id, incoming).await?))
}

/// Delete a record by key
async fn remove<R: Resource>(
    State(state): State<AppState>,
    ResourceKey(id): ResourceKey<R>,
) -> AppResult<Json<DeleteResponse>> {
    let service = CrudService::<R, _>::for_pool(&state.db);
    let message = service.delete(&id).await?;
    Ok(Json(DeleteResponse { message }))
}
