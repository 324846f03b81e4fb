//! Article endpoints (`/api/articles`)

use axum::Router;
use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::{models::Article, utils::datetime, AppState};

use super::resource::{self, Resource};

/// Create parameters for an article
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateArticleParams {
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub email: String,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub date_added: NaiveDateTime,
}

impl Resource for Article {
    const BASE_PATH: &'static str = "/api/articles";
    const KEY_PARAM: &'static str = "id";

    type CreateParams = CreateArticleParams;

    fn from_params(params: CreateArticleParams) -> Self {
        Article {
            id: None,
            title: params.title,
            url: params.url,
            explanation: params.explanation,
            email: params.email,
            date_added: params.date_added,
        }
    }
}

pub fn routes() -> Router<AppState> {
    resource::routes::<Article>()
}
