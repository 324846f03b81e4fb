//! Menu item review endpoints (`/api/menuitemreviews`)

use axum::Router;
use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::{models::MenuItemReview, utils::datetime, AppState};

use super::resource::{self, Resource};

/// Create parameters for a menu item review
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuItemReviewParams {
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

impl Resource for MenuItemReview {
    const BASE_PATH: &'static str = "/api/menuitemreviews";
    const KEY_PARAM: &'static str = "id";

    type CreateParams = CreateMenuItemReviewParams;

    fn from_params(params: CreateMenuItemReviewParams) -> Self {
        MenuItemReview {
            id: None,
            item_id: params.item_id,
            reviewer_email: params.reviewer_email,
            stars: params.stars,
            date_reviewed: params.date_reviewed,
            comments: params.comments,
        }
    }
}

pub fn routes() -> Router<AppState> {
    resource::routes::<MenuItemReview>()
}
