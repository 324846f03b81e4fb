//! Menu item review model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    db::repository::{Entity, SqliteQueryAs},
    utils::datetime,
};

/// A diner's star rating and comments on a dining commons menu item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemReview {
    #[serde(default)]
    pub id: Option<i64>,
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

impl Entity for MenuItemReview {
    type Key = i64;

    const TYPE_NAME: &'static str = "MenuItemReview";
    const TABLE: &'static str = "menu_item_reviews";
    const COLUMNS: &'static [&'static str] = &[
        "item_id",
        "reviewer_email",
        "stars",
        "date_reviewed",
        "comments",
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn bind_columns<'q, O>(&'q self, query: SqliteQueryAs<'q, O>) -> SqliteQueryAs<'q, O> {
        query
            .bind(self.item_id)
            .bind(self.reviewer_email.as_str())
            .bind(self.stars)
            .bind(self.date_reviewed)
            .bind(self.comments.as_str())
    }

    fn overwrite_from(&mut self, incoming: Self) {
        self.item_id = incoming.item_id;
        self.reviewer_email = incoming.reviewer_email;
        self.stars = incoming.stars;
        self.date_reviewed = incoming.date_reviewed;
        self.comments = incoming.comments;
    }
}
