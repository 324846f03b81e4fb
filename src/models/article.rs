//! Article model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    db::repository::{Entity, SqliteQueryAs},
    utils::datetime,
};

/// A link to an article with a short explanation of why it is worth reading
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub email: String,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub date_added: NaiveDateTime,
}

impl Entity for Article {
    type Key = i64;

    const TYPE_NAME: &'static str = "Articles";
    const TABLE: &'static str = "articles";
    const COLUMNS: &'static [&'static str] = &["title", "url", "explanation", "email", "date_added"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn bind_columns<'q, O>(&'q self, query: SqliteQueryAs<'q, O>) -> SqliteQueryAs<'q, O> {
        query
            .bind(self.title.as_str())
            .bind(self.url.as_str())
            .bind(self.explanation.as_str())
            .bind(self.email.as_str())
            .bind(self.date_added)
    }

    fn overwrite_from(&mut self, incoming: Self) {
        self.title = incoming.title;
        self.url = incoming.url;
        self.explanation = incoming.explanation;
        self.email = incoming.email;
        self.date_added = incoming.date_added;
    }
}
