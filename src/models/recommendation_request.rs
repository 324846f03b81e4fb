//! Recommendation request model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    db::repository::{Entity, SqliteQueryAs},
    utils::datetime,
};

/// A student's request for a letter of recommendation from a professor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub date_requested: NaiveDateTime,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

impl Entity for RecommendationRequest {
    type Key = i64;

    const TYPE_NAME: &'static str = "RecommendationRequest";
    const TABLE: &'static str = "recommendation_requests";
    const COLUMNS: &'static [&'static str] = &[
        "requester_email",
        "professor_email",
        "explanation",
        "date_requested",
        "date_needed",
        "done",
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn bind_columns<'q, O>(&'q self, query: SqliteQueryAs<'q, O>) -> SqliteQueryAs<'q, O> {
        query
            .bind(self.requester_email.as_str())
            .bind(self.professor_email.as_str())
            .bind(self.explanation.as_str())
            .bind(self.date_requested)
            .bind(self.date_needed)
            .bind(self.done)
    }

    fn overwrite_from(&mut self, incoming: Self) {
        self.requester_email = incoming.requester_email;
        self.professor_email = incoming.professor_email;
        self.explanation = incoming.explanation;
        self.date_requested = incoming.date_requested;
        self.date_needed = incoming.date_needed;
        self.done = incoming.done;
    }
}
