//! Help request model

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    db::repository::{Entity, SqliteQueryAs},
    utils::datetime,
};

/// A student team's request for help during a lab section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct HelpRequest {
    /// Assigned by the store on first save
    #[serde(default)]
    pub id: Option<i64>,
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub request_time: NaiveDateTime,
    pub explanation: String,
    pub solved: bool,
}

impl Entity for HelpRequest {
    type Key = i64;

    const TYPE_NAME: &'static str = "HelpRequest";
    const TABLE: &'static str = "help_requests";
    const COLUMNS: &'static [&'static str] = &[
        "requester_email",
        "team_id",
        "table_or_breakout_room",
        "request_time",
        "explanation",
        "solved",
    ];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn bind_columns<'q, O>(&'q self, query: SqliteQueryAs<'q, O>) -> SqliteQueryAs<'q, O> {
        query
            .bind(self.requester_email.as_str())
            .bind(self.team_id.as_str())
            .bind(self.table_or_breakout_room.as_str())
            .bind(self.request_time)
            .bind(self.explanation.as_str())
            .bind(self.solved)
    }

    fn overwrite_from(&mut self, incoming: Self) {
        self.requester_email = incoming.requester_email;
        self.team_id = incoming.team_id;
        self.table_or_breakout_room = incoming.table_or_breakout_room;
        self.request_time = incoming.request_time;
        self.explanation = incoming.explanation;
        self.solved = incoming.solved;
    }
}
