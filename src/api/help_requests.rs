//! Help request endpoints (`/api/helprequest`)

use axum::Router;
use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::{models::HelpRequest, utils::datetime, AppState};

use super::resource::{self, Resource};

/// Create parameters for a help request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHelpRequestParams {
    pub requester_email: String,
    pub team_id: String,
    pub table_or_breakout_room: String,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub request_time: NaiveDateTime,
    pub explanation: String,
    pub solved: bool,
}

impl Resource for HelpRequest {
    const BASE_PATH: &'static str = "/api/helprequest";
    const KEY_PARAM: &'static str = "id";

    type CreateParams = CreateHelpRequestParams;

    fn from_params(params: CreateHelpRequestParams) -> Self {
        HelpRequest {
            id: None,
            requester_email: params.requester_email,
            team_id: params.team_id,
            table_or_breakout_room: params.table_or_breakout_room,
            request_time: params.request_time,
            explanation: params.explanation,
            solved: params.solved,
        }
    }
}

pub fn routes() -> Router<AppState> {
    resource::routes::<HelpRequest>()
}
