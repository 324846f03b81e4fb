//! Recommendation request endpoints (`/api/recommendationrequest`)

use axum::Router;
use chrono::NaiveDateTime;
use serde::Deserialize;

use crate::{models::RecommendationRequest, utils::datetime, AppState};

use super::resource::{self, Resource};

/// Create parameters for a recommendation request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRecommendationRequestParams {
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub date_requested: NaiveDateTime,
    #[serde(deserialize_with = "datetime::deserialize")]
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

impl Resource for RecommendationRequest {
    const BASE_PATH: &'static str = "/api/recommendationrequest";
    const KEY_PARAM: &'static str = "id";

    type CreateParams = CreateRecommendationRequestParams;

    fn from_params(params: CreateRecommendationRequestParams) -> Self {
        RecommendationRequest {
            id: None,
            requester_email: params.requester_email,
            professor_email: params.professor_email,
            explanation: params.explanation,
            date_requested: params.date_requested,
            date_needed: params.date_needed,
            done: params.done,
        }
    }
}

pub fn routes() -> Router<AppState> {
    resource::routes::<RecommendationRequest>()
}
