//! Student organization endpoints (`/api/ucsborganizations`)
//!
//! Organizations are keyed by `orgCode` rather than a generated id.

use axum::Router;
use serde::Deserialize;

use crate::{models::UcsbOrganization, AppState};

use super::resource::{self, Resource};

/// Create parameters for an organization
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganizationParams {
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

impl Resource for UcsbOrganization {
    const BASE_PATH: &'static str = "/api/ucsborganizations";
    const KEY_PARAM: &'static str = "orgCode";

    type CreateParams = CreateOrganizationParams;

    fn from_params(params: CreateOrganizationParams) -> Self {
        UcsbOrganization {
            id: None,
            org_code: params.org_code,
            org_translation_short: params.org_translation_short,
            org_translation: params.org_translation,
            inactive: params.inactive,
        }
    }
}

pub fn routes() -> Router<AppState> {
    resource::routes::<UcsbOrganization>()
}
