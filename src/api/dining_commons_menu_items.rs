//! Dining commons menu item endpoints (`/api/ucsbdiningcommonsmenuitem`)

use axum::Router;
use serde::Deserialize;

use crate::{models::UcsbDiningCommonMenuItem, AppState};

use super::resource::{self, Resource};

/// Create parameters for a dining commons menu item
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMenuItemParams {
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

impl Resource for UcsbDiningCommonMenuItem {
    const BASE_PATH: &'static str = "/api/ucsbdiningcommonsmenuitem";
    const KEY_PARAM: &'static str = "id";

    type CreateParams = CreateMenuItemParams;

    fn from_params(params: CreateMenuItemParams) -> Self {
        UcsbDiningCommonMenuItem {
            id: None,
            dining_commons_code: params.dining_commons_code,
            name: params.name,
            station: params.station,
        }
    }
}

pub fn routes() -> Router<AppState> {
    resource::routes::<UcsbDiningCommonMenuItem>()
}
