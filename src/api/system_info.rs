//! Public system information (`/api/systemInfo`)

use axum::Json;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemInfo {
    pub name: String,
    pub version: String,
    /// The frontend hides its API docs link when false
    #[serde(rename = "showSwaggerUILink")]
    pub show_swagger_ui_link: bool,
}

pub async fn system_info() -> Json<SystemInfo> {
    Json(SystemInfo {
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        show_swagger_ui_link: false,
    })
}
