//! Dining commons menu item model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::repository::{Entity, SqliteQueryAs};

/// A dish served at a station of one of the dining commons
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UcsbDiningCommonMenuItem {
    #[serde(default)]
    pub id: Option<i64>,
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

impl Entity for UcsbDiningCommonMenuItem {
    type Key = i64;

    const TYPE_NAME: &'static str = "UCSBDiningCommonMenuItem";
    const TABLE: &'static str = "dining_commons_menu_items";
    const COLUMNS: &'static [&'static str] = &["dining_commons_code", "name", "station"];

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn bind_columns<'q, O>(&'q self, query: SqliteQueryAs<'q, O>) -> SqliteQueryAs<'q, O> {
        query
            .bind(self.dining_commons_code.as_str())
            .bind(self.name.as_str())
            .bind(self.station.as_str())
    }

    fn overwrite_from(&mut self, incoming: Self) {
        self.dining_commons_code = incoming.dining_commons_code;
        self.name = incoming.name;
        self.station = incoming.station;
    }
}
