//! UCSB student organization model

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::db::repository::{Entity, SqliteQueryAs};

/// A registered student organization, addressed by its organization code
///
/// The row keeps the code it was created under as its storage identity, so
/// an update that changes `org_code` still lands on the same row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UcsbOrganization {
    #[serde(skip)]
    pub id: Option<String>,
    #[validate(custom(function = "crate::utils::validation::not_blank"))]
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

impl Entity for UcsbOrganization {
    type Key = String;

    const TYPE_NAME: &'static str = "UCSBOrganizations";
    const TABLE: &'static str = "ucsb_organizations";
    const COLUMNS: &'static [&'static str] = &[
        "org_code",
        "org_translation_short",
        "org_translation",
        "inactive",
    ];

    fn id(&self) -> Option<String> {
        self.id.clone().or_else(|| Some(self.org_code.clone()))
    }

    fn bind_columns<'q, O>(&'q self, query: SqliteQueryAs<'q, O>) -> SqliteQueryAs<'q, O> {
        query
            .bind(self.org_code.as_str())
            .bind(self.org_translation_short.as_str())
            .bind(self.org_translation.as_str())
            .bind(self.inactive)
    }

    fn overwrite_from(&mut self, incoming: Self) {
        self.org_code = incoming.org_code;
        self.org_translation_short = incoming.org_translation_short;
        self.org_translation = incoming.org_translation;
        self.inactive = incoming.inactive;
    }
}
