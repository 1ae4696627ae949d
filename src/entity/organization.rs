use super::Entity;
use crate::sql::{Column, ColumnType, SqlValue};
use serde::{Deserialize, Serialize};

/// A student organization. `org_code` is the natural key but `id` stays the primary key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UcsbOrganization {
    #[serde(default)]
    pub id: Option<i64>,
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UcsbOrganizationParams {
    pub org_code: String,
    pub org_translation_short: String,
    pub org_translation: String,
    pub inactive: bool,
}

impl Entity for UcsbOrganization {
    const NAME: &'static str = "UCSBOrganization";
    const BASE_PATH: &'static str = "/api/ucsborganization";
    const TABLE: &'static str = "ucsborganization";
    const COLUMNS: &'static [Column] = &[
        Column::new("org_code", ColumnType::Text),
        Column::new("org_translation_short", ColumnType::Text),
        Column::new("org_translation", ColumnType::Text),
        Column::new("inactive", ColumnType::Bool),
    ];

    type Params = UcsbOrganizationParams;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(self, id: Option<i64>) -> Self {
        UcsbOrganization { id, ..self }
    }

    fn from_params(p: UcsbOrganizationParams) -> Self {
        UcsbOrganization {
            id: None,
            org_code: p.org_code,
            org_translation_short: p.org_translation_short,
            org_translation: p.org_translation,
            inactive: p.inactive,
        }
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.org_code.as_str().into(),
            self.org_translation_short.as_str().into(),
            self.org_translation.as_str().into(),
            self.inactive.into(),
        ]
    }
}
