use super::Entity;
use crate::sql::{Column, ColumnType, SqlValue};
use serde::{Deserialize, Serialize};

/// A menu item served at one station of a UCSB dining commons.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct UcsbDiningCommonsMenuItem {
    #[serde(default)]
    pub id: Option<i64>,
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UcsbDiningCommonsMenuItemParams {
    pub dining_commons_code: String,
    pub name: String,
    pub station: String,
}

impl Entity for UcsbDiningCommonsMenuItem {
    const NAME: &'static str = "UCSBDiningCommonsMenuItems";
    const BASE_PATH: &'static str = "/api/ucsbdiningcommonsmenuitems";
    const TABLE: &'static str = "ucsbdiningcommonsmenuitems";
    const COLUMNS: &'static [Column] = &[
        Column::new("dining_commons_code", ColumnType::Text),
        Column::new("name", ColumnType::Text),
        Column::new("station", ColumnType::Text),
    ];

    type Params = UcsbDiningCommonsMenuItemParams;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(self, id: Option<i64>) -> Self {
        UcsbDiningCommonsMenuItem { id, ..self }
    }

    fn from_params(p: UcsbDiningCommonsMenuItemParams) -> Self {
        UcsbDiningCommonsMenuItem {
            id: None,
            dining_commons_code: p.dining_commons_code,
            name: p.name,
            station: p.station,
        }
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.dining_commons_code.as_str().into(),
            self.name.as_str().into(),
            self.station.as_str().into(),
        ]
    }
}
