use super::Entity;
use crate::sql::{Column, ColumnType, SqlValue};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A review of a dining commons menu item. `item_id` is a plain value; nothing checks the
/// item exists, and `stars` is not range-checked.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemReview {
    #[serde(default)]
    pub id: Option<i64>,
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItemReviewParams {
    pub item_id: i64,
    pub reviewer_email: String,
    pub stars: i32,
    pub date_reviewed: NaiveDateTime,
    pub comments: String,
}

impl Entity for MenuItemReview {
    const NAME: &'static str = "MenuItemReview";
    const BASE_PATH: &'static str = "/api/menuitemreview";
    const TABLE: &'static str = "menuitemreview";
    const COLUMNS: &'static [Column] = &[
        Column::new("item_id", ColumnType::BigInt),
        Column::new("reviewer_email", ColumnType::Text),
        Column::new("stars", ColumnType::Int),
        Column::new("date_reviewed", ColumnType::Timestamp),
        Column::new("comments", ColumnType::Text),
    ];

    type Params = MenuItemReviewParams;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(self, id: Option<i64>) -> Self {
        MenuItemReview { id, ..self }
    }

    fn from_params(p: MenuItemReviewParams) -> Self {
        MenuItemReview {
            id: None,
            item_id: p.item_id,
            reviewer_email: p.reviewer_email,
            stars: p.stars,
            date_reviewed: p.date_reviewed,
            comments: p.comments,
        }
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.item_id.into(),
            self.reviewer_email.as_str().into(),
            self.stars.into(),
            self.date_reviewed.into(),
            self.comments.as_str().into(),
        ]
    }
}
