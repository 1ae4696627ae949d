use super::Entity;
use crate::sql::{Column, ColumnType, SqlValue};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An article link submitted by a user.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub email: String,
    pub date_added: NaiveDateTime,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleParams {
    pub title: String,
    pub url: String,
    pub explanation: String,
    pub email: String,
    pub date_added: NaiveDateTime,
}

impl Entity for Article {
    const NAME: &'static str = "Articles";
    const BASE_PATH: &'static str = "/api/articles";
    const TABLE: &'static str = "articles";
    const COLUMNS: &'static [Column] = &[
        Column::new("title", ColumnType::Text),
        Column::new("url", ColumnType::Text),
        Column::new("explanation", ColumnType::Text),
        Column::new("email", ColumnType::Text),
        Column::new("date_added", ColumnType::Timestamp),
    ];

    type Params = ArticleParams;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(self, id: Option<i64>) -> Self {
        Article { id, ..self }
    }

    fn from_params(p: ArticleParams) -> Self {
        Article {
            id: None,
            title: p.title,
            url: p.url,
            explanation: p.explanation,
            email: p.email,
            date_added: p.date_added,
        }
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.title.as_str().into(),
            self.url.as_str().into(),
            self.explanation.as_str().into(),
            self.email.as_str().into(),
            self.date_added.into(),
        ]
    }
}
