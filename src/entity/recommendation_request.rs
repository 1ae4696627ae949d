use super::Entity;
use crate::sql::{Column, ColumnType, SqlValue};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(default)]
    pub id: Option<i64>,
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    pub date_requested: NaiveDateTime,
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequestParams {
    pub requester_email: String,
    pub professor_email: String,
    pub explanation: String,
    pub date_requested: NaiveDateTime,
    pub date_needed: NaiveDateTime,
    pub done: bool,
}

impl Entity for RecommendationRequest {
    const NAME: &'static str = "RecommendationRequest";
    const BASE_PATH: &'static str = "/api/recommendationrequest";
    const TABLE: &'static str = "recommendationrequest";
    const COLUMNS: &'static [Column] = &[
        Column::new("requester_email", ColumnType::Text),
        Column::new("professor_email", ColumnType::Text),
        Column::new("explanation", ColumnType::Text),
        Column::new("date_requested", ColumnType::Timestamp),
        Column::new("date_needed", ColumnType::Timestamp),
        Column::new("done", ColumnType::Bool),
    ];

    type Params = RecommendationRequestParams;

    fn id(&self) -> Option<i64> {
        self.id
    }

    fn with_id(self, id: Option<i64>) -> Self {
        RecommendationRequest { id, ..self }
    }

    fn from_params(p: RecommendationRequestParams) -> Self {
        RecommendationRequest {
            id: None,
            requester_email: p.requester_email,
            professor_email: p.professor_email,
            explanation: p.explanation,
            date_requested: p.date_requested,
            date_needed: p.date_needed,
            done: p.done,
        }
    }

    fn values(&self) -> Vec<SqlValue> {
        vec![
            self.requester_email.as_str().into(),
            self.professor_email.as_str().into(),
            self.explanation.as_str().into(),
            self.date_requested.into(),
            self.date_needed.into(),
            self.done.into(),
        ]
    }
}
