//! Standard response body helpers.

use axum::Json;
use serde::Serialize;

/// Body returned by operations that have no record to echo back, e.g. delete.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GenericMessage {
    pub message: String,
}

/// Error body: `{"type": "...", "message": "..."}`.
#[derive(Serialize, Debug)]
pub struct ErrorBody {
    #[serde(rename = "type")]
    pub type_: String,
    pub message: String,
}

pub fn generic_message(message: impl Into<String>) -> Json<GenericMessage> {
    Json(GenericMessage {
        message: message.into(),
    })
}
