//! Entity descriptors: one flat, identity-bearing record type per resource.
//!
//! Each descriptor carries everything the generic controller and repositories need:
//! display name, route base path, table layout, create parameters and how to rebuild a
//! record on update.

mod article;
mod dining_commons_menu_item;
mod menu_item_review;
mod organization;
mod recommendation_request;

pub use article::{Article, ArticleParams};
pub use dining_commons_menu_item::{UcsbDiningCommonsMenuItem, UcsbDiningCommonsMenuItemParams};
pub use menu_item_review::{MenuItemReview, MenuItemReviewParams};
pub use organization::{UcsbOrganization, UcsbOrganizationParams};
pub use recommendation_request::{RecommendationRequest, RecommendationRequestParams};

use crate::sql::{Column, SqlValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::postgres::PgRow;
use sqlx::FromRow;

pub trait Entity:
    Clone
    + std::fmt::Debug
    + Send
    + Sync
    + Unpin
    + Serialize
    + DeserializeOwned
    + for<'r> FromRow<'r, PgRow>
    + 'static
{
    /// Type name used in not-found and delete messages.
    const NAME: &'static str;
    /// Route prefix, e.g. `/api/articles`.
    const BASE_PATH: &'static str;
    const TABLE: &'static str;
    /// Non-key columns, in the order [`Entity::values`] yields them.
    const COLUMNS: &'static [Column];

    /// Discrete request parameters accepted by create.
    type Params: DeserializeOwned + Send + 'static;

    fn id(&self) -> Option<i64>;

    fn with_id(self, id: Option<i64>) -> Self;

    /// New record with key unset.
    fn from_params(params: Self::Params) -> Self;

    fn values(&self) -> Vec<SqlValue>;

    /// Record carrying this record's key and every other field from `incoming`.
    fn rebuild(&self, incoming: Self) -> Self {
        incoming.with_id(self.id())
    }
}
