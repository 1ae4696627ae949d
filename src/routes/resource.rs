//! Route family for one resource type, rooted at the entity's base path.

use crate::entity::Entity;
use crate::handlers::resource::{create, delete as delete_handler, list, read, update, ResourceState};
use crate::repository::Repository;
use axum::{routing::get, routing::post, Router};
use std::sync::Arc;

/// `GET {base}/all`, `POST {base}/post`, and `GET|PUT|DELETE {base}?id=`.
pub fn resource_routes<T: Entity>(repo: Arc<dyn Repository<T>>) -> Router {
    let base = T::BASE_PATH;
    Router::new()
        .route(&format!("{}/all", base), get(list::<T>))
        .route(&format!("{}/post", base), post(create::<T>))
        .route(
            base,
            get(read::<T>).put(update::<T>).delete(delete_handler::<T>),
        )
        .with_state(ResourceState { repo })
}
