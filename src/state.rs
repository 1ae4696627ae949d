//! Shared application state: one repository per resource type plus the backing storage handle.

use crate::entity::{
    Article, MenuItemReview, RecommendationRequest, UcsbDiningCommonsMenuItem, UcsbOrganization,
};
use crate::repository::{MemoryRepository, PgRepository, Repository};
use sqlx::PgPool;
use std::sync::Arc;

/// Backing storage, kept for readiness checks.
#[derive(Clone)]
pub enum Storage {
    Postgres(PgPool),
    Memory,
}

#[derive(Clone)]
pub struct AppState {
    pub storage: Storage,
    pub articles: Arc<dyn Repository<Article>>,
    pub menu_item_reviews: Arc<dyn Repository<MenuItemReview>>,
    pub recommendation_requests: Arc<dyn Repository<RecommendationRequest>>,
    pub dining_commons_menu_items: Arc<dyn Repository<UcsbDiningCommonsMenuItem>>,
    pub organizations: Arc<dyn Repository<UcsbOrganization>>,
}

impl AppState {
    pub fn postgres(pool: PgPool) -> Self {
        AppState {
            articles: Arc::new(PgRepository::<Article>::new(pool.clone())),
            menu_item_reviews: Arc::new(PgRepository::<MenuItemReview>::new(pool.clone())),
            recommendation_requests: Arc::new(PgRepository::<RecommendationRequest>::new(pool.clone())),
            dining_commons_menu_items: Arc::new(PgRepository::<UcsbDiningCommonsMenuItem>::new(pool.clone())),
            organizations: Arc::new(PgRepository::<UcsbOrganization>::new(pool.clone())),
            storage: Storage::Postgres(pool),
        }
    }

    pub fn in_memory() -> Self {
        AppState {
            storage: Storage::Memory,
            articles: Arc::new(MemoryRepository::<Article>::new()),
            menu_item_reviews: Arc::new(MemoryRepository::<MenuItemReview>::new()),
            recommendation_requests: Arc::new(MemoryRepository::<RecommendationRequest>::new()),
            dining_commons_menu_items: Arc::new(MemoryRepository::<UcsbDiningCommonsMenuItem>::new()),
            organizations: Arc::new(MemoryRepository::<UcsbOrganization>::new()),
        }
    }
}
