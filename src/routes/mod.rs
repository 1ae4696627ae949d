//! Router assembly.

mod common;
mod resource;

pub use common::common_routes_with_ready;
pub use resource::resource_routes;

use crate::config::Settings;
use crate::state::AppState;
use axum::{Extension, Router};
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

/// Route families for all five resource types.
pub fn api_routes(state: &AppState) -> Router {
    Router::new()
        .merge(resource_routes(state.articles.clone()))
        .merge(resource_routes(state.menu_item_reviews.clone()))
        .merge(resource_routes(state.recommendation_requests.clone()))
        .merge(resource_routes(state.dining_commons_menu_items.clone()))
        .merge(resource_routes(state.organizations.clone()))
}

/// Full application: common + resource routes, request tracing, body limit and auth header settings.
pub fn app(state: AppState, settings: &Settings) -> Router {
    Router::new()
        .merge(common_routes_with_ready(state.clone()))
        .merge(api_routes(&state))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(RequestBodyLimitLayer::new(settings.body_limit_bytes))
                .layer(Extension(settings.auth.clone())),
        )
}
