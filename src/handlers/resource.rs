//! Generic resource controller: list, read, create, update, delete for any [`Entity`].
//!
//! Every handler runs the access guard first, so a caller without the required role gets 403
//! even when its parameters or body are malformed. Extraction failures are only turned into
//! validation errors after the guard passes.

use crate::entity::Entity;
use crate::error::AppError;
use crate::extractors::Caller;
use crate::policy::{guard, Operation};
use crate::repository::Repository;
use crate::response::{generic_message, GenericMessage};
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

/// Router state for one resource type.
pub struct ResourceState<T> {
    pub repo: Arc<dyn Repository<T>>,
}

impl<T> Clone for ResourceState<T> {
    fn clone(&self) -> Self {
        ResourceState {
            repo: Arc::clone(&self.repo),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct IdParam {
    pub id: i64,
}

fn query_param<P>(extracted: Result<Query<P>, QueryRejection>) -> Result<P, AppError> {
    extracted
        .map(|Query(p)| p)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

fn json_body<B>(extracted: Result<Json<B>, JsonRejection>) -> Result<B, AppError> {
    extracted
        .map(|Json(b)| b)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}

async fn find_or_not_found<T: Entity>(repo: &dyn Repository<T>, id: i64) -> Result<T, AppError> {
    repo.find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(T::NAME, id))
}

/// GET {base}/all
pub async fn list<T: Entity>(
    caller: Caller,
    State(state): State<ResourceState<T>>,
) -> Result<Json<Vec<T>>, AppError> {
    guard(&caller, Operation::List)?;
    let rows = state.repo.find_all().await?;
    Ok(Json(rows))
}

/// GET {base}?id=
pub async fn read<T: Entity>(
    caller: Caller,
    State(state): State<ResourceState<T>>,
    params: Result<Query<IdParam>, QueryRejection>,
) -> Result<Json<T>, AppError> {
    guard(&caller, Operation::Get)?;
    let IdParam { id } = query_param(params)?;
    let row = find_or_not_found(state.repo.as_ref(), id).await?;
    Ok(Json(row))
}

/// POST {base}/post with one query parameter per field.
pub async fn create<T: Entity>(
    caller: Caller,
    State(state): State<ResourceState<T>>,
    params: Result<Query<T::Params>, QueryRejection>,
) -> Result<Json<T>, AppError> {
    guard(&caller, Operation::Create)?;
    let params = query_param(params)?;
    let saved = state.repo.save(T::from_params(params)).await?;
    tracing::info!(entity = T::NAME, id = ?saved.id(), "created");
    Ok(Json(saved))
}

/// PUT {base}?id= with the full replacement record as JSON body. The body's `id` is ignored.
pub async fn update<T: Entity>(
    caller: Caller,
    State(state): State<ResourceState<T>>,
    params: Result<Query<IdParam>, QueryRejection>,
    body: Result<Json<T>, JsonRejection>,
) -> Result<Json<T>, AppError> {
    guard(&caller, Operation::Update)?;
    let IdParam { id } = query_param(params)?;
    let incoming = json_body(body)?;
    let existing = find_or_not_found(state.repo.as_ref(), id).await?;
    let saved = state
        .repo
        .update(existing.rebuild(incoming))
        .await?
        .ok_or_else(|| AppError::not_found(T::NAME, id))?;
    tracing::info!(entity = T::NAME, id, "updated");
    Ok(Json(saved))
}

/// DELETE {base}?id=
pub async fn delete<T: Entity>(
    caller: Caller,
    State(state): State<ResourceState<T>>,
    params: Result<Query<IdParam>, QueryRejection>,
) -> Result<Json<GenericMessage>, AppError> {
    guard(&caller, Operation::Delete)?;
    let IdParam { id } = query_param(params)?;
    let existing = find_or_not_found(state.repo.as_ref(), id).await?;
    state.repo.delete(&existing).await?;
    tracing::info!(entity = T::NAME, id, "deleted");
    Ok(generic_message(format!("{} with id {} deleted", T::NAME, id)))
}
