//! Per-entity storage abstraction with a PostgreSQL and an in-memory backend.

mod memory;
mod postgres;

pub use memory::MemoryRepository;
pub use postgres::PgRepository;

use crate::entity::Entity;
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    /// Every stored record, ascending by id. No filtering or paging.
    async fn find_all(&self) -> Result<Vec<T>, AppError>;

    /// Missing ids are `Ok(None)`, never an error.
    async fn find_by_id(&self, id: i64) -> Result<Option<T>, AppError>;

    /// Insert when the key is unset (storage assigns it), otherwise overwrite the record with
    /// that key. Returns the persisted record.
    async fn save(&self, entity: T) -> Result<T, AppError>;

    /// Overwrite the existing record with the entity's key. `Ok(None)` when no such record
    /// exists (or the key is unset); never creates one.
    async fn update(&self, entity: T) -> Result<Option<T>, AppError>;

    /// Remove the record. A record that is already gone is not an error.
    async fn delete(&self, entity: &T) -> Result<(), AppError>;
}
