//! Repository over a PostgreSQL pool, one table per entity.

use super::Repository;
use crate::entity::Entity;
use crate::error::AppError;
use crate::sql::{
    delete_by_id, insert, select_all, select_by_id, sync_id_sequence, update_by_id, upsert,
};
use async_trait::async_trait;
use sqlx::PgPool;
use std::marker::PhantomData;

pub struct PgRepository<T> {
    pool: PgPool,
    _entity: PhantomData<fn() -> T>,
}

impl<T> PgRepository<T> {
    pub fn new(pool: PgPool) -> Self {
        PgRepository {
            pool,
            _entity: PhantomData,
        }
    }
}

impl<T> Clone for PgRepository<T> {
    fn clone(&self) -> Self {
        PgRepository::new(self.pool.clone())
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for PgRepository<T> {
    async fn find_all(&self) -> Result<Vec<T>, AppError> {
        let sql = select_all(T::TABLE, T::COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<T>, AppError> {
        let sql = select_by_id(T::TABLE, T::COLUMNS);
        tracing::debug!(sql = %sql, id, "query");
        let row = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn save(&self, entity: T) -> Result<T, AppError> {
        let values = entity.values();
        match entity.id() {
            None => {
                let sql = insert(T::TABLE, T::COLUMNS);
                tracing::debug!(sql = %sql, params = ?values, "query");
                let mut query = sqlx::query_as::<_, T>(&sql);
                for v in values {
                    query = v.bind_to(query);
                }
                Ok(query.fetch_one(&self.pool).await?)
            }
            Some(id) => {
                let sql = upsert(T::TABLE, T::COLUMNS);
                tracing::debug!(sql = %sql, id, params = ?values, "query (tx)");
                let mut tx = self.pool.begin().await?;
                let mut query = sqlx::query_as::<_, T>(&sql).bind(id);
                for v in values {
                    query = v.bind_to(query);
                }
                let row = query.fetch_one(&mut *tx).await?;
                sqlx::query(&sync_id_sequence(T::TABLE))
                    .execute(&mut *tx)
                    .await?;
                tx.commit().await?;
                Ok(row)
            }
        }
    }

    async fn update(&self, entity: T) -> Result<Option<T>, AppError> {
        let Some(id) = entity.id() else {
            return Ok(None);
        };
        let values = entity.values();
        let sql = update_by_id(T::TABLE, T::COLUMNS);
        tracing::debug!(sql = %sql, id, params = ?values, "query");
        let mut query = sqlx::query_as::<_, T>(&sql).bind(id);
        for v in values {
            query = v.bind_to(query);
        }
        Ok(query.fetch_optional(&self.pool).await?)
    }

    async fn delete(&self, entity: &T) -> Result<(), AppError> {
        let Some(id) = entity.id() else {
            return Ok(());
        };
        let sql = delete_by_id(T::TABLE);
        tracing::debug!(sql = %sql, id, "query");
        sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(())
    }
}
