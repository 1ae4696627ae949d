//! Database bootstrap: create the database and entity tables when missing.

use crate::entity::{
    Article, Entity, MenuItemReview, RecommendationRequest, UcsbDiningCommonsMenuItem,
    UcsbOrganization,
};
use crate::error::AppError;
use crate::sql::{create_table, quoted};
use sqlx::ConnectOptions;
use sqlx::PgPool;
use std::str::FromStr;

/// Connect to the `postgres` maintenance database on the same server and create the target
/// database if it does not exist.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin_url, db_name) = parse_db_name_from_url(database_url)?;
    if db_name.is_empty() || db_name == "postgres" {
        return Ok(());
    }
    let opts = sqlx::postgres::PgConnectOptions::from_str(&admin_url)
        .map_err(|e| AppError::BadRequest(format!("invalid DATABASE_URL: {}", e)))?;
    let mut conn: sqlx::PgConnection = opts.connect().await?;
    let exists: (bool,) = sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
        .bind(&db_name)
        .fetch_one(&mut conn)
        .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quoted(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

fn parse_db_name_from_url(url: &str) -> Result<(String, String), AppError> {
    let path_start = url
        .rfind('/')
        .ok_or_else(|| AppError::BadRequest("DATABASE_URL: no path".into()))?
        + 1;
    let path_and_query = url.get(path_start..).unwrap_or("");
    let db_name = path_and_query.split('?').next().unwrap_or("").trim();
    let base = url.get(..path_start).unwrap_or(url);
    let admin_url = format!("{}postgres", base);
    Ok((admin_url, db_name.to_string()))
}

/// `CREATE TABLE IF NOT EXISTS` for one entity type.
pub async fn ensure_table<T: Entity>(pool: &PgPool) -> Result<(), AppError> {
    let ddl = create_table(T::TABLE, T::COLUMNS);
    tracing::debug!(sql = %ddl, "ensure table");
    sqlx::query(&ddl).execute(pool).await?;
    Ok(())
}

/// Tables for every resource type served by this crate.
pub async fn ensure_tables(pool: &PgPool) -> Result<(), AppError> {
    ensure_table::<Article>(pool).await?;
    ensure_table::<MenuItemReview>(pool).await?;
    ensure_table::<RecommendationRequest>(pool).await?;
    ensure_table::<UcsbDiningCommonsMenuItem>(pool).await?;
    ensure_table::<UcsbOrganization>(pool).await?;
    Ok(())
}
