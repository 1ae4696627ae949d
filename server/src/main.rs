//! HTTP server for the ucsb-api backend.
//!
//! Run from repo root: `cargo run -p ucsb-api-server`
//! Set `STORAGE=memory` to run without PostgreSQL.

use std::error::Error;
use tokio::net::TcpListener;
use ucsb_api::{app, ensure_database_exists, ensure_tables, AppState, Settings, StorageKind};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let settings = Settings::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("ucsb_api=info,tower_http=info")),
        )
        .init();

    let state = match settings.storage {
        StorageKind::Postgres => {
            ensure_database_exists(&settings.database_url).await?;
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(settings.max_connections)
                .connect(&settings.database_url)
                .await?;
            ensure_tables(&pool).await?;
            AppState::postgres(pool)
        }
        StorageKind::Memory => {
            tracing::warn!("using in-memory storage; data is lost on restart");
            AppState::in_memory()
        }
    };

    let router = app(state, &settings);
    let listener = TcpListener::bind(&settings.bind_addr).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
