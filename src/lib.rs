//! Role-gated CRUD REST backend for UCSB campus resources.
//!
//! Five resource types share one generic controller and one repository abstraction; each type
//! is described by an [`entity::Entity`] implementation.

pub mod config;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod policy;
pub mod repository;
pub mod response;
pub mod routes;
pub mod sql;
pub mod state;
pub mod store;

pub use config::{AuthSettings, Settings, StorageKind};
pub use error::{AppError, ConfigError};
pub use extractors::Caller;
pub use policy::{guard, Operation, Role};
pub use repository::{MemoryRepository, PgRepository, Repository};
pub use response::{generic_message, GenericMessage};
pub use routes::{api_routes, app, common_routes_with_ready, resource_routes};
pub use state::{AppState, Storage};
pub use store::{ensure_database_exists, ensure_tables};
