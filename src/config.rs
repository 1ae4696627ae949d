//! Runtime settings from environment variables (a `.env` file is loaded first when present).

use crate::error::ConfigError;
use crate::extractors::caller::{ROLES_HEADER, USER_HEADER};
use std::str::FromStr;

/// Which repository backend the server builds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageKind {
    Postgres,
    Memory,
}

impl FromStr for StorageKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageKind::Postgres),
            "memory" => Ok(StorageKind::Memory),
            _ => Err(ConfigError::UnknownStorage(s.to_string())),
        }
    }
}

/// Header names written by the authentication provider in front of this service.
/// Inserted as a request extension; the caller extractor falls back to the defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthSettings {
    pub user_header: String,
    pub roles_header: String,
}

impl Default for AuthSettings {
    fn default() -> Self {
        AuthSettings {
            user_header: USER_HEADER.into(),
            roles_header: ROLES_HEADER.into(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub database_url: String,
    pub bind_addr: String,
    pub max_connections: u32,
    pub storage: StorageKind,
    pub auth: AuthSettings,
    pub body_limit_bytes: usize,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            database_url: "postgres://localhost/ucsb".into(),
            bind_addr: "0.0.0.0:8080".into(),
            max_connections: 5,
            storage: StorageKind::Postgres,
            auth: AuthSettings::default(),
            body_limit_bytes: 1024 * 1024,
        }
    }
}

impl Settings {
    /// Read `DATABASE_URL`, `BIND_ADDR`, `DB_MAX_CONNECTIONS`, `STORAGE`, `AUTH_USER_HEADER`,
    /// `AUTH_ROLES_HEADER` and `BODY_LIMIT_BYTES`; unset keys keep their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Settings::default();
        if let Some(v) = lookup("DATABASE_URL") {
            settings.database_url = v;
        }
        if let Some(v) = lookup("BIND_ADDR") {
            settings.bind_addr = v;
        }
        if let Some(v) = lookup("DB_MAX_CONNECTIONS") {
            settings.max_connections = parse_number("DB_MAX_CONNECTIONS", v)?;
        }
        if let Some(v) = lookup("STORAGE") {
            settings.storage = v.parse()?;
        }
        if let Some(v) = lookup("AUTH_USER_HEADER") {
            settings.auth.user_header = v;
        }
        if let Some(v) = lookup("AUTH_ROLES_HEADER") {
            settings.auth.roles_header = v;
        }
        if let Some(v) = lookup("BODY_LIMIT_BYTES") {
            settings.body_limit_bytes = parse_number("BODY_LIMIT_BYTES", v)?;
        }
        Ok(settings)
    }
}

fn parse_number<N: FromStr>(key: &'static str, value: String) -> Result<N, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidValue { key, value })
}
