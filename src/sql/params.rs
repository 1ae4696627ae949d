//! Typed column descriptors and bind values for PostgreSQL statements.

use chrono::NaiveDateTime;
use sqlx::postgres::{PgArguments, Postgres};
use sqlx::query::QueryAs;

/// SQL type of a persisted entity field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnType {
    Text,
    Int,
    BigInt,
    Bool,
    Timestamp,
}

impl ColumnType {
    pub fn ddl(&self) -> &'static str {
        match self {
            ColumnType::Text => "TEXT NOT NULL",
            ColumnType::Int => "INTEGER NOT NULL",
            ColumnType::BigInt => "BIGINT NOT NULL",
            ColumnType::Bool => "BOOLEAN NOT NULL",
            ColumnType::Timestamp => "TIMESTAMP NOT NULL",
        }
    }
}

/// One non-key column of an entity table.
#[derive(Clone, Copy, Debug)]
pub struct Column {
    pub name: &'static str,
    pub ty: ColumnType,
}

impl Column {
    pub const fn new(name: &'static str, ty: ColumnType) -> Self {
        Column { name, ty }
    }
}

/// A value that can be bound to a PostgreSQL query. Produced from entity fields in column order.
#[derive(Clone, Debug, PartialEq)]
pub enum SqlValue {
    Text(String),
    Int(i32),
    BigInt(i64),
    Bool(bool),
    Timestamp(NaiveDateTime),
}

impl SqlValue {
    pub fn bind_to<'q, O>(
        self,
        query: QueryAs<'q, Postgres, O, PgArguments>,
    ) -> QueryAs<'q, Postgres, O, PgArguments> {
        match self {
            SqlValue::Text(s) => query.bind(s),
            SqlValue::Int(n) => query.bind(n),
            SqlValue::BigInt(n) => query.bind(n),
            SqlValue::Bool(b) => query.bind(b),
            SqlValue::Timestamp(t) => query.bind(t),
        }
    }

    /// Column type this value binds as; used to check descriptors against their values.
    pub fn column_type(&self) -> ColumnType {
        match self {
            SqlValue::Text(_) => ColumnType::Text,
            SqlValue::Int(_) => ColumnType::Int,
            SqlValue::BigInt(_) => ColumnType::BigInt,
            SqlValue::Bool(_) => ColumnType::Bool,
            SqlValue::Timestamp(_) => ColumnType::Timestamp,
        }
    }
}

impl From<String> for SqlValue {
    fn from(s: String) -> Self {
        SqlValue::Text(s)
    }
}

impl From<&str> for SqlValue {
    fn from(s: &str) -> Self {
        SqlValue::Text(s.to_string())
    }
}

impl From<i32> for SqlValue {
    fn from(n: i32) -> Self {
        SqlValue::Int(n)
    }
}

impl From<i64> for SqlValue {
    fn from(n: i64) -> Self {
        SqlValue::BigInt(n)
    }
}

impl From<bool> for SqlValue {
    fn from(b: bool) -> Self {
        SqlValue::Bool(b)
    }
}

impl From<NaiveDateTime> for SqlValue {
    fn from(t: NaiveDateTime) -> Self {
        SqlValue::Timestamp(t)
    }
}
