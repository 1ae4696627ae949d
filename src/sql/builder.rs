//! Builds parameterized SELECT, INSERT, UPSERT, DELETE and bootstrap DDL for one entity table.
//! Identifiers come from entity descriptors only; values are always bound as `$n` parameters.

use super::params::Column;

/// Primary key column shared by every entity table.
pub const ID_COLUMN: &str = "id";

/// Quote identifier for PostgreSQL (safe: only from descriptors).
pub fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// `"id", "col_a", "col_b"`: key first, then columns in descriptor order.
fn returning_list(columns: &[Column]) -> String {
    std::iter::once(ID_COLUMN)
        .chain(columns.iter().map(|c| c.name))
        .map(quoted)
        .collect::<Vec<_>>()
        .join(", ")
}

fn placeholders(start: usize, count: usize) -> String {
    (start..start + count)
        .map(|n| format!("${}", n))
        .collect::<Vec<_>>()
        .join(", ")
}

/// SELECT every row, ordered by key.
pub fn select_all(table: &str, columns: &[Column]) -> String {
    format!(
        "SELECT {} FROM {} ORDER BY {}",
        returning_list(columns),
        quoted(table),
        quoted(ID_COLUMN)
    )
}

/// SELECT by primary key. Caller binds the id as `$1`.
pub fn select_by_id(table: &str, columns: &[Column]) -> String {
    format!(
        "SELECT {} FROM {} WHERE {} = $1",
        returning_list(columns),
        quoted(table),
        quoted(ID_COLUMN)
    )
}

/// INSERT without key; storage assigns it. Caller binds column values as `$1..$n`.
pub fn insert(table: &str, columns: &[Column]) -> String {
    let names: Vec<String> = columns.iter().map(|c| quoted(c.name)).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        quoted(table),
        names.join(", "),
        placeholders(1, columns.len()),
        returning_list(columns)
    )
}

/// INSERT with explicit key, overwriting every column of an existing row with the same key.
/// Caller binds the id as `$1` and column values as `$2..$n+1`.
pub fn upsert(table: &str, columns: &[Column]) -> String {
    let sets: Vec<String> = columns
        .iter()
        .map(|c| {
            let q = quoted(c.name);
            format!("{} = EXCLUDED.{}", q, q)
        })
        .collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) ON CONFLICT ({}) DO UPDATE SET {} RETURNING {}",
        quoted(table),
        returning_list(columns),
        placeholders(1, columns.len() + 1),
        quoted(ID_COLUMN),
        sets.join(", "),
        returning_list(columns)
    )
}

/// UPDATE every column of the row with the given key. Caller binds the id as `$1` and column
/// values as `$2..$n+1`. A missing row yields no RETURNING row.
pub fn update_by_id(table: &str, columns: &[Column]) -> String {
    let sets: Vec<String> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{} = ${}", quoted(c.name), i + 2))
        .collect();
    format!(
        "UPDATE {} SET {} WHERE {} = $1 RETURNING {}",
        quoted(table),
        sets.join(", "),
        quoted(ID_COLUMN),
        returning_list(columns)
    )
}

/// Move the key sequence past the largest stored id so later inserts do not collide with
/// rows saved under an explicit id. Never moves it backwards: ids handed out before, including
/// those of deleted or not yet committed rows, are not reused.
pub fn sync_id_sequence(table: &str) -> String {
    format!(
        "SELECT setval(s.seq, GREATEST((SELECT MAX({}) FROM {}), pg_sequence_last_value(s.seq), 1)) \
         FROM (SELECT pg_get_serial_sequence('{}', '{}')::regclass AS seq) AS s",
        quoted(ID_COLUMN),
        quoted(table),
        quoted(table).replace('\'', "''"),
        ID_COLUMN
    )
}

/// DELETE by primary key. Caller binds the id as `$1`.
pub fn delete_by_id(table: &str) -> String {
    format!("DELETE FROM {} WHERE {} = $1", quoted(table), quoted(ID_COLUMN))
}

/// CREATE TABLE IF NOT EXISTS with a generated BIGINT key.
pub fn create_table(table: &str, columns: &[Column]) -> String {
    let mut defs = vec![format!("{} BIGSERIAL PRIMARY KEY", quoted(ID_COLUMN))];
    defs.extend(columns.iter().map(|c| format!("{} {}", quoted(c.name), c.ty.ddl())));
    format!("CREATE TABLE IF NOT EXISTS {} ({})", quoted(table), defs.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sql::ColumnType;

    const COLUMNS: &[Column] = &[
        Column::new("org_code", ColumnType::Text),
        Column::new("inactive", ColumnType::Bool),
    ];

    #[test]
    fn select_statements_list_key_first() {
        assert_eq!(
            select_all("ucsborganization", COLUMNS),
            r#"SELECT "id", "org_code", "inactive" FROM "ucsborganization" ORDER BY "id""#
        );
        assert_eq!(
            select_by_id("ucsborganization", COLUMNS),
            r#"SELECT "id", "org_code", "inactive" FROM "ucsborganization" WHERE "id" = $1"#
        );
    }

    #[test]
    fn insert_leaves_key_to_storage() {
        assert_eq!(
            insert("ucsborganization", COLUMNS),
            r#"INSERT INTO "ucsborganization" ("org_code", "inactive") VALUES ($1, $2) RETURNING "id", "org_code", "inactive""#
        );
    }

    #[test]
    fn upsert_binds_key_as_first_param() {
        let sql = upsert("ucsborganization", COLUMNS);
        assert!(sql.starts_with(
            r#"INSERT INTO "ucsborganization" ("id", "org_code", "inactive") VALUES ($1, $2, $3)"#
        ));
        assert!(sql.contains(
            r#"ON CONFLICT ("id") DO UPDATE SET "org_code" = EXCLUDED."org_code", "inactive" = EXCLUDED."inactive""#
        ));
    }

    #[test]
    fn update_binds_key_as_first_param() {
        assert_eq!(
            update_by_id("ucsborganization", COLUMNS),
            r#"UPDATE "ucsborganization" SET "org_code" = $2, "inactive" = $3 WHERE "id" = $1 RETURNING "id", "org_code", "inactive""#
        );
    }

    #[test]
    fn sequence_sync_only_moves_forward() {
        assert_eq!(
            sync_id_sequence("articles"),
            r#"SELECT setval(s.seq, GREATEST((SELECT MAX("id") FROM "articles"), pg_sequence_last_value(s.seq), 1)) FROM (SELECT pg_get_serial_sequence('"articles"', 'id')::regclass AS seq) AS s"#
        );
    }

    #[test]
    fn create_table_uses_serial_key() {
        assert_eq!(
            create_table("ucsborganization", COLUMNS),
            r#"CREATE TABLE IF NOT EXISTS "ucsborganization" ("id" BIGSERIAL PRIMARY KEY, "org_code" TEXT NOT NULL, "inactive" BOOLEAN NOT NULL)"#
        );
    }

    #[test]
    fn identifiers_escape_quotes() {
        assert_eq!(quoted(r#"we"ird"#), r#""we""ird""#);
        assert_eq!(delete_by_id("t"), r#"DELETE FROM "t" WHERE "id" = $1"#);
    }
}
