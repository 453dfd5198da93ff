use roster_core::db::migrations::latest_version;
use roster_core::db::seed::seed_department;
use roster_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::Connection;

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "departments");
    assert_table_exists(&conn, "persons");
}

#[test]
fn open_db_enables_foreign_keys() {
    let conn = open_db_in_memory().unwrap();
    let enabled: i64 = conn
        .query_row("PRAGMA foreign_keys;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(enabled, 1);

    let err = conn
        .execute(
            "INSERT INTO persons (name, salary, department_id) VALUES ('x', 1.0, 42);",
            [],
        )
        .unwrap_err();
    assert!(err.to_string().contains("FOREIGN KEY"));
}

#[test]
fn opening_same_database_twice_is_idempotent_and_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roster.db");

    let conn_first = open_db(&path).unwrap();
    seed_department(&conn_first, 1, "IT").unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    let name: String = conn_second
        .query_row("SELECT name FROM departments WHERE id = 1;", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(name, "IT");
}

#[test]
fn seed_department_renames_existing_row() {
    let conn = open_db_in_memory().unwrap();
    seed_department(&conn, 3, "Sales").unwrap();
    seed_department(&conn, 3, "Marketing").unwrap();

    let (count, name): (i64, String) = conn
        .query_row(
            "SELECT COUNT(*), MAX(name) FROM departments WHERE id = 3;",
            [],
            |row| Ok((row.get(0)?, row.get(1)?)),
        )
        .unwrap();
    assert_eq!(count, 1);
    assert_eq!(name, "Marketing");
}

#[test]
fn seed_department_rejects_blank_name_without_writing() {
    let conn = open_db_in_memory().unwrap();

    let err = seed_department(&conn, 3, "   ").unwrap_err();
    assert!(matches!(err, DbError::InvalidDepartment(_)));

    let count: i64 = conn
        .query_row("SELECT COUNT(*) FROM departments WHERE id = 3;", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(count, 0);
}

#[test]
fn seed_department_keeps_existing_name_when_rename_is_blank() {
    let conn = open_db_in_memory().unwrap();
    seed_department(&conn, 3, "Sales").unwrap();

    assert!(seed_department(&conn, 3, "").is_err());

    let name: String = conn
        .query_row("SELECT name FROM departments WHERE id = 3;", [], |row| {
            row.get(0)
        })
        .unwrap();
    assert_eq!(name, "Sales");
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.db");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
