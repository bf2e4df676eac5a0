use rusqlite::Connection;
use trivia_core::db::migrations::latest_version;
use trivia_core::db::seed::{sample_question_count, seed_sample_questions};
use trivia_core::db::{open_db, open_db_in_memory, DbError};

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    assert_table_exists(&conn, "categories");
    assert_table_exists(&conn, "questions");
}

#[test]
fn migrations_seed_the_standard_categories() {
    let conn = open_db_in_memory().unwrap();

    let labels: Vec<(i64, String)> = conn
        .prepare("SELECT id, type FROM categories ORDER BY id;")
        .unwrap()
        .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
        .unwrap()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(labels.len(), 6);
    assert_eq!(labels[3], (4, "History".to_string()));
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trivia.db");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    let categories: i64 = conn_second
        .query_row("SELECT COUNT(*) FROM categories;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(categories, 6);
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

#[test]
fn foreign_keys_are_enforced_on_opened_connections() {
    let conn = open_db_in_memory().unwrap();

    let result = conn.execute(
        "INSERT INTO questions (question, answer, category, difficulty)
         VALUES ('orphan', 'answer', 42, 1);",
        [],
    );
    assert!(result.is_err());
}

#[test]
fn seeding_loads_sample_questions_once() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(seed_sample_questions(&conn).unwrap(), sample_question_count());
    assert_eq!(seed_sample_questions(&conn).unwrap(), 0);

    let (count, max_id): (i64, i64) = conn
        .query_row("SELECT COUNT(*), MAX(id) FROM questions;", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .unwrap();
    assert_eq!(count as usize, sample_question_count());
    assert_eq!(max_id as usize, sample_question_count());
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
