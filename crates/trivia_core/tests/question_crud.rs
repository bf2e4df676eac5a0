use rusqlite::Connection;
use trivia_core::db::migrations::latest_version;
use trivia_core::db::open_db_in_memory;
use trivia_core::{
    verify_schema, CategoryRepository, NewQuestion, QuestionListQuery, QuestionRepository,
    RepoError, SqliteCategoryRepository, SqliteQuestionRepository,
};

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuestionRepository::try_new(&conn).unwrap();

    let new_question = NewQuestion::new("Here is a new question title", "An answer", 3, 1);
    let id = repo.create_question(&new_question).unwrap();

    let loaded = repo.get_question(id).unwrap().unwrap();
    assert_eq!(loaded, new_question.into_question(id));
}

#[test]
fn create_assigns_increasing_ids() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuestionRepository::try_new(&conn).unwrap();

    let first = repo
        .create_question(&NewQuestion::new("first", "a", 1, 1))
        .unwrap();
    let second = repo
        .create_question(&NewQuestion::new("second", "b", 1, 1))
        .unwrap();
    assert!(second > first);
}

#[test]
fn create_rejects_unknown_category() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuestionRepository::try_new(&conn).unwrap();

    let err = repo
        .create_question(&NewQuestion::new("orphan", "answer", 99, 1))
        .unwrap_err();
    assert!(matches!(err, RepoError::Constraint(_)), "{err}");
}

#[test]
fn validation_failure_blocks_create() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuestionRepository::try_new(&conn).unwrap();

    let err = repo
        .create_question(&NewQuestion::new("", "answer", 1, 1))
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    let all = repo.list_questions(&QuestionListQuery::all()).unwrap();
    assert!(all.is_empty());
}

#[test]
fn delete_twice_yields_not_found_on_second_call() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuestionRepository::try_new(&conn).unwrap();
    let id = repo
        .create_question(&NewQuestion::new("to delete", "gone", 2, 2))
        .unwrap();

    repo.delete_question(id).unwrap();
    let err = repo.delete_question(id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(missing) if missing == id));
    assert!(repo.get_question(id).unwrap().is_none());
}

#[test]
fn list_is_ordered_by_id_and_filters_compose() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuestionRepository::try_new(&conn).unwrap();

    let a = repo
        .create_question(&NewQuestion::new("Movie title trivia", "a", 5, 1))
        .unwrap();
    let b = repo
        .create_question(&NewQuestion::new("Book TITLE trivia", "b", 4, 1))
        .unwrap();
    let c = repo
        .create_question(&NewQuestion::new("Another movie", "c", 5, 1))
        .unwrap();

    let all = repo.list_questions(&QuestionListQuery::all()).unwrap();
    assert_eq!(all.iter().map(|q| q.id).collect::<Vec<_>>(), vec![a, b, c]);

    let in_five = repo.list_questions(&QuestionListQuery::in_category(5)).unwrap();
    assert_eq!(in_five.iter().map(|q| q.id).collect::<Vec<_>>(), vec![a, c]);

    let titled = repo.list_questions(&QuestionListQuery::matching("Title")).unwrap();
    assert_eq!(titled.iter().map(|q| q.id).collect::<Vec<_>>(), vec![a, b]);

    let both = QuestionListQuery {
        category_id: Some(5),
        search_term: Some("title".to_string()),
    };
    let composed = repo.list_questions(&both).unwrap();
    assert_eq!(composed.iter().map(|q| q.id).collect::<Vec<_>>(), vec![a]);
}

#[test]
fn search_treats_sql_wildcards_literally() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteQuestionRepository::try_new(&conn).unwrap();

    let percent = repo
        .create_question(&NewQuestion::new("What is 100% of ten?", "ten", 1, 1))
        .unwrap();
    repo.create_question(&NewQuestion::new("What is 1000 of ten?", "no", 1, 1))
        .unwrap();

    let hits = repo.list_questions(&QuestionListQuery::matching("100%")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id, percent);

    let underscore = repo.list_questions(&QuestionListQuery::matching("_")).unwrap();
    assert!(underscore.is_empty());
}

#[test]
fn category_repository_lists_and_gets() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCategoryRepository::try_new(&conn).unwrap();

    let all = repo.list_categories().unwrap();
    assert_eq!(all.len(), 6);
    assert!(all.windows(2).all(|pair| pair[0].id < pair[1].id));

    let history = repo.get_category(4).unwrap().unwrap();
    assert_eq!(history.label, "History");
    assert!(repo.get_category(1000).unwrap().is_none());
}

#[test]
fn repository_rejects_uninitialized_connection() {
    let conn = Connection::open_in_memory().unwrap();

    let result = SqliteQuestionRepository::try_new(&conn);
    match result {
        Err(RepoError::UninitializedConnection {
            expected_version,
            actual_version: 0,
        }) => assert!(expected_version > 0),
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected uninitialized connection error"),
    }
}

#[test]
fn repository_rejects_connection_without_required_table() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteCategoryRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredTable("categories"))
    ));
}

#[test]
fn repository_rejects_connection_missing_required_column() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute_batch(
        "CREATE TABLE questions (
            id INTEGER PRIMARY KEY,
            question TEXT NOT NULL,
            answer TEXT NOT NULL,
            category INTEGER NOT NULL
        );",
    )
    .unwrap();
    conn.execute_batch(&format!("PRAGMA user_version = {};", latest_version()))
        .unwrap();

    let result = SqliteQuestionRepository::try_new(&conn);
    assert!(matches!(
        result,
        Err(RepoError::MissingRequiredColumn {
            table: "questions",
            column: "difficulty"
        })
    ));
}

#[test]
fn verify_schema_checks_every_repository_table() {
    let conn = open_db_in_memory().unwrap();
    verify_schema(&conn).unwrap();

    let repo = SqliteQuestionRepository::from_verified(&conn);
    let id = repo
        .create_question(&NewQuestion::new("Who discovered penicillin?", "Fleming", 1, 3))
        .unwrap();
    assert!(repo.get_question(id).unwrap().is_some());

    conn.execute_batch(
        "PRAGMA foreign_keys = OFF;
         DROP TABLE categories;",
    )
    .unwrap();
    assert!(matches!(
        verify_schema(&conn),
        Err(RepoError::MissingRequiredTable("categories"))
    ));
}
