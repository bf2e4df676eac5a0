use rand::rngs::StdRng;
use rand::SeedableRng;
use rusqlite::Connection;
use std::collections::{HashMap, HashSet};
use trivia_core::db::open_db_in_memory;
use trivia_core::db::seed::seed_sample_questions;
use trivia_core::{
    DrawOutcome, QuestionId, QuestionListQuery, QuestionRepository, QuizScope, QuizService,
    ServiceError, SqliteCategoryRepository, SqliteQuestionRepository,
};

fn seeded() -> Connection {
    let conn = open_db_in_memory().unwrap();
    seed_sample_questions(&conn).unwrap();
    conn
}

fn quiz(
    conn: &Connection,
) -> QuizService<SqliteQuestionRepository<'_>, SqliteCategoryRepository<'_>> {
    QuizService::new(
        SqliteQuestionRepository::try_new(conn).unwrap(),
        SqliteCategoryRepository::try_new(conn).unwrap(),
    )
}

fn category_ids(conn: &Connection, category_id: i64) -> Vec<QuestionId> {
    SqliteQuestionRepository::try_new(conn)
        .unwrap()
        .list_questions(&QuestionListQuery::in_category(category_id))
        .unwrap()
        .into_iter()
        .map(|question| question.id)
        .collect()
}

#[test]
fn draw_respects_category_and_exclusion_set() {
    let conn = seeded();
    let service = quiz(&conn);
    let mut rng = StdRng::seed_from_u64(7);
    let all_in_category = category_ids(&conn, 5);
    let previous = HashSet::from([all_in_category[0]]);

    for _ in 0..50 {
        match service
            .draw_with_rng(QuizScope::Category(5), &previous, &mut rng)
            .unwrap()
        {
            DrawOutcome::Question(question) => {
                assert_eq!(question.category_id, 5);
                assert!(!previous.contains(&question.id));
            }
            DrawOutcome::Exhausted => panic!("category 5 still has unseen questions"),
        }
    }
}

#[test]
fn playing_through_a_category_visits_each_question_once_then_exhausts() {
    let conn = seeded();
    let service = quiz(&conn);
    let mut rng = StdRng::seed_from_u64(42);
    let expected: HashSet<_> = category_ids(&conn, 2).into_iter().collect();
    let mut previous = HashSet::new();

    loop {
        match service
            .draw_with_rng(QuizScope::Category(2), &previous, &mut rng)
            .unwrap()
        {
            DrawOutcome::Question(question) => {
                assert!(previous.insert(question.id), "question drawn twice");
            }
            DrawOutcome::Exhausted => break,
        }
    }

    assert_eq!(previous, expected);
}

#[test]
fn exclusion_set_covering_category_yields_exhausted() {
    let conn = seeded();
    let previous: HashSet<_> = category_ids(&conn, 6).into_iter().collect();

    let outcome = quiz(&conn)
        .draw(QuizScope::Category(6), &previous)
        .unwrap();
    assert_eq!(outcome, DrawOutcome::Exhausted);
}

#[test]
fn empty_category_is_exhausted_immediately() {
    let conn = open_db_in_memory().unwrap();
    let outcome = quiz(&conn)
        .draw(QuizScope::Category(1), &HashSet::new())
        .unwrap();
    assert_eq!(outcome, DrawOutcome::Exhausted);
}

#[test]
fn unknown_category_is_not_found() {
    let conn = seeded();
    let err = quiz(&conn)
        .draw(QuizScope::Category(404), &HashSet::new())
        .unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[test]
fn all_scope_draws_across_categories() {
    let conn = seeded();
    let service = quiz(&conn);
    let mut rng = StdRng::seed_from_u64(3);
    let mut seen_categories = HashSet::new();

    for _ in 0..200 {
        if let DrawOutcome::Question(question) = service
            .draw_with_rng(QuizScope::from_category_id(0), &HashSet::new(), &mut rng)
            .unwrap()
        {
            seen_categories.insert(question.category_id);
        }
    }

    assert_eq!(seen_categories.len(), 6);
}

#[test]
fn draws_are_roughly_uniform_over_the_pool() {
    let conn = seeded();
    let service = quiz(&conn);
    let mut rng = StdRng::seed_from_u64(2024);
    let pool = category_ids(&conn, 4);
    let mut counts: HashMap<QuestionId, usize> = HashMap::new();
    let draws = 4_000;

    for _ in 0..draws {
        if let DrawOutcome::Question(question) = service
            .draw_with_rng(QuizScope::Category(4), &HashSet::new(), &mut rng)
            .unwrap()
        {
            *counts.entry(question.id).or_default() += 1;
        }
    }

    let expected = draws / pool.len();
    for id in pool {
        let count = counts.get(&id).copied().unwrap_or_default();
        assert!(
            count > expected / 2 && count < expected * 3 / 2,
            "question {id} drawn {count} times, expected about {expected}"
        );
    }
}
