//! Question domain model.
//!
//! # Responsibility
//! - Define the persisted `Question` record and its creation payload.
//! - Validate creation payloads before they reach storage.
//!
//! # Invariants
//! - `id` is assigned by storage on insert and never reused.
//! - `text` and `answer` are non-blank.
//! - `difficulty` stays within `MIN_DIFFICULTY..=MAX_DIFFICULTY`.
//! - `category_id` must reference an existing category at creation time
//!   (enforced by storage, not by this module).

use super::category::CategoryId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage-assigned question identifier.
pub type QuestionId = i64;

pub const MIN_DIFFICULTY: i64 = 1;
pub const MAX_DIFFICULTY: i64 = 5;

/// Persisted trivia question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    /// Serialized as `question` to match external schema naming.
    #[serde(rename = "question")]
    pub text: String,
    pub answer: String,
    /// Serialized as `category` to match external schema naming.
    #[serde(rename = "category")]
    pub category_id: CategoryId,
    pub difficulty: i64,
}

/// Creation payload for a question that has no identity yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub text: String,
    pub answer: String,
    pub category_id: CategoryId,
    pub difficulty: i64,
}

/// Validation failures for question payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionValidationError {
    EmptyText,
    EmptyAnswer,
    DifficultyOutOfRange(i64),
}

impl Display for QuestionValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyText => write!(f, "question text cannot be empty"),
            Self::EmptyAnswer => write!(f, "answer cannot be empty"),
            Self::DifficultyOutOfRange(value) => write!(
                f,
                "difficulty {value} is outside {MIN_DIFFICULTY}..={MAX_DIFFICULTY}"
            ),
        }
    }
}

impl Error for QuestionValidationError {}

impl NewQuestion {
    pub fn new(
        text: impl Into<String>,
        answer: impl Into<String>,
        category_id: CategoryId,
        difficulty: i64,
    ) -> Self {
        Self {
            text: text.into(),
            answer: answer.into(),
            category_id,
            difficulty,
        }
    }

    /// Checks payload invariants that do not need storage access.
    ///
    /// # Errors
    /// - `EmptyText` / `EmptyAnswer` when either field is blank after trimming.
    /// - `DifficultyOutOfRange` when difficulty is outside the supported scale.
    pub fn validate(&self) -> Result<(), QuestionValidationError> {
        if self.text.trim().is_empty() {
            return Err(QuestionValidationError::EmptyText);
        }
        if self.answer.trim().is_empty() {
            return Err(QuestionValidationError::EmptyAnswer);
        }
        if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&self.difficulty) {
            return Err(QuestionValidationError::DifficultyOutOfRange(
                self.difficulty,
            ));
        }
        Ok(())
    }

    /// Attaches the storage-assigned id.
    pub fn into_question(self, id: QuestionId) -> Question {
        Question {
            id,
            text: self.text,
            answer: self.answer,
            category_id: self.category_id,
            difficulty: self.difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{NewQuestion, Question, QuestionValidationError};

    #[test]
    fn validate_rejects_blank_fields() {
        let blank_text = NewQuestion::new("   ", "answer", 1, 1);
        assert_eq!(
            blank_text.validate(),
            Err(QuestionValidationError::EmptyText)
        );

        let blank_answer = NewQuestion::new("text", "\n", 1, 1);
        assert_eq!(
            blank_answer.validate(),
            Err(QuestionValidationError::EmptyAnswer)
        );
    }

    #[test]
    fn validate_rejects_difficulty_outside_scale() {
        let too_hard = NewQuestion::new("text", "answer", 1, 6);
        assert_eq!(
            too_hard.validate(),
            Err(QuestionValidationError::DifficultyOutOfRange(6))
        );
        assert!(NewQuestion::new("text", "answer", 1, 0).validate().is_err());
        assert!(NewQuestion::new("text", "answer", 1, 5).validate().is_ok());
    }

    #[test]
    fn question_serializes_with_wire_field_names() {
        let question: Question = NewQuestion::new("Who?", "Me", 4, 2).into_question(7);
        let value = serde_json::to_value(&question).expect("serialize question");
        assert_eq!(value["id"], 7);
        assert_eq!(value["question"], "Who?");
        assert_eq!(value["answer"], "Me");
        assert_eq!(value["category"], 4);
        assert_eq!(value["difficulty"], 2);
    }
}
