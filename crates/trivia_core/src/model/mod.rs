//! Trivia domain model.
//!
//! # Responsibility
//! - Define canonical question and category records used by core logic.
//! - Keep wire naming (`question`, `category`, `type`) attached to the model.
//!
//! # Invariants
//! - Every question is identified by a storage-assigned integer `QuestionId`.
//! - Categories are read-only from the core's perspective.

pub mod category;
pub mod question;
