//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Keep the HTTP boundary decoupled from storage details.

pub mod category_directory;
pub mod error;
pub mod pagination;
pub mod question_service;
pub mod quiz_service;
