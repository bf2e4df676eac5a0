//! Question selection entry points.
//!
//! # Responsibility
//! - Turn list/search/category request shapes into ordered candidate sets.
//! - Attach the "current category" label reported alongside listings.

pub mod resolver;
