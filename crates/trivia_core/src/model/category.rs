//! Category domain model.

use serde::{Deserialize, Serialize};

/// Integer identifier of a category row.
pub type CategoryId = i64;

/// Read-only question grouping, e.g. `4 -> History`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    /// Serialized as `type` to match the quiz front end's naming.
    #[serde(rename = "type")]
    pub label: String,
}

impl Category {
    pub fn new(id: CategoryId, label: impl Into<String>) -> Self {
        Self {
            id,
            label: label.into(),
        }
    }
}
