//! Category — a labelled grouping of questions.
//!
//! Categories are seeded by the storage backend and never written through the
//! API. Questions refer to them by [`Category::id`] only.

use serde::{Deserialize, Serialize};

/// A category record, serialised as `{"id": 1, "type": "Science"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
  pub id:   i64,
  #[serde(rename = "type")]
  pub kind: String,
}

impl Category {
  /// Case-insensitive comparison against the category's display name.
  pub fn is_named(&self, name: &str) -> bool {
    self.kind.eq_ignore_ascii_case(name.trim())
  }
}
