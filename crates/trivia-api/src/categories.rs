//! Handler for `GET /categories`, plus the boundary translation from the
//! ways clients name a category to the canonical category id.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use trivia_core::{category::Category, store::TriviaStore};

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// Response body of `GET /categories`. Key casing is part of the wire format.
#[derive(Debug, Serialize)]
pub struct CategoryList {
  #[serde(rename = "Success")]
  pub success:    bool,
  #[serde(rename = "Categories")]
  pub categories: Vec<Category>,
  #[serde(rename = "Total_Nums")]
  pub total_nums: usize,
}

/// `GET /categories`
pub async fn list<S>(State(store): State<Arc<S>>) -> Result<Json<CategoryList>, ApiError>
where
  S: TriviaStore,
{
  let categories = store.list_categories().await.map_err(ApiError::store)?;
  Ok(Json(CategoryList {
    success: true,
    total_nums: categories.len(),
    categories,
  }))
}

// ─── Category references ─────────────────────────────────────────────────────

/// A category as a client may name it: `3`, `"3"`, `"Science"`, or the
/// `{"id": 3, "type": "Science"}` object the categories listing returns,
/// whose `id` may itself be a number or a string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CategoryRef {
  Id(i64),
  Name(String),
  Object { id: Box<CategoryRef> },
}

impl CategoryRef {
  /// An object reference unwrapped to the value of its `id`.
  fn target(&self) -> &CategoryRef {
    match self {
      CategoryRef::Object { id } => id,
      other => other,
    }
  }

  /// The id this reference names directly, if it is numeric.
  pub fn as_id(&self) -> Option<i64> {
    match self.target() {
      CategoryRef::Id(id) => Some(*id),
      CategoryRef::Name(name) => name.trim().parse().ok(),
      CategoryRef::Object { .. } => None,
    }
  }

  /// Look the reference up in `store`. `Ok(None)` means no such category.
  pub async fn resolve<S>(&self, store: &S) -> Result<Option<Category>, S::Error>
  where
    S: TriviaStore,
  {
    match (self.as_id(), self.target()) {
      (Some(id), _) => store.get_category(id).await,
      (None, CategoryRef::Name(name)) => store.find_category(name).await,
      (None, _) => Ok(None),
    }
  }
}
