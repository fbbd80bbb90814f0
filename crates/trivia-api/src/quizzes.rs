//! Handler for `POST /questions/random` — the next question of a quiz.

use std::sync::Arc;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};
use trivia_core::{
  question::Question,
  store::{QuizQuery, TriviaStore},
};

use crate::{categories::CategoryRef, error::ApiError, extract::ApiJson};

#[derive(Debug, Default, Deserialize)]
pub struct QuizBody {
  /// Ids already served in this quiz.
  pub previous_questions: Option<Vec<i64>>,
  /// Category to draw from. Absent, null or id `0` means every category.
  pub category:           Option<CategoryRef>,
}

#[derive(Debug, Serialize)]
pub struct QuizTurn {
  pub success:            bool,
  pub question:           Question,
  /// The request's previous ids followed by the id just served.
  pub previous_questions: Vec<i64>,
}

/// `POST /questions/random`
///
/// 404 when the category does not exist or every question in it has
/// already been served.
pub async fn next_question<S>(
  State(store): State<Arc<S>>,
  ApiJson(body): ApiJson<QuizBody>,
) -> Result<Json<QuizTurn>, ApiError>
where
  S: TriviaStore,
{
  let category = match body.category {
    None => None,
    Some(ref r) if r.as_id() == Some(0) => None,
    Some(r) => {
      let found = r
        .resolve(store.as_ref())
        .await
        .map_err(ApiError::store)?
        .ok_or_else(|| ApiError::NotFound(format!("category {r:?} not found")))?;
      Some(found.id)
    }
  };

  let mut previous = body.previous_questions.unwrap_or_default();
  let query = QuizQuery { category, exclude: previous.clone() };

  let question = store
    .random_question(&query)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound("no questions left to serve".into()))?;

  previous.push(question.id);
  Ok(Json(QuizTurn {
    success: true,
    question,
    previous_questions: previous,
  }))
}
