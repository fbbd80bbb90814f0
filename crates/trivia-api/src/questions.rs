//! Handlers for `/questions` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/questions` | `?page=N`, 10 per page, defaults to 1 |
//! | `POST`   | `/questions` | Body with `search` → [`search`]; otherwise → [`create`] |
//! | `DELETE` | `/questions/{id}` | 404 if not found |
//! | `GET`    | `/questions/categories/{name}` | `name` is a category id or name |

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, Query, State, rejection::QueryRejection},
  response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use trivia_core::{
  page::PageRequest,
  question::{NewQuestion, Question},
  store::TriviaStore,
};

use crate::{categories::CategoryRef, error::ApiError, extract::ApiJson};

// ─── List ─────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ListParams {
  /// Kept as text so an unparseable value falls back to page 1 instead of
  /// rejecting the request.
  pub page: Option<String>,
}

impl ListParams {
  fn page(&self) -> PageRequest {
    self
      .page
      .as_deref()
      .and_then(|p| p.trim().parse().ok())
      .map(PageRequest::new)
      .unwrap_or_default()
  }
}

#[derive(Debug, Serialize)]
pub struct QuestionPage {
  pub success:      bool,
  pub questions:    Vec<Question>,
  pub total_nums:   u64,
  pub current_page: i64,
}

/// `GET /questions[?page=N]`
///
/// A query string that does not deserialise (e.g. a repeated `page`) is
/// treated like an unparseable page: page 1.
pub async fn list<S>(
  State(store): State<Arc<S>>,
  params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<QuestionPage>, ApiError>
where
  S: TriviaStore,
{
  let page = match params {
    Ok(Query(params)) => params.page(),
    Err(rejection) => {
      tracing::debug!(error = %rejection, "ignoring query string");
      PageRequest::default()
    }
  };
  let questions = store.list_questions(page).await.map_err(ApiError::store)?;
  let total_nums = store.count_questions().await.map_err(ApiError::store)?;

  Ok(Json(QuestionPage {
    success: true,
    questions,
    total_nums,
    current_page: page.number,
  }))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct DeletedQuestion {
  pub success:  bool,
  pub question: Question,
}

/// `DELETE /questions/{id}` — removes the question and echoes it back.
///
/// A non-numeric id cannot name a question, so it is a 404 as well.
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<DeletedQuestion>, ApiError>
where
  S: TriviaStore,
{
  let id: i64 = id
    .parse()
    .map_err(|_| ApiError::NotFound(format!("question {id:?} not found")))?;

  let question = store
    .delete_question(id)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("question {id} not found")))?;

  tracing::info!(id, "deleted question");
  Ok(Json(DeletedQuestion { success: true, question }))
}

// ─── Create / search ──────────────────────────────────────────────────────────

/// JSON body accepted by `POST /questions`.
///
/// A non-null `search` selects the search operation and every other field is
/// ignored. Otherwise the remaining fields describe a question to create.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionsBody {
  pub search:   Option<String>,
  pub question: Option<String>,
  pub answer:   Option<String>,
  pub category: Option<CategoryRef>,
  #[serde(alias = "difficulty")]
  pub score:    Option<i64>,
}

/// `POST /questions` — dispatches to [`search`] or [`create`].
pub async fn create_or_search<S>(
  State(store): State<Arc<S>>,
  ApiJson(body): ApiJson<QuestionsBody>,
) -> Result<Response, ApiError>
where
  S: TriviaStore,
{
  if let Some(term) = body.search.as_deref() {
    return Ok(search(store.as_ref(), term).await?.into_response());
  }
  Ok(create(store.as_ref(), body).await?.into_response())
}

#[derive(Debug, Serialize)]
pub struct SearchResults {
  pub success:    bool,
  pub questions:  Vec<Question>,
  pub total_nums: usize,
}

/// Every question whose text contains `term`, ignoring case.
pub async fn search<S>(store: &S, term: &str) -> Result<Json<SearchResults>, ApiError>
where
  S: TriviaStore,
{
  let questions = store.search_questions(term).await.map_err(ApiError::store)?;
  Ok(Json(SearchResults {
    success: true,
    total_nums: questions.len(),
    questions,
  }))
}

#[derive(Debug, Serialize)]
pub struct CreatedQuestion {
  pub success:         bool,
  pub created:         i64,
  pub question:        Question,
  /// Omitted when the count could not be read after the insert.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub total_questions: Option<u64>,
}

/// Validate `body` and persist it as a new question.
///
/// Missing fields, an unknown category, invalid values and write failures
/// all answer 422. Once the row is written the request succeeds, even if
/// the follow-up count fails.
pub async fn create<S>(store: &S, body: QuestionsBody) -> Result<Json<CreatedQuestion>, ApiError>
where
  S: TriviaStore,
{
  let (Some(question), Some(answer), Some(category), Some(difficulty)) =
    (body.question, body.answer, body.category, body.score)
  else {
    return Err(ApiError::Unprocessable(
      "question, answer, category and score are required".into(),
    ));
  };

  let category = category
    .resolve(store)
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::Unprocessable(format!("unknown category {category:?}")))?;

  let input = NewQuestion::new(question, answer, category.id, difficulty);
  input
    .validate()
    .map_err(|e| ApiError::Unprocessable(e.to_string()))?;

  let created = store.add_question(input).await.map_err(|e| {
    tracing::warn!(error = %e, "failed to create question");
    ApiError::Unprocessable(e.to_string())
  })?;
  let total_questions = match store.count_questions().await {
    Ok(n) => Some(n),
    Err(e) => {
      tracing::warn!(error = %e, id = created.id, "created question but could not count");
      None
    }
  };

  tracing::info!(id = created.id, category = created.category, "created question");
  Ok(Json(CreatedQuestion {
    success: true,
    created: created.id,
    question: created,
    total_questions,
  }))
}

// ─── By category ──────────────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
pub struct CategoryQuestions {
  pub success:    bool,
  /// The category exactly as it appeared in the path.
  pub category:   String,
  pub questions:  Vec<Question>,
  pub total_nums: usize,
}

/// `GET /questions/categories/{name}` — `name` may be an id or a name.
pub async fn by_category<S>(
  State(store): State<Arc<S>>,
  Path(name): Path<String>,
) -> Result<Json<CategoryQuestions>, ApiError>
where
  S: TriviaStore,
{
  let category = CategoryRef::Name(name.clone())
    .resolve(store.as_ref())
    .await
    .map_err(ApiError::store)?
    .ok_or_else(|| ApiError::NotFound(format!("category {name:?} not found")))?;

  let questions = store
    .questions_in_category(category.id)
    .await
    .map_err(ApiError::store)?;

  Ok(Json(CategoryQuestions {
    success: true,
    category: name,
    total_nums: questions.len(),
    questions,
  }))
}
