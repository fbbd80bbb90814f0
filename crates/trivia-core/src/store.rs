//! The `TriviaStore` trait and supporting query types.
//!
//! The trait is implemented by storage backends (e.g. `trivia-store-sqlite`).
//! The HTTP layer depends on this abstraction, not on any concrete backend,
//! so tests can swap in an in-memory fake.

use std::future::Future;

use crate::{
  category::Category,
  page::PageRequest,
  question::{NewQuestion, Question},
};

// ─── Query type ──────────────────────────────────────────────────────────────

/// Parameters for [`TriviaStore::random_question`].
#[derive(Debug, Clone, Default)]
pub struct QuizQuery {
  /// Restrict to one category id. `None` draws from every category.
  pub category: Option<i64>,
  /// Question ids that must not be drawn again.
  pub exclude:  Vec<i64>,
}

// ─── Trait ───────────────────────────────────────────────────────────────────

/// Abstraction over a trivia store backend.
///
/// Categories are read-only. Questions are created and deleted but never
/// updated in place. Every list operation returns rows ordered by id, and an
/// empty result is an empty `Vec`, never an error.
///
/// All methods return `Send` futures so the trait can be used in multi-threaded
/// async runtimes (e.g. tokio with `axum`).
pub trait TriviaStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Categories ────────────────────────────────────────────────────────

  /// All categories.
  fn list_categories(
    &self,
  ) -> impl Future<Output = Result<Vec<Category>, Self::Error>> + Send + '_;

  /// Retrieve a category by id. Returns `None` if not found.
  fn get_category(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Category>, Self::Error>> + Send + '_;

  /// Retrieve a category by its display name, ignoring ASCII case.
  fn find_category<'a>(
    &'a self,
    name: &'a str,
  ) -> impl Future<Output = Result<Option<Category>, Self::Error>> + Send + 'a;

  // ── Questions — reads ─────────────────────────────────────────────────

  /// Total number of stored questions.
  fn count_questions(
    &self,
  ) -> impl Future<Output = Result<u64, Self::Error>> + Send + '_;

  /// One page of questions. Pages past the end, or below 1, are empty.
  fn list_questions(
    &self,
    page: PageRequest,
  ) -> impl Future<Output = Result<Vec<Question>, Self::Error>> + Send + '_;

  /// Retrieve a question by id. Returns `None` if not found.
  fn get_question(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Question>, Self::Error>> + Send + '_;

  /// Questions whose text contains `term`, ignoring ASCII case. Wildcard
  /// characters in `term` match literally.
  fn search_questions<'a>(
    &'a self,
    term: &'a str,
  ) -> impl Future<Output = Result<Vec<Question>, Self::Error>> + Send + 'a;

  /// Every question in the given category.
  fn questions_in_category(
    &self,
    category: i64,
  ) -> impl Future<Output = Result<Vec<Question>, Self::Error>> + Send + '_;

  /// Draw one question uniformly at random among those matching `query`.
  /// Returns `None` when nothing remains.
  fn random_question<'a>(
    &'a self,
    query: &'a QuizQuery,
  ) -> impl Future<Output = Result<Option<Question>, Self::Error>> + Send + 'a;

  // ── Questions — writes ────────────────────────────────────────────────

  /// Persist a new question and return it with its assigned id. Ids are
  /// never reused, even after deletion.
  fn add_question(
    &self,
    input: NewQuestion,
  ) -> impl Future<Output = Result<Question, Self::Error>> + Send + '_;

  /// Remove a question, returning the deleted record. Returns `None` if no
  /// question had that id.
  fn delete_question(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Question>, Self::Error>> + Send + '_;
}
