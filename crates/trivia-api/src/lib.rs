//! JSON REST API for the trivia service.
//!
//! Exposes an axum [`Router`] backed by any [`trivia_core::store::TriviaStore`].
//! CORS, tracing and transport concerns are the caller's responsibility.
//!
//! | Method   | Path                           | Handler |
//! |----------|--------------------------------|---------|
//! | `GET`    | `/categories`                  | [`categories::list`] |
//! | `GET`    | `/questions`                   | [`questions::list`] |
//! | `POST`   | `/questions`                   | [`questions::create_or_search`] |
//! | `DELETE` | `/questions/{id}`              | [`questions::delete_one`] |
//! | `GET`    | `/questions/categories/{name}` | [`questions::by_category`] |
//! | `POST`   | `/questions/random`            | [`quizzes::next_question`] |

pub mod categories;
pub mod error;
pub mod extract;
pub mod questions;
pub mod quizzes;

use std::sync::Arc;

use axum::{
  Router,
  routing::{delete, get, post},
};
use trivia_core::store::TriviaStore;

pub use error::ApiError;

/// Build a fully-materialised API router for `store`.
///
/// Unknown paths and unsupported methods answer with the JSON error body
/// rather than axum's empty one.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: TriviaStore + 'static,
{
  Router::new()
    // Categories
    .route("/categories", get(categories::list::<S>))
    // Questions
    .route(
      "/questions",
      get(questions::list::<S>).post(questions::create_or_search::<S>),
    )
    .route("/questions/{id}", delete(questions::delete_one::<S>))
    .route("/questions/categories/{name}", get(questions::by_category::<S>))
    // Quiz
    .route("/questions/random", post(quizzes::next_question::<S>))
    .fallback(unknown_route)
    .method_not_allowed_fallback(wrong_method)
    .with_state(store)
}

async fn unknown_route() -> ApiError { ApiError::NotFound("no such route".into()) }

async fn wrong_method() -> ApiError { ApiError::MethodNotAllowed }
