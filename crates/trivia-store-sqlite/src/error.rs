//! Error type for `trivia-store-sqlite`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("core error: {0}")]
  Core(#[from] trivia_core::Error),

  #[error("database error: {0}")]
  Database(#[from] tokio_rusqlite::Error),

  /// A new question referred to a category id that does not exist.
  #[error("unknown category: {0}")]
  UnknownCategory(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
