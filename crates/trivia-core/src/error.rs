//! Error types for `trivia-core`.

use thiserror::Error;

use crate::question::{MAX_DIFFICULTY, MIN_DIFFICULTY};

/// Validation failures for incoming domain values.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
  #[error("field `{0}` must not be blank")]
  BlankField(&'static str),

  #[error(
    "difficulty {0} is outside the accepted range {min}..={max}",
    min = MIN_DIFFICULTY,
    max = MAX_DIFFICULTY
  )]
  DifficultyOutOfRange(i64),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
