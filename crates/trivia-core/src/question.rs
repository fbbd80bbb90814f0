//! Question records and the validated input used to create them.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Lowest accepted difficulty score.
pub const MIN_DIFFICULTY: i64 = 1;
/// Highest accepted difficulty score.
pub const MAX_DIFFICULTY: i64 = 5;

/// A stored trivia question.
///
/// `category` is always a [`Category::id`](crate::category::Category::id);
/// name-based lookups are resolved before they reach the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
  pub id:         i64,
  pub question:   String,
  pub answer:     String,
  pub category:   i64,
  pub difficulty: i64,
}

/// Input for [`TriviaStore::add_question`](crate::store::TriviaStore::add_question).
/// The id is assigned by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
  pub question:   String,
  pub answer:     String,
  pub category:   i64,
  pub difficulty: i64,
}

impl NewQuestion {
  pub fn new(
    question: impl Into<String>,
    answer: impl Into<String>,
    category: i64,
    difficulty: i64,
  ) -> Self {
    Self {
      question: question.into(),
      answer: answer.into(),
      category,
      difficulty,
    }
  }

  /// Check the fields that can be verified without touching the store.
  ///
  /// Whether `category` names an existing category is left to the caller.
  pub fn validate(&self) -> Result<()> {
    if self.question.trim().is_empty() {
      return Err(Error::BlankField("question"));
    }
    if self.answer.trim().is_empty() {
      return Err(Error::BlankField("answer"));
    }
    if !(MIN_DIFFICULTY..=MAX_DIFFICULTY).contains(&self.difficulty) {
      return Err(Error::DifficultyOutOfRange(self.difficulty));
    }
    Ok(())
  }

  /// Attach a store-assigned id.
  pub fn into_question(self, id: i64) -> Question {
    Question {
      id,
      question: self.question,
      answer: self.answer,
      category: self.category,
      difficulty: self.difficulty,
    }
  }
}
