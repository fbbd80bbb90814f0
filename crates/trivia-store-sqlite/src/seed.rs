//! Sample questions for a fresh database.

use tracing::info;

use crate::{Result, SqliteStore};

/// `(question, answer, category id, difficulty)` rows inserted by
/// [`SqliteStore::seed_sample_questions`].
pub const SAMPLE_QUESTIONS: &[(&str, &str, i64, i64)] = &[
  ("What is the chemical symbol for gold?", "Au", 1, 1),
  ("Which planet has the shortest day in the solar system?", "Jupiter", 1, 3),
  ("What is the heaviest organ in the human body?", "The liver", 1, 4),
  ("Who discovered penicillin?", "Alexander Fleming", 1, 3),
  ("Who painted the ceiling of the Sistine Chapel?", "Michelangelo", 2, 2),
  ("Which Dutch painter cut off part of his own ear?", "Vincent van Gogh", 2, 1),
  ("What is the largest lake in Africa?", "Lake Victoria", 3, 2),
  ("Which country is home to the city of Timbuktu?", "Mali", 3, 3),
  ("What is the capital city of Australia?", "Canberra", 3, 2),
  ("In which year did the Berlin Wall fall?", "1989", 4, 2),
  ("Who was the first emperor of Rome?", "Augustus", 4, 3),
  ("What is the title of the 1990 film about a boy left home alone at Christmas?", "Home Alone", 5, 1),
  ("Which band released the album Abbey Road?", "The Beatles", 5, 1),
  ("How many players are on the field for one side in a football match?", "Eleven", 6, 1),
  ("Which country has won the most FIFA World Cup titles?", "Brazil", 6, 3),
];

impl SqliteStore {
  /// Insert [`SAMPLE_QUESTIONS`] if the question table is empty.
  ///
  /// Returns the number of rows inserted (zero when questions already exist).
  pub async fn seed_sample_questions(&self) -> Result<usize> {
    let inserted = self
      .conn
      .call(|conn| {
        let tx = conn.transaction()?;
        let existing: i64 =
          tx.query_row("SELECT COUNT(*) FROM questions", [], |r| r.get(0))?;
        if existing > 0 {
          return Ok(0);
        }
        {
          let mut stmt = tx.prepare(
            "INSERT INTO questions (question, answer, category, difficulty)
             VALUES (?1, ?2, ?3, ?4)",
          )?;
          for (question, answer, category, difficulty) in SAMPLE_QUESTIONS {
            stmt.execute(rusqlite::params![question, answer, category, difficulty])?;
          }
        }
        tx.commit()?;
        Ok(SAMPLE_QUESTIONS.len())
      })
      .await?;

    if inserted > 0 {
      info!(inserted, "seeded sample questions");
    }
    Ok(inserted)
  }
}
