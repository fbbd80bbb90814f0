//! Fixed-size pagination over the id-ordered question list.

/// Number of questions returned per page.
pub const QUESTIONS_PER_PAGE: i64 = 10;

/// A 1-based page number as requested by a client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
  pub number: i64,
}

/// The row range a page covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
  pub offset: i64,
  pub limit:  i64,
}

impl PageRequest {
  pub fn new(number: i64) -> Self { Self { number } }

  /// Rows covered by this page. `None` for page numbers below 1, which
  /// select nothing.
  pub fn window(&self) -> Option<Window> {
    if self.number < 1 {
      return None;
    }
    Some(Window {
      offset: (self.number - 1).saturating_mul(QUESTIONS_PER_PAGE),
      limit:  QUESTIONS_PER_PAGE,
    })
  }
}

impl Default for PageRequest {
  fn default() -> Self { Self::new(1) }
}
