//! Structured error types for the crash engine.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
  /// The combined labeled set (or a partition used as a divisor) is empty.
  /// Retrying with the same inputs cannot succeed.
  #[error("empty input: {0}")]
  EmptyInput(String),

  /// A date was listed as both a crash date and a normal date.
  #[error("ambiguous label: {0} appears in both the crash and normal date sets")]
  AmbiguousLabel(NaiveDate),

  #[error("validation: {field}: {reason}")]
  Validation { field: String, reason: String },

  #[error("json: {0}")]
  Json(#[from] serde_json::Error),
}

impl EngineError {
  pub fn validation(field: &str, reason: &str) -> Self {
    Self::Validation {
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }

  pub fn empty_input(msg: impl Into<String>) -> Self {
    Self::EmptyInput(msg.into())
  }
}
