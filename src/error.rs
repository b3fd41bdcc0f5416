//! Error types for the fetch-validate-cache pipeline.

use thiserror::Error;

/// Convenience alias for results produced by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Every failure a caller can observe, branchable by kind.
#[derive(Debug, Error)]
pub enum Error {
  /// The endpoint URL was missing or empty when a fetch was attempted.
  #[error("endpoint URL must be configured")]
  Configuration,

  /// The response body was not valid JSON.
  #[error("invalid JSON received from {endpoint}: {source}")]
  Parse {
    endpoint: String,
    #[source]
    source: serde_json::Error,
  },

  /// The parsed JSON did not match the required projects shape.
  #[error(transparent)]
  Validation(#[from] ValidationError),

  /// The network call failed, or something unexpected broke in the pipeline.
  /// The original message is preserved.
  #[error("project fetch failed: {message}")]
  Fetch { message: String },

  /// A cache store failed internally.
  #[error("cache store failed: {message}")]
  Cache { message: String },
}

impl From<reqwest::Error> for Error {
  fn from(err: reqwest::Error) -> Self {
    Error::Fetch {
      message: err.to_string(),
    }
  }
}

/// Shape violations found while validating the projects JSON.
///
/// Validation is all-or-nothing: the first offending element aborts the
/// whole fetch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
  #[error("Projects JSON must be an array")]
  NotAnArray,

  #[error("Project at index {0} must be an object")]
  NotAnObject(usize),

  #[error("Project at index {index} is missing keys: {}", .keys.join(", "))]
  MissingKeys { index: usize, keys: Vec<String> },
}
