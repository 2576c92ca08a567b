use thiserror::Error;

/// The main error type for brevo-* crates
///
/// HTTP error statuses are not represented here: the client returns them as
/// `ApiResponse::Failure` values. This type only covers failures that stop a
/// request from completing or its result from being read.
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// API key missing when a request is attempted
  #[error("Failed to retrieve API key: {0}")]
  ApiKey(String),

  /// Serialization/Deserialization error
  #[error("Serialization error: {0}")]
  Serde(#[from] serde_json::Error),

  /// HTTP transport error
  #[error("HTTP error: {0}")]
  Http(String),

  /// Invalid argument supplied by the caller
  #[error("Invalid input: {0}")]
  InvalidInput(String),
}

/// Result type alias for brevo-* crates
pub type Result<T> = std::result::Result<T, Error>;
