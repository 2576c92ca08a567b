//! Configuration management for the Brevo client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;

/// Main configuration struct for the Brevo client
///
/// The API key is optional so a client can be built before credentials are
/// available. Requests made without one fail with [`Error::ApiKey`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
  /// Brevo API key, sent as the `api-key` header
  pub api_key: Option<String>,

  /// Base URL for the Brevo API, including the version path
  pub base_url: String,
}

impl Config {
  /// Create a config with an explicit key and the default base URL
  pub fn new(api_key: impl Into<String>) -> Self {
    Config { api_key: Some(api_key.into()), base_url: crate::BREVO_BASE_URL.to_string() }
  }

  /// Replace the base URL
  pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
    self.base_url = base_url.into();
    self
  }

  /// Load configuration from environment variables
  ///
  /// Reads `BREVO_API_KEY` and `BREVO_BASE_URL`, after loading a `.env` file
  /// when one is present.
  pub fn from_env() -> Self {
    Self::resolve(None, None)
  }

  /// Resolve configuration from explicit values, falling back to the environment
  pub fn resolve(api_key: Option<String>, base_url: Option<String>) -> Self {
    dotenv().ok();

    let api_key =
      api_key.or_else(|| env::var(crate::API_KEY_ENV).ok()).filter(|key| !key.trim().is_empty());

    let base_url = base_url
      .or_else(|| env::var(crate::BASE_URL_ENV).ok())
      .unwrap_or_else(|| crate::BREVO_BASE_URL.to_string());

    Config { api_key, base_url }
  }

  /// The API key, or [`Error::ApiKey`] when none was configured
  pub fn api_key(&self) -> Result<&str> {
    self
      .api_key
      .as_deref()
      .ok_or_else(|| Error::ApiKey(format!("{} not set", crate::API_KEY_ENV)))
  }

  /// Whether an API key is present
  pub fn has_api_key(&self) -> bool {
    self.api_key.is_some()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_config_from_env() {
    env::set_var("BREVO_API_KEY", "test_key");
    let config = Config::from_env();
    assert_eq!(config.api_key().unwrap(), "test_key");
  }

  #[test]
  fn test_explicit_values_win() {
    let config =
      Config::resolve(Some("explicit".to_string()), Some("http://localhost:9999/v3".to_string()));
    assert_eq!(config.api_key.as_deref(), Some("explicit"));
    assert_eq!(config.base_url, "http://localhost:9999/v3");
  }

  #[test]
  fn test_missing_key_is_lazy() {
    let config = Config { api_key: None, base_url: crate::BREVO_BASE_URL.to_string() };
    assert!(!config.has_api_key());
    assert!(matches!(config.api_key(), Err(Error::ApiKey(_))));
  }

  #[test]
  fn test_new_uses_default_base_url() {
    let config = Config::new("abc").with_base_url("https://example.test/v3");
    assert_eq!(config.api_key().unwrap(), "abc");
    assert_eq!(config.base_url, "https://example.test/v3");
    assert_eq!(Config::new("abc").base_url, crate::BREVO_BASE_URL);
  }
}
