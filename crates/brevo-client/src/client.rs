/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! The [`BrevoClient`] facade over the endpoint groups

use crate::endpoints::{
  account::AccountEndpoints, contacts::ContactsEndpoints, email::EmailEndpoints,
  folders::FoldersEndpoints, lists::ListsEndpoints, sms::SmsEndpoints,
};
use crate::pagination::PageQuery;
use crate::transport::{RequestOptions, Transport};
use brevo_core::{Config, Result};
use brevo_models::ApiResponse;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;

/// Main Brevo API client
///
/// Provides access to the Brevo endpoints through organized endpoint groups.
/// Every call resolves to an [`ApiResponse`]: HTTP error statuses are data,
/// not `Err`. The base URL and API key are fixed at construction.
///
/// # Examples
///
/// ```ignore
/// use brevo_client::BrevoClient;
/// use brevo_core::Config;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = BrevoClient::new(Config::from_env())?;
///
///     let lists = client.lists().all().await?;
///     match lists.into_result() {
///         Ok(Some(lists)) => println!("{} lists", lists.count),
///         Ok(None) => println!("no body"),
///         Err(error) => eprintln!("Brevo error: {}", error),
///     }
///
///     Ok(())
/// }
/// ```
pub struct BrevoClient {
  transport: Arc<Transport>,
}

impl BrevoClient {
  /// Create a new Brevo API client
  ///
  /// # Arguments
  ///
  /// * `config` - Configuration containing API key and base URL
  ///
  /// # Errors
  ///
  /// Returns an error if the base URL is invalid or the HTTP client cannot
  /// be created. A missing API key is not an error here.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// use brevo_client::BrevoClient;
  /// use brevo_core::Config;
  ///
  /// let config = Config::new("xkeysib-...");
  /// let client = BrevoClient::new(config).expect("Failed to create client");
  /// ```
  pub fn new(config: Config) -> Result<Self> {
    let transport = Arc::new(Transport::new(&config)?);
    Ok(Self { transport })
  }

  /// Create a client from `BREVO_API_KEY` and `BREVO_BASE_URL`
  pub fn from_env() -> Result<Self> {
    Self::new(Config::from_env())
  }

  /// Get access to contact endpoints
  pub fn contacts(&self) -> ContactsEndpoints {
    ContactsEndpoints::new(self.transport.clone())
  }

  /// Get access to contact list endpoints
  ///
  /// # Examples
  ///
  /// ```ignore
  /// # let client = BrevoClient::from_env()?;
  /// let lists = client.lists().all().await?;
  /// let members = client.lists().contacts(7).await?;
  /// # Ok::<(), brevo_core::Error>(())
  /// ```
  pub fn lists(&self) -> ListsEndpoints {
    ListsEndpoints::new(self.transport.clone())
  }

  /// Get access to folder endpoints
  pub fn folders(&self) -> FoldersEndpoints {
    FoldersEndpoints::new(self.transport.clone())
  }

  /// Get access to transactional email endpoints
  pub fn email(&self) -> EmailEndpoints {
    EmailEndpoints::new(self.transport.clone())
  }

  /// Get access to transactional SMS endpoints
  pub fn sms(&self) -> SmsEndpoints {
    SmsEndpoints::new(self.transport.clone())
  }

  /// Get access to account endpoints
  pub fn account(&self) -> AccountEndpoints {
    AccountEndpoints::new(self.transport.clone())
  }

  /// Ping the API (`GET /account`)
  pub async fn ping(&self) -> Result<ApiResponse<Value>> {
    self.account().ping().await
  }

  /// Call an endpoint that has no dedicated binding
  pub async fn request<T>(&self, endpoint: &str, options: RequestOptions) -> Result<ApiResponse<T>>
  where
    T: DeserializeOwned,
  {
    self.transport.request(endpoint, options).await
  }

  /// Aggregate a paginated collection that has no dedicated binding
  pub async fn fetch_all<T>(&self, query: &PageQuery) -> Result<ApiResponse<T>>
  where
    T: DeserializeOwned,
  {
    self.transport.fetch_all(query).await
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    self.transport.base_url()
  }
}

impl std::fmt::Debug for BrevoClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    f.debug_struct("BrevoClient").field("transport", &self.transport).finish()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_client_creation() {
    let config = Config::new("test_key");
    let client = BrevoClient::new(config).expect("Failed to create client");
    assert_eq!(client.base_url(), brevo_core::BREVO_BASE_URL);
  }

  #[test]
  fn test_client_without_key_still_builds() {
    let config = Config { api_key: None, base_url: "http://127.0.0.1:1/v3".to_string() };
    let client = BrevoClient::new(config).expect("Failed to create client");
    assert!(format!("{:?}", client).contains("api_key: None"));
  }

  #[test]
  fn test_debug_redacts_key() {
    let client = BrevoClient::new(Config::new("xkeysib-secret")).unwrap();
    let rendered = format!("{:?}", client);
    assert!(!rendered.contains("xkeysib-secret"));
    assert!(rendered.contains("<redacted>"));
  }
}
