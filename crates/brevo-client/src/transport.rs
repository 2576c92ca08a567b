//! HTTP transport layer for Brevo API requests

use brevo_core::{Config, Error, Result, API_KEY_ENV, API_KEY_HEADER};
use brevo_models::{ApiError, ApiResponse};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::{debug, error, instrument, warn};
use url::Url;

/// Method, body and extra headers for a single request
#[derive(Debug, Clone)]
pub struct RequestOptions {
  /// HTTP method
  pub method: Method,
  /// JSON body, sent only when present
  pub body: Option<Value>,
  /// Headers merged over the defaults
  pub headers: HeaderMap,
}

impl RequestOptions {
  /// Options for `method` with no body and no extra headers
  pub fn new(method: Method) -> Self {
    Self { method, body: None, headers: HeaderMap::new() }
  }

  /// A plain `GET`
  pub fn get() -> Self {
    Self::new(Method::GET)
  }

  /// A plain `DELETE`
  pub fn delete() -> Self {
    Self::new(Method::DELETE)
  }

  /// A `POST` carrying `body`
  pub fn post(body: Value) -> Self {
    Self { body: Some(body), ..Self::new(Method::POST) }
  }

  /// A `PUT` carrying `body`
  pub fn put(body: Value) -> Self {
    Self { body: Some(body), ..Self::new(Method::PUT) }
  }

  /// Serialize a request model as the JSON body
  pub fn json<B>(method: Method, body: &B) -> Result<Self>
  where
    B: Serialize + ?Sized,
  {
    Ok(Self { body: Some(serde_json::to_value(body)?), ..Self::new(method) })
  }

  /// Add a header, replacing any default with the same name
  pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
    self.headers.insert(name, value);
    self
  }
}

/// HTTP transport layer for making requests to the Brevo API
///
/// Holds the immutable base URL and API key captured at construction and a
/// single `reqwest::Client`. Requests are never retried.
pub struct Transport {
  client: Client,
  base_url: String,
  api_key: Option<String>,
}

impl Transport {
  /// Create a new transport instance
  ///
  /// A missing API key is logged, not rejected; requests fail with
  /// [`Error::ApiKey`] until one is configured.
  pub fn new(config: &Config) -> Result<Self> {
    let base_url = config.base_url.trim_end_matches('/').to_string();
    Url::parse(&base_url)
      .map_err(|e| Error::Config(format!("Invalid base URL '{}': {}", base_url, e)))?;

    let client = Client::builder()
      .user_agent(concat!("brevo-client/", env!("CARGO_PKG_VERSION")))
      .build()
      .map_err(|e| Error::Config(format!("Failed to create HTTP client: {}", e)))?;

    if !config.has_api_key() {
      warn!("{} not set. API calls will fail.", API_KEY_ENV);
    }

    Ok(Self { client, base_url, api_key: config.api_key.clone() })
  }

  /// Create a mock transport for testing
  #[cfg(test)]
  pub fn new_mock() -> Self {
    Self {
      client: Client::new(),
      base_url: "https://mock.brevo.test/v3".to_string(),
      api_key: Some("test_key".to_string()),
    }
  }

  /// Perform one request and decode a successful body into `T`
  ///
  /// HTTP error statuses come back as [`ApiResponse::Failure`]. `Err` is
  /// reserved for a missing API key, transport failures, and 2xx bodies that
  /// do not match `T`.
  pub async fn request<T>(&self, endpoint: &str, options: RequestOptions) -> Result<ApiResponse<T>>
  where
    T: DeserializeOwned,
  {
    let response = self.fetch_raw(endpoint, options).await?;
    Ok(response.decode()?)
  }

  /// Perform one request and normalize the response without typing the body
  #[instrument(skip(self, options), fields(method = %options.method))]
  pub async fn fetch_raw(
    &self,
    endpoint: &str,
    options: RequestOptions,
  ) -> Result<ApiResponse<Value>> {
    let api_key = self
      .api_key
      .as_deref()
      .ok_or_else(|| Error::ApiKey(format!("{} not set", API_KEY_ENV)))?;

    let RequestOptions { method, body, headers } = options;
    let url = self.build_url(endpoint);
    let headers = build_headers(api_key, &headers)?;
    debug!("Making {} request to: {}", method, url);

    let mut request = self.client.request(method, &url).headers(headers);
    if let Some(body) = &body {
      request = request.body(serde_json::to_vec(body)?);
    }

    let response = request.send().await.map_err(|e| {
      error!("Request to {} failed: {}", url, e);
      Error::Http(format!("Request failed: {}", e))
    })?;

    let status = response.status();
    let bytes = response
      .bytes()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

    debug!("Response status {} with {} bytes", status, bytes.len());
    #[cfg(feature = "debug-logging")]
    debug!("Response body: {}", String::from_utf8_lossy(&bytes));

    Ok(normalize(status, parse_body(&bytes)))
  }

  /// Build the full URL for an endpoint path
  fn build_url(&self, endpoint: &str) -> String {
    if endpoint.starts_with('/') {
      format!("{}{}", self.base_url, endpoint)
    } else {
      format!("{}/{}", self.base_url, endpoint)
    }
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Whether requests can be sent at all
  pub fn has_api_key(&self) -> bool {
    self.api_key.is_some()
  }
}

impl fmt::Debug for Transport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Transport")
      .field("base_url", &self.base_url)
      .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
      .finish()
  }
}

/// Default headers merged with the caller's; the API key always wins
fn build_headers(api_key: &str, extra: &HeaderMap) -> Result<HeaderMap> {
  let api_key_header = HeaderName::from_static(API_KEY_HEADER);

  let mut headers = HeaderMap::new();
  headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

  for name in extra.keys() {
    if *name == api_key_header {
      warn!("Ignoring caller-supplied {} header", API_KEY_HEADER);
      continue;
    }
    headers.remove(name);
    for value in extra.get_all(name) {
      headers.append(name.clone(), value.clone());
    }
  }

  let mut key = HeaderValue::from_str(api_key)
    .map_err(|_| Error::Config("API key contains characters not valid in a header".to_string()))?;
  key.set_sensitive(true);
  headers.insert(api_key_header, key);

  Ok(headers)
}

/// Parse a response body as JSON; empty or non-JSON bodies are absent
fn parse_body(bytes: &[u8]) -> Option<Value> {
  serde_json::from_slice::<Value>(bytes).ok().filter(|value| !value.is_null())
}

/// Map a status and parsed body onto the response envelope
fn normalize(status: StatusCode, body: Option<Value>) -> ApiResponse<Value> {
  let code = status.as_u16();

  if status.is_success() {
    return ApiResponse::success(code, body);
  }

  warn!("Request failed with status: {}", status);
  let reason = status.canonical_reason().unwrap_or("Unknown Status");
  ApiResponse::failure(ApiError::from_response(code, reason, body))
}
