/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
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

//! Envelope and status types shared by every Brevo API call

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Uniform result of a Brevo API call
///
/// `Success` holds the parsed body (absent for empty or non-JSON bodies such
/// as `204 No Content`); `Failure` holds the normalized error. Both carry the
/// HTTP status. Serialized untagged, so the JSON form is
/// `{"status": .., "data": ..}` or `{"status": .., "error": ..}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
  /// Non-2xx HTTP status
  Failure {
    /// HTTP status code
    status: u16,
    /// Normalized error body
    error: ApiError,
  },

  /// 2xx HTTP status
  Success {
    /// HTTP status code
    status: u16,
    /// Parsed response body
    data: Option<T>,
  },
}

impl<T> ApiResponse<T> {
  /// Build a success envelope
  pub fn success(status: u16, data: Option<T>) -> Self {
    ApiResponse::Success { status, data }
  }

  /// Build a failure envelope; the status is taken from the error
  pub fn failure(error: ApiError) -> Self {
    ApiResponse::Failure { status: error.status, error }
  }

  /// HTTP status code of the response
  pub fn status(&self) -> u16 {
    match self {
      ApiResponse::Success { status, .. } | ApiResponse::Failure { status, .. } => *status,
    }
  }

  pub fn is_success(&self) -> bool {
    matches!(self, ApiResponse::Success { .. })
  }

  /// Response body for successful calls that returned one
  pub fn data(&self) -> Option<&T> {
    match self {
      ApiResponse::Success { data, .. } => data.as_ref(),
      ApiResponse::Failure { .. } => None,
    }
  }

  pub fn into_data(self) -> Option<T> {
    match self {
      ApiResponse::Success { data, .. } => data,
      ApiResponse::Failure { .. } => None,
    }
  }

  /// The error for failed calls
  pub fn error(&self) -> Option<&ApiError> {
    match self {
      ApiResponse::Success { .. } => None,
      ApiResponse::Failure { error, .. } => Some(error),
    }
  }

  /// Convert into a standard `Result`, dropping the success status
  pub fn into_result(self) -> Result<Option<T>, ApiError> {
    match self {
      ApiResponse::Success { data, .. } => Ok(data),
      ApiResponse::Failure { error, .. } => Err(error),
    }
  }

  /// Transform the success payload, keeping status and errors intact
  pub fn map<U, F>(self, f: F) -> ApiResponse<U>
  where
    F: FnOnce(T) -> U,
  {
    match self {
      ApiResponse::Success { status, data } => ApiResponse::Success { status, data: data.map(f) },
      ApiResponse::Failure { status, error } => ApiResponse::Failure { status, error },
    }
  }
}

impl ApiResponse<Value> {
  /// Decode an untyped payload into a model type
  ///
  /// A `null` payload stays absent. Failures pass through untouched.
  pub fn decode<T>(self) -> serde_json::Result<ApiResponse<T>>
  where
    T: DeserializeOwned,
  {
    match self {
      ApiResponse::Success { status, data } => {
        let data = match data {
          None | Some(Value::Null) => None,
          Some(value) => Some(serde_json::from_value(value)?),
        };
        Ok(ApiResponse::Success { status, data })
      }
      ApiResponse::Failure { status, error } => Ok(ApiResponse::Failure { status, error }),
    }
  }
}

/// Normalized error for a non-2xx response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
  /// HTTP status code
  pub status: u16,

  /// Body `message`, or the status reason phrase when the body has none
  pub message: String,

  /// Machine-readable code from the body, e.g. `"invalid_parameter"`
  #[serde(skip_serializing_if = "Option::is_none")]
  pub code: Option<ErrorCode>,

  /// Raw parsed error body
  #[serde(skip_serializing_if = "Option::is_none")]
  pub details: Option<Value>,
}

impl ApiError {
  /// Build the error for a failed response
  ///
  /// `reason` is the standard reason phrase for `status`; it is used when the
  /// body carries no non-empty `message` string.
  pub fn from_response(status: u16, reason: &str, body: Option<Value>) -> Self {
    let body = body.filter(|value| !value.is_null());

    let message = body
      .as_ref()
      .and_then(|value| value.get("message"))
      .and_then(Value::as_str)
      .filter(|message| !message.is_empty())
      .unwrap_or(reason)
      .to_string();

    let code = body
      .as_ref()
      .and_then(|value| value.get("code"))
      .and_then(|code| serde_json::from_value(code.clone()).ok());

    ApiError { status, message, code, details: body }
  }
}

impl fmt::Display for ApiError {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match &self.code {
      Some(code) => write!(f, "HTTP {} ({}): {}", self.status, code, self.message),
      None => write!(f, "HTTP {}: {}", self.status, self.message),
    }
  }
}

impl std::error::Error for ApiError {}

/// Error code as sent by the API, textual or numeric
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ErrorCode {
  Number(i64),
  Text(String),
}

impl fmt::Display for ErrorCode {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ErrorCode::Number(code) => write!(f, "{}", code),
      ErrorCode::Text(code) => write!(f, "{}", code),
    }
  }
}

/// Payload of endpoints documented to return no body
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoContent {}

/// Status acknowledgement returned by update and delete operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrevoStatus {
  pub code: u16,
  pub message: String,
}

impl BrevoStatus {
  /// Status for one of the codes the API documents
  pub fn from_code(code: u16) -> Option<Self> {
    status_message(code).map(|message| BrevoStatus { code, message: message.to_string() })
  }
}

/// Reason phrase for the status codes the Brevo API documents
pub fn status_message(code: u16) -> Option<&'static str> {
  let message = match code {
    200 => "OK",
    201 => "Created",
    202 => "Accepted",
    204 => "No Content",
    400 => "Bad Request",
    401 => "Unauthorized",
    403 => "Forbidden",
    404 => "Not Found",
    429 => "Too Many Requests",
    500 => "Internal Server Error",
    _ => return None,
  };
  Some(message)
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_error_prefers_body_message() {
    let body = json!({"code": "invalid_parameter", "message": "email is not valid"});
    let error = ApiError::from_response(400, "Bad Request", Some(body.clone()));

    assert_eq!(error.status, 400);
    assert_eq!(error.message, "email is not valid");
    assert_eq!(error.code, Some(ErrorCode::Text("invalid_parameter".to_string())));
    assert_eq!(error.details, Some(body));
  }

  #[test]
  fn test_error_falls_back_to_reason() {
    let error = ApiError::from_response(404, "Not Found", None);
    assert_eq!(error.message, "Not Found");
    assert!(error.code.is_none());
    assert!(error.details.is_none());

    let empty_message = ApiError::from_response(500, "Internal Server Error", Some(json!({"message": ""})));
    assert_eq!(empty_message.message, "Internal Server Error");
  }

  #[test]
  fn test_numeric_error_code() {
    let error = ApiError::from_response(429, "Too Many Requests", Some(json!({"code": 42})));
    assert_eq!(error.code, Some(ErrorCode::Number(42)));
    assert_eq!(error.to_string(), "HTTP 429 (42): Too Many Requests");
  }

  #[test]
  fn test_envelope_shape() {
    let ok: ApiResponse<Value> = ApiResponse::success(200, Some(json!({"id": 1})));
    assert_eq!(serde_json::to_value(&ok).unwrap(), json!({"status": 200, "data": {"id": 1}}));

    let failed: ApiResponse<Value> = ApiResponse::failure(ApiError::from_response(401, "Unauthorized", None));
    assert_eq!(
      serde_json::to_value(&failed).unwrap(),
      json!({"status": 401, "error": {"status": 401, "message": "Unauthorized"}})
    );
  }

  #[test]
  fn test_envelope_deserializes_failure_first() {
    let parsed: ApiResponse<Value> =
      serde_json::from_value(json!({"status": 403, "error": {"status": 403, "message": "Forbidden"}}))
        .unwrap();
    assert!(!parsed.is_success());
    assert_eq!(parsed.error().map(|e| e.message.as_str()), Some("Forbidden"));
  }

  #[test]
  fn test_decode_null_payload() {
    let response: ApiResponse<Value> = ApiResponse::success(204, Some(Value::Null));
    let decoded: ApiResponse<BrevoStatus> = response.decode().unwrap();
    assert_eq!(decoded.status(), 204);
    assert!(decoded.data().is_none());
  }

  #[test]
  fn test_status_table() {
    assert_eq!(status_message(429), Some("Too Many Requests"));
    assert_eq!(status_message(418), None);
    assert_eq!(
      BrevoStatus::from_code(204),
      Some(BrevoStatus { code: 204, message: "No Content".to_string() })
    );
  }
}
