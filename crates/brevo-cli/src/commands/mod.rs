pub mod contact;
pub mod folders;
pub mod lists;

use anyhow::Result;
use brevo_client::ApiResponse;
use serde::Serialize;
use tracing::warn;

/// Print the envelope as pretty JSON and report whether it was a success
pub fn print_response<T: Serialize>(response: &ApiResponse<T>) -> Result<bool> {
  println!("{}", serde_json::to_string_pretty(response)?);

  if let Some(error) = response.error() {
    warn!("request failed: {}", error);
    return Ok(false);
  }
  Ok(true)
}
