//! Transactional SMS models

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmsType {
  Transactional,
  Marketing,
}

/// Request payload for `POST /transactionalSMS/sms`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsRequest {
  /// Alphanumeric sender name, at most 11 characters
  pub sender: String,
  /// Mobile number with country code, e.g. `33689965433`
  pub recipient: String,
  pub content: String,
  #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
  pub sms_type: Option<SmsType>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub tag: Option<String>,
  /// Webhook called for delivery events of this message
  #[serde(skip_serializing_if = "Option::is_none")]
  pub web_url: Option<String>,
}

impl SendSmsRequest {
  pub fn new(
    sender: impl Into<String>,
    recipient: impl Into<String>,
    content: impl Into<String>,
  ) -> Self {
    SendSmsRequest {
      sender: sender.into(),
      recipient: recipient.into(),
      content: content.into(),
      sms_type: None,
      tag: None,
      web_url: None,
    }
  }

  pub fn sms_type(mut self, sms_type: SmsType) -> Self {
    self.sms_type = Some(sms_type);
    self
  }

  pub fn tag(mut self, tag: impl Into<String>) -> Self {
    self.tag = Some(tag.into());
    self
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendSmsResponse {
  pub message_id: serde_json::Value,
  #[serde(default)]
  pub reference: Option<String>,
}
