//! Transactional email models

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailRecipient {
  pub email: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
}

impl EmailRecipient {
  pub fn new(email: impl Into<String>) -> Self {
    EmailRecipient { email: email.into(), name: None }
  }

  pub fn named(email: impl Into<String>, name: impl Into<String>) -> Self {
    EmailRecipient { email: email.into(), name: Some(name.into()) }
  }
}

/// Sender of a transactional email; `id` selects a registered sender
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailSender {
  pub email: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<u64>,
}

impl From<EmailRecipient> for EmailSender {
  fn from(recipient: EmailRecipient) -> Self {
    EmailSender { email: recipient.email, name: recipient.name, id: None }
  }
}

/// Attachment given either by absolute URL or base64 content
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAttachment {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub url: Option<String>,
  /// Base64 encoded file content
  #[serde(skip_serializing_if = "Option::is_none")]
  pub content: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
}

/// Template parameter value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
  Bool(bool),
  Number(serde_json::Number),
  Text(String),
}

impl From<&str> for ParamValue {
  fn from(value: &str) -> Self {
    ParamValue::Text(value.to_string())
  }
}

impl From<String> for ParamValue {
  fn from(value: String) -> Self {
    ParamValue::Text(value)
  }
}

impl From<i64> for ParamValue {
  fn from(value: i64) -> Self {
    ParamValue::Number(value.into())
  }
}

impl From<bool> for ParamValue {
  fn from(value: bool) -> Self {
    ParamValue::Bool(value)
  }
}

/// Request payload for `POST /smtp/email`
///
/// The body comes from `html_content`/`text_content` or from a stored
/// template selected by `template_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailRequest {
  pub sender: EmailSender,
  pub to: Vec<EmailRecipient>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub cc: Option<Vec<EmailRecipient>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub bcc: Option<Vec<EmailRecipient>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reply_to: Option<EmailRecipient>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub subject: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub html_content: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub text_content: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub template_id: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub params: Option<BTreeMap<String, ParamValue>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub headers: Option<BTreeMap<String, String>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub attachment: Option<Vec<EmailAttachment>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub tags: Option<Vec<String>>,
}

impl SendEmailRequest {
  pub fn new(sender: impl Into<EmailSender>, to: Vec<EmailRecipient>) -> Self {
    SendEmailRequest {
      sender: sender.into(),
      to,
      cc: None,
      bcc: None,
      reply_to: None,
      subject: None,
      html_content: None,
      text_content: None,
      template_id: None,
      params: None,
      headers: None,
      attachment: None,
      tags: None,
    }
  }

  pub fn subject(mut self, subject: impl Into<String>) -> Self {
    self.subject = Some(subject.into());
    self
  }

  pub fn html(mut self, html: impl Into<String>) -> Self {
    self.html_content = Some(html.into());
    self
  }

  pub fn text(mut self, text: impl Into<String>) -> Self {
    self.text_content = Some(text.into());
    self
  }

  /// Render a stored template instead of inline content
  pub fn template(mut self, template_id: u64) -> Self {
    self.template_id = Some(template_id);
    self
  }

  pub fn param(mut self, name: impl Into<String>, value: impl Into<ParamValue>) -> Self {
    self.params.get_or_insert_with(BTreeMap::new).insert(name.into(), value.into());
    self
  }

  pub fn cc(mut self, recipient: EmailRecipient) -> Self {
    self.cc.get_or_insert_with(Vec::new).push(recipient);
    self
  }

  pub fn bcc(mut self, recipient: EmailRecipient) -> Self {
    self.bcc.get_or_insert_with(Vec::new).push(recipient);
    self
  }

  pub fn reply_to(mut self, recipient: EmailRecipient) -> Self {
    self.reply_to = Some(recipient);
    self
  }

  pub fn attach(mut self, attachment: EmailAttachment) -> Self {
    self.attachment.get_or_insert_with(Vec::new).push(attachment);
    self
  }

  pub fn tag(mut self, tag: impl Into<String>) -> Self {
    self.tags.get_or_insert_with(Vec::new).push(tag.into());
    self
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendEmailResponse {
  pub message_id: String,
}
