//! Transactional email webhook payloads
//!
//! These are the shapes Brevo posts to a configured webhook URL. The client
//! never receives them itself; they are provided for applications that run
//! their own receiver.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EmailEventKind {
  Delivered,
  Opened,
  Clicked,
  HardBounce,
  SoftBounce,
  Spam,
  InvalidEmail,
  Deferred,
  Blocked,
  Unsubscribed,
  Error,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailWebhookEvent {
  pub event: EmailEventKind,
  pub email: String,
  pub id: serde_json::Value,
  pub date: String,
  #[serde(default)]
  pub subject: Option<String>,
  #[serde(default)]
  pub tag: Option<String>,
  #[serde(rename = "message-id", alias = "messageId", default)]
  pub message_id: Option<String>,
  #[serde(default)]
  pub reason: Option<String>,
  #[serde(rename = "sending_ip", alias = "sendingIp", default)]
  pub sending_ip: Option<String>,
  #[serde(default)]
  pub ts: Option<i64>,
  #[serde(rename = "ts_event", default)]
  pub ts_event: Option<i64>,
}

impl EmailWebhookEvent {
  /// When the event happened, from the `ts_event` unix timestamp
  pub fn occurred_at(&self) -> Option<DateTime<Utc>> {
    self.ts_event.or(self.ts).and_then(|ts| DateTime::from_timestamp(ts, 0))
  }

  /// Bounces, spam reports, blocks and invalid addresses
  pub fn is_failure(&self) -> bool {
    matches!(
      self.event,
      EmailEventKind::HardBounce
        | EmailEventKind::SoftBounce
        | EmailEventKind::Spam
        | EmailEventKind::InvalidEmail
        | EmailEventKind::Blocked
        | EmailEventKind::Error
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_parse_hard_bounce() {
    let event: EmailWebhookEvent = serde_json::from_value(json!({
      "event": "hardBounce",
      "email": "jane@example.com",
      "id": 26224,
      "date": "2024-03-01 10:00:00",
      "message-id": "<201798300811.5787683@relay.domain.com>",
      "reason": "mailbox does not exist",
      "ts_event": 1709283600
    }))
    .unwrap();

    assert_eq!(event.event, EmailEventKind::HardBounce);
    assert!(event.is_failure());
    assert_eq!(event.occurred_at().map(|t| t.timestamp()), Some(1709283600));
  }

  #[test]
  fn test_delivered_is_not_failure() {
    let event: EmailWebhookEvent = serde_json::from_value(json!({
      "event": "delivered", "email": "a@b.io", "id": "x", "date": "2024-03-01"
    }))
    .unwrap();
    assert!(!event.is_failure());
    assert!(event.occurred_at().is_none());
  }
}
