//! Contact and contact attribute models

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Value of a contact attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
  Bool(bool),
  Number(serde_json::Number),
  Text(String),
  List(Vec<AttributeValue>),
}

impl From<&str> for AttributeValue {
  fn from(value: &str) -> Self {
    AttributeValue::Text(value.to_string())
  }
}

impl From<String> for AttributeValue {
  fn from(value: String) -> Self {
    AttributeValue::Text(value)
  }
}

impl From<i64> for AttributeValue {
  fn from(value: i64) -> Self {
    AttributeValue::Number(value.into())
  }
}

impl From<bool> for AttributeValue {
  fn from(value: bool) -> Self {
    AttributeValue::Bool(value)
  }
}

/// Attribute map keyed by attribute name, e.g. `FIRSTNAME`
pub type Attributes = BTreeMap<String, AttributeValue>;

/// A contact as stored by Brevo
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub id: Option<u64>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub sms: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub attributes: Option<Attributes>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub list_ids: Option<Vec<u64>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email_blacklisted: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub sms_blacklisted: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub update_enabled: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub ext_id: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub created_at: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub modified_at: Option<String>,
}

/// Request payload for `POST /contacts`
///
/// With `update_enabled` set, an existing contact with the same email is
/// updated instead of rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub sms: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub attributes: Option<Attributes>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub list_ids: Option<Vec<u64>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub update_enabled: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub email_blacklisted: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub sms_blacklisted: Option<bool>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub ext_id: Option<String>,
}

impl CreateContactRequest {
  /// Request for a contact identified by email
  pub fn with_email(email: impl Into<String>) -> Self {
    CreateContactRequest { email: Some(email.into()), ..Default::default() }
  }

  /// Set one attribute
  pub fn attribute(mut self, name: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
    self.attributes.get_or_insert_with(Attributes::new).insert(name.into(), value.into());
    self
  }

  /// Subscribe the contact to lists on creation
  pub fn list_ids(mut self, list_ids: Vec<u64>) -> Self {
    self.list_ids = Some(list_ids);
    self
  }

  /// Update the contact if it already exists
  pub fn upsert(mut self) -> Self {
    self.update_enabled = Some(true);
    self
  }
}

/// Response of `POST /contacts`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactResponse {
  pub id: u64,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub sms: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub attributes: Option<Attributes>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub created_at: Option<String>,
}

/// Response of `GET /contacts/{identifier}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GetContactResponse {
  #[serde(default)]
  pub id: Option<u64>,
  #[serde(default)]
  pub email: Option<String>,
  #[serde(default)]
  pub sms: Option<String>,
  #[serde(default)]
  pub attributes: Option<Attributes>,
  #[serde(default)]
  pub list_ids: Vec<u64>,
  #[serde(default)]
  pub email_blacklisted: Option<bool>,
  #[serde(default)]
  pub sms_blacklisted: Option<bool>,
  #[serde(default)]
  pub ext_id: Option<String>,
  #[serde(default)]
  pub created_at: Option<String>,
  #[serde(default)]
  pub modified_at: Option<String>,
  #[serde(default)]
  pub statistics: Option<ContactStats>,
}

/// Campaign statistics for one contact
///
/// Brevo reports most counters as arrays of per-campaign events (e.g.
/// `[{"campaignId": 21, "eventTime": "..."}]`), and the exact shape varies by
/// account, so every entry is kept as raw JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactStats {
  #[serde(default)]
  pub messages_sent: Option<Value>,
  #[serde(default)]
  pub delivered: Option<Value>,
  #[serde(default)]
  pub opened: Option<Value>,
  #[serde(default, alias = "click")]
  pub clicked: Option<Value>,
  #[serde(default)]
  pub hard_bounces: Option<Value>,
  #[serde(default)]
  pub soft_bounces: Option<Value>,
  #[serde(default)]
  pub complaints: Option<Value>,
  #[serde(default)]
  pub unsubscriptions: Option<Value>,
  #[serde(default)]
  pub transactional_stats: Option<TransactionalStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionalStats {
  #[serde(default)]
  pub delivered: Option<Value>,
  #[serde(default)]
  pub opened: Option<Value>,
  #[serde(default, alias = "click")]
  pub clicked: Option<Value>,
  #[serde(default)]
  pub soft_bounces: Option<Value>,
  #[serde(default)]
  pub hard_bounces: Option<Value>,
}

/// How a single contact is addressed in a URL path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ContactIdentifier {
  Email(String),
  Id(u64),
}

impl fmt::Display for ContactIdentifier {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      ContactIdentifier::Email(email) => write!(f, "{}", email),
      ContactIdentifier::Id(id) => write!(f, "{}", id),
    }
  }
}

impl From<&str> for ContactIdentifier {
  /// Digit-only strings are treated as numeric ids
  fn from(value: &str) -> Self {
    match value.parse::<u64>() {
      Ok(id) => ContactIdentifier::Id(id),
      Err(_) => ContactIdentifier::Email(value.to_string()),
    }
  }
}

impl From<String> for ContactIdentifier {
  fn from(value: String) -> Self {
    ContactIdentifier::from(value.as_str())
  }
}

impl From<u64> for ContactIdentifier {
  fn from(value: u64) -> Self {
    ContactIdentifier::Id(value)
  }
}

/// Kind of a contact attribute definition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttributeType {
  Text,
  Date,
  Float,
  Boolean,
  Id,
  Category,
  MultipleChoice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeEnumeration {
  pub value: i64,
  pub label: String,
}

/// Definition of one contact attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactAttributeDefinition {
  pub name: String,
  /// Attribute category, e.g. `normal`, `transactional`
  #[serde(default)]
  pub category: Option<String>,
  #[serde(rename = "type", default)]
  pub attribute_type: Option<AttributeType>,
  #[serde(default)]
  pub value: Option<AttributeValue>,
  #[serde(default)]
  pub enumeration: Option<Vec<AttributeEnumeration>>,
  #[serde(default)]
  pub calculated_value: Option<Value>,
  #[serde(default)]
  pub created_at: Option<String>,
  #[serde(default)]
  pub updated_at: Option<String>,
}

/// Response of `GET /contacts/attributes`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListAttributesResponse {
  #[serde(default)]
  pub attributes: Vec<ContactAttributeDefinition>,
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_create_request_omits_unset_fields() {
    let request = CreateContactRequest::with_email("jane@example.com")
      .attribute("FIRSTNAME", "Jane")
      .attribute("AGE", 42i64)
      .list_ids(vec![2, 7])
      .upsert();

    assert_eq!(
      serde_json::to_value(&request).unwrap(),
      json!({
        "email": "jane@example.com",
        "attributes": {"AGE": 42, "FIRSTNAME": "Jane"},
        "listIds": [2, 7],
        "updateEnabled": true
      })
    );
  }

  #[test]
  fn test_get_contact_response() {
    let body = json!({
      "email": "jane@example.com",
      "id": 42,
      "emailBlacklisted": false,
      "smsBlacklisted": false,
      "createdAt": "2017-05-02T16:40:31Z",
      "modifiedAt": "2017-05-02T16:40:31Z",
      "attributes": {"NAME": "Jane", "OPT_IN": true, "TAGS": ["a", 1]},
      "listIds": [40],
      "statistics": {"messagesSent": 3, "transactionalStats": {"delivered": 2}}
    });

    let contact: GetContactResponse = serde_json::from_value(body).unwrap();
    assert_eq!(contact.id, Some(42));
    assert_eq!(contact.list_ids, vec![40]);
    let attributes = contact.attributes.unwrap();
    assert_eq!(attributes.get("OPT_IN"), Some(&AttributeValue::Bool(true)));
    assert!(matches!(attributes.get("TAGS"), Some(AttributeValue::List(items)) if items.len() == 2));
    let stats = contact.statistics.unwrap();
    assert_eq!(stats.messages_sent, Some(json!(3)));
    assert_eq!(stats.transactional_stats.and_then(|t| t.delivered), Some(json!(2)));
  }

  #[test]
  fn test_statistics_as_event_arrays() {
    let body = json!({
      "email": "jane@example.com",
      "id": 42,
      "listIds": [],
      "statistics": {
        "messagesSent": [{"campaignId": 21, "eventTime": "2016-05-03T20:15:13.000+02:00"}],
        "opened": [{"campaignId": 21, "count": 2, "eventTime": "2016-05-03T21:24:56.000+02:00", "ip": "66.249.93.118"}],
        "clicked": [{"campaignId": 21, "links": [{"count": 1, "url": "https://www.brevo.com"}]}],
        "unsubscriptions": {"userUnsubscription": [], "adminUnsubscription": []}
      }
    });

    let contact: GetContactResponse = serde_json::from_value(body).unwrap();
    let stats = contact.statistics.unwrap();
    assert_eq!(stats.messages_sent.as_ref().and_then(Value::as_array).map(Vec::len), Some(1));
    assert_eq!(stats.opened.as_ref().map(|o| o[0]["count"].clone()), Some(json!(2)));
    assert!(stats.clicked.is_some());
    assert!(stats.unsubscriptions.as_ref().is_some_and(Value::is_object));
    assert_eq!(stats.delivered, None);
  }

  #[test]
  fn test_identifier_from_str() {
    assert_eq!(ContactIdentifier::from("17"), ContactIdentifier::Id(17));
    assert_eq!(
      ContactIdentifier::from("a@b.io"),
      ContactIdentifier::Email("a@b.io".to_string())
    );
    assert_eq!(ContactIdentifier::from(5u64).to_string(), "5");
  }

  #[test]
  fn test_attribute_definitions() {
    let body = json!({"attributes": [
      {"name": "FIRSTNAME", "category": "normal", "type": "text"},
      {"name": "PLAN", "category": "category", "type": "category",
       "enumeration": [{"value": 1, "label": "free"}]}
    ]});
    let parsed: ListAttributesResponse = serde_json::from_value(body).unwrap();
    assert_eq!(parsed.attributes.len(), 2);
    assert_eq!(parsed.attributes[0].attribute_type, Some(AttributeType::Text));
    assert_eq!(parsed.attributes[1].enumeration.as_ref().map(Vec::len), Some(1));
  }
}
