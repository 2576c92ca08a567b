//! Contact list models

use crate::contacts::Contact;
use serde::{Deserialize, Serialize};

/// A contact list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct List {
  pub id: u64,
  pub name: String,
  #[serde(default)]
  pub total_subscribers: u64,
  #[serde(default)]
  pub unique_subscribers: u64,
  #[serde(default)]
  pub shared: bool,
  #[serde(default)]
  pub folder_id: Option<u64>,
  #[serde(default)]
  pub created_at: Option<String>,
  #[serde(default)]
  pub dynamic: Option<bool>,
}

/// All lists of the account, aggregated across pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetListsResponse {
  #[serde(default)]
  pub lists: Vec<List>,
  pub count: u64,
}

/// All contacts of one list, aggregated across pages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GetListContactsResponse {
  #[serde(default)]
  pub contacts: Vec<Contact>,
  pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListRequest {
  pub name: String,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub folder_id: Option<u64>,
}

impl CreateListRequest {
  pub fn new(name: impl Into<String>) -> Self {
    CreateListRequest { name: name.into(), folder_id: None }
  }

  pub fn in_folder(mut self, folder_id: u64) -> Self {
    self.folder_id = Some(folder_id);
    self
  }
}

/// Response of `POST /contacts/lists`; the API may return only the id
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateListResponse {
  pub id: u64,
  #[serde(default)]
  pub name: Option<String>,
  #[serde(default)]
  pub total_subscribers: Option<u64>,
  #[serde(default)]
  pub folder_id: Option<u64>,
  #[serde(default)]
  pub created_at: Option<String>,
}

/// Body of `PUT /contacts/lists/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateListRequest {
  pub name: String,
}

/// Contacts to add to, or remove from, a list
///
/// Exactly one addressing scheme is sent per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactSelector {
  Emails(Vec<String>),
  Ids(Vec<u64>),
  ExtIds(Vec<String>),
}

impl ContactSelector {
  pub fn emails<I, S>(emails: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    ContactSelector::Emails(emails.into_iter().map(Into::into).collect())
  }

  pub fn ids(ids: impl IntoIterator<Item = u64>) -> Self {
    ContactSelector::Ids(ids.into_iter().collect())
  }

  pub fn ext_ids<I, S>(ext_ids: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    ContactSelector::ExtIds(ext_ids.into_iter().map(Into::into).collect())
  }

  /// Number of contacts addressed
  pub fn len(&self) -> usize {
    match self {
      ContactSelector::Emails(items) | ContactSelector::ExtIds(items) => items.len(),
      ContactSelector::Ids(items) => items.len(),
    }
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }
}

/// A contact reference echoed back by list membership operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContactRef {
  Id(u64),
  Email(String),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MembershipOutcome {
  #[serde(default)]
  pub success: Vec<ContactRef>,
  #[serde(default)]
  pub failure: Vec<ContactRef>,
  /// Number of contacts processed, reported for `all` removals
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub total: Option<u64>,
}

/// Response of the list add/remove contacts operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddContactsToListResponse {
  pub contacts: MembershipOutcome,
}
