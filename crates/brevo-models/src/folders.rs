//! Folder models. Folders group contact lists.

use crate::lists::List;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Folder {
  pub id: u64,
  pub name: String,
  #[serde(default)]
  pub unique_subscribers: u64,
  #[serde(default)]
  pub total_subscribers: Option<u64>,
  #[serde(default)]
  pub total_blacklisted: Option<u64>,
}

/// All folders of the account, aggregated across pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetFoldersResponse {
  #[serde(default)]
  pub folders: Vec<Folder>,
  pub count: u64,
}

/// All lists of one folder, aggregated across pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetFolderListsResponse {
  #[serde(default)]
  pub lists: Vec<List>,
  pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFolderRequest {
  pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateFolderResponse {
  pub id: u64,
}

/// Body of `PUT /contacts/folders/{id}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateFolderRequest {
  pub name: String,
}
