//! Folders of contact lists

use super::{impl_endpoint_base, EndpointBase, SORT_PARAM};

use crate::pagination::PageQuery;
use crate::transport::{RequestOptions, Transport};
use brevo_core::Result;
use brevo_models::folders::*;
use brevo_models::{ApiResponse, BrevoStatus};
use reqwest::Method;
use std::sync::Arc;
use tracing::instrument;

/// Folder endpoints
pub struct FoldersEndpoints {
  transport: Arc<Transport>,
}

impl FoldersEndpoints {
  /// Create a new folders endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get every folder of the account, following pagination to the end
  #[instrument(skip(self))]
  pub async fn all(&self) -> Result<ApiResponse<GetFoldersResponse>> {
    let query = PageQuery::new("/contacts/folders", "folders").query(SORT_PARAM.0, SORT_PARAM.1);
    self.transport().fetch_all(&query).await
  }

  /// Get every list inside a folder, following pagination to the end
  #[instrument(skip(self))]
  pub async fn lists(&self, folder_id: u64) -> Result<ApiResponse<GetFolderListsResponse>> {
    let query = PageQuery::new(format!("{}/lists", folder_path(folder_id)), "lists")
      .query(SORT_PARAM.0, SORT_PARAM.1);
    self.transport().fetch_all(&query).await
  }

  /// Get the details of one folder
  #[instrument(skip(self))]
  pub async fn details(&self, folder_id: u64) -> Result<ApiResponse<Folder>> {
    self.transport().request(&folder_path(folder_id), RequestOptions::get()).await
  }

  /// Create a new folder
  #[instrument(skip(self, name))]
  pub async fn create(&self, name: impl Into<String>) -> Result<ApiResponse<CreateFolderResponse>> {
    let body = CreateFolderRequest { name: name.into() };
    let options = RequestOptions::json(Method::POST, &body)?;
    self.transport().request("/contacts/folders", options).await
  }

  /// Rename a folder
  #[instrument(skip(self, name))]
  pub async fn update(
    &self,
    folder_id: u64,
    name: impl Into<String>,
  ) -> Result<ApiResponse<BrevoStatus>> {
    let body = UpdateFolderRequest { name: name.into() };
    let options = RequestOptions::json(Method::PUT, &body)?;
    self.transport().request(&folder_path(folder_id), options).await
  }

  /// Delete a folder. Brevo deletes every list inside it as well.
  #[instrument(skip(self))]
  pub async fn delete(&self, folder_id: u64) -> Result<ApiResponse<BrevoStatus>> {
    self.transport().request(&folder_path(folder_id), RequestOptions::delete()).await
  }
}

impl_endpoint_base!(FoldersEndpoints);

fn folder_path(folder_id: u64) -> String {
  format!("/contacts/folders/{}", folder_id)
}
