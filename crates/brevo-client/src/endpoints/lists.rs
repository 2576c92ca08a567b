//! Contact lists and list membership

use super::{impl_endpoint_base, EndpointBase, SORT_PARAM};

use crate::pagination::PageQuery;
use crate::transport::{RequestOptions, Transport};
use brevo_core::Result;
use brevo_models::lists::*;
use brevo_models::{ApiResponse, BrevoStatus};
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;
use tracing::instrument;

/// Contact list endpoints
pub struct ListsEndpoints {
  transport: Arc<Transport>,
}

impl ListsEndpoints {
  /// Create a new lists endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Get every list of the account, following pagination to the end
  ///
  /// `count` in the returned body is the number of lists gathered.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use brevo_client::BrevoClient;
  /// # async fn run(client: BrevoClient) -> brevo_client::Result<()> {
  /// let response = client.lists().all().await?;
  /// for list in response.data().map(|d| d.lists.as_slice()).unwrap_or_default() {
  ///     println!("{:>6} {} ({} subscribers)", list.id, list.name, list.unique_subscribers);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn all(&self) -> Result<ApiResponse<GetListsResponse>> {
    let query = PageQuery::new("/contacts/lists", "lists").query(SORT_PARAM.0, SORT_PARAM.1);
    self.transport().fetch_all(&query).await
  }

  /// Get every contact of a list, following pagination to the end
  #[instrument(skip(self))]
  pub async fn contacts(&self, list_id: u64) -> Result<ApiResponse<GetListContactsResponse>> {
    let query = PageQuery::new(format!("/contacts/lists/{}/contacts", list_id), "contacts")
      .query(SORT_PARAM.0, SORT_PARAM.1);
    self.transport().fetch_all(&query).await
  }

  /// Get the details of one list
  #[instrument(skip(self))]
  pub async fn details(&self, list_id: u64) -> Result<ApiResponse<List>> {
    self.transport().request(&list_path(list_id), RequestOptions::get()).await
  }

  /// Create a new list
  #[instrument(skip(self))]
  pub async fn create(&self, list: &CreateListRequest) -> Result<ApiResponse<CreateListResponse>> {
    let options = RequestOptions::json(Method::POST, list)?;
    self.transport().request("/contacts/lists", options).await
  }

  /// Rename a list
  #[instrument(skip(self, name))]
  pub async fn update(
    &self,
    list_id: u64,
    name: impl Into<String>,
  ) -> Result<ApiResponse<BrevoStatus>> {
    let body = UpdateListRequest { name: name.into() };
    let options = RequestOptions::json(Method::PUT, &body)?;
    self.transport().request(&list_path(list_id), options).await
  }

  /// Delete a list. Its contacts are kept.
  #[instrument(skip(self))]
  pub async fn delete(&self, list_id: u64) -> Result<ApiResponse<BrevoStatus>> {
    self.transport().request(&list_path(list_id), RequestOptions::delete()).await
  }

  /// Add existing contacts to a list
  ///
  /// The selector decides which of `emails`, `ids` or `extIds` is sent.
  #[instrument(skip(self, contacts), fields(contacts = contacts.len()))]
  pub async fn add_contacts(
    &self,
    list_id: u64,
    contacts: &ContactSelector,
  ) -> Result<ApiResponse<AddContactsToListResponse>> {
    let options = RequestOptions::json(Method::POST, contacts)?;
    let endpoint = format!("{}/contacts/add", list_path(list_id));
    self.transport().request(&endpoint, options).await
  }

  /// Remove contacts from a list without deleting them
  #[instrument(skip(self, contacts), fields(contacts = contacts.len()))]
  pub async fn remove_contacts(
    &self,
    list_id: u64,
    contacts: &ContactSelector,
  ) -> Result<ApiResponse<AddContactsToListResponse>> {
    let options = RequestOptions::json(Method::POST, contacts)?;
    let endpoint = format!("{}/contacts/remove", list_path(list_id));
    self.transport().request(&endpoint, options).await
  }

  /// Remove every contact from a list
  #[instrument(skip(self))]
  pub async fn remove_all_contacts(
    &self,
    list_id: u64,
  ) -> Result<ApiResponse<AddContactsToListResponse>> {
    let endpoint = format!("{}/contacts/remove", list_path(list_id));
    self.transport().request(&endpoint, RequestOptions::post(json!({ "all": true }))).await
  }
}

impl_endpoint_base!(ListsEndpoints);

fn list_path(list_id: u64) -> String {
  format!("/contacts/lists/{}", list_id)
}
