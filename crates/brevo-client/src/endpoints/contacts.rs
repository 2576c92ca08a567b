//! Contacts: create/upsert, lookup, delete, attribute definitions

use super::{impl_endpoint_base, path_segment, EndpointBase};

use crate::transport::{RequestOptions, Transport};
use brevo_core::Result;
use brevo_models::contacts::*;
use brevo_models::{ApiResponse, NoContent};
use reqwest::Method;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Contact endpoints
pub struct ContactsEndpoints {
  transport: Arc<Transport>,
}

impl ContactsEndpoints {
  /// Create a new contacts endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Create a contact, or update it when `update_enabled` is set
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use brevo_client::{BrevoClient, CreateContactRequest};
  /// # async fn run(client: BrevoClient) -> brevo_client::Result<()> {
  /// let request = CreateContactRequest::with_email("jane@example.com")
  ///     .attribute("FIRSTNAME", "Jane")
  ///     .list_ids(vec![2])
  ///     .upsert();
  /// let response = client.contacts().create(&request).await?;
  /// if let Some(error) = response.error() {
  ///     eprintln!("Brevo refused the contact: {}", error);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, contact))]
  pub async fn create(
    &self,
    contact: &CreateContactRequest,
  ) -> Result<ApiResponse<CreateContactResponse>> {
    let options = RequestOptions::json(Method::POST, contact)?;
    self.transport().request("/contacts", options).await
  }

  /// Get a contact by email address or numeric id
  #[instrument(skip(self, identifier))]
  pub async fn get(
    &self,
    identifier: impl Into<ContactIdentifier>,
  ) -> Result<ApiResponse<GetContactResponse>> {
    let identifier = identifier.into();
    debug!("Fetching contact {}", identifier);
    self.transport().request(&contact_path(&identifier), RequestOptions::get()).await
  }

  /// Delete a contact by email address or numeric id
  #[instrument(skip(self, identifier))]
  pub async fn delete(
    &self,
    identifier: impl Into<ContactIdentifier>,
  ) -> Result<ApiResponse<NoContent>> {
    let identifier = identifier.into();
    debug!("Deleting contact {}", identifier);
    self.transport().request(&contact_path(&identifier), RequestOptions::delete()).await
  }

  /// List the contact attribute definitions of the account
  #[instrument(skip(self))]
  pub async fn attributes(&self) -> Result<ApiResponse<ListAttributesResponse>> {
    self.transport().request("/contacts/attributes", RequestOptions::get()).await
  }
}

impl_endpoint_base!(ContactsEndpoints);

fn contact_path(identifier: &ContactIdentifier) -> String {
  match identifier {
    ContactIdentifier::Email(email) => format!("/contacts/{}", path_segment(email)),
    ContactIdentifier::Id(id) => format!("/contacts/{}", id),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_contact_path() {
    assert_eq!(contact_path(&ContactIdentifier::Id(7)), "/contacts/7");
    assert_eq!(
      contact_path(&ContactIdentifier::from("jane@example.com")),
      "/contacts/jane%40example.com"
    );
  }

  #[test]
  fn test_endpoints_creation() {
    let endpoints = ContactsEndpoints::new(Arc::new(Transport::new_mock()));
    assert_eq!(endpoints.transport().base_url(), "https://mock.brevo.test/v3");
  }
}
