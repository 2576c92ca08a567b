//! Transactional email

use super::{impl_endpoint_base, EndpointBase};

use crate::transport::{RequestOptions, Transport};
use brevo_core::Result;
use brevo_models::email::{SendEmailRequest, SendEmailResponse};
use brevo_models::ApiResponse;
use reqwest::Method;
use std::sync::Arc;
use tracing::instrument;

/// Transactional email endpoints
pub struct EmailEndpoints {
  transport: Arc<Transport>,
}

impl EmailEndpoints {
  /// Create a new transactional email endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Send a transactional email
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # use brevo_client::{BrevoClient, EmailRecipient, SendEmailRequest};
  /// # async fn run(client: BrevoClient) -> brevo_client::Result<()> {
  /// let email = SendEmailRequest::new(
  ///     EmailRecipient::named("orders@shop.io", "Shop"),
  ///     vec![EmailRecipient::new("jane@example.com")],
  /// )
  /// .template(12)
  /// .param("ORDER", "A-1001");
  ///
  /// let response = client.email().send(&email).await?;
  /// if let Some(sent) = response.data() {
  ///     println!("queued as {}", sent.message_id);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self, email), fields(recipients = email.to.len()))]
  pub async fn send(&self, email: &SendEmailRequest) -> Result<ApiResponse<SendEmailResponse>> {
    let options = RequestOptions::json(Method::POST, email)?;
    self.transport().request("/smtp/email", options).await
  }
}

impl_endpoint_base!(EmailEndpoints);
