//! Transactional SMS

use super::{impl_endpoint_base, EndpointBase};

use crate::transport::{RequestOptions, Transport};
use brevo_core::Result;
use brevo_models::sms::{SendSmsRequest, SendSmsResponse};
use brevo_models::ApiResponse;
use reqwest::Method;
use std::sync::Arc;
use tracing::instrument;

/// Transactional SMS endpoints
pub struct SmsEndpoints {
  transport: Arc<Transport>,
}

impl SmsEndpoints {
  /// Create a new transactional SMS endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Send a transactional SMS
  #[instrument(skip(self, sms), fields(sender = %sms.sender))]
  pub async fn send(&self, sms: &SendSmsRequest) -> Result<ApiResponse<SendSmsResponse>> {
    let options = RequestOptions::json(Method::POST, sms)?;
    self.transport().request("/transactionalSMS/sms", options).await
  }
}

impl_endpoint_base!(SmsEndpoints);
