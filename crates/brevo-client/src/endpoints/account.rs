//! Account information

use super::{impl_endpoint_base, EndpointBase};

use crate::transport::{RequestOptions, Transport};
use brevo_core::Result;
use brevo_models::ApiResponse;
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// Account endpoints
pub struct AccountEndpoints {
  transport: Arc<Transport>,
}

impl AccountEndpoints {
  /// Create a new account endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// Check connectivity and credentials with `GET /account`
  ///
  /// The account body is returned untyped.
  #[instrument(skip(self))]
  pub async fn ping(&self) -> Result<ApiResponse<Value>> {
    self.transport().request("/account", RequestOptions::get()).await
  }
}

impl_endpoint_base!(AccountEndpoints);
