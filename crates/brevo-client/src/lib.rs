//! # brevo-client
//!
//! A typed Brevo (formerly Sendinblue) REST API v3 client for Rust.
//!
//! ## Features
//!
//! - **Uniform Envelope**: every call resolves to `ApiResponse<T>`; HTTP
//!   errors are returned as data, never as `Err`
//! - **Pagination**: collection endpoints are followed to the last page and
//!   returned as one body
//! - **Type Safe**: request and response models from brevo-models
//! - **Configurable**: explicit or environment-based configuration via brevo-core
//!
//! ## Usage
//!
//! ```rust,no_run
//! use brevo_client::{BrevoClient, ContactSelector};
//! use brevo_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BrevoClient::new(Config::from_env())?;
//!
//!     // Connectivity check
//!     let ping = client.ping().await?;
//!     println!("ping status: {}", ping.status());
//!
//!     // Add two contacts to list 7
//!     let selector = ContactSelector::emails(["a@example.com", "b@example.com"]);
//!     let added = client.lists().add_contacts(7, &selector).await?;
//!     if let Some(error) = added.error() {
//!         eprintln!("failed: {}", error);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Methods return `Result<ApiResponse<T>, brevo_core::Error>`. The outer
//! `Err` covers a missing API key, network failures and undecodable success
//! bodies; the inner `ApiResponse::Failure` covers 4xx/5xx answers.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod pagination;
pub mod transport;

// Re-export the main client and common types
pub use brevo_core::{Config, Error, Result};
pub use brevo_models::*;
pub use client::BrevoClient;
pub use pagination::PageQuery;
pub use transport::{RequestOptions, Transport};

// Re-export endpoint modules for direct access if needed
pub use endpoints::{
  account::AccountEndpoints, contacts::ContactsEndpoints, email::EmailEndpoints,
  folders::FoldersEndpoints, lists::ListsEndpoints, sms::SmsEndpoints,
};
