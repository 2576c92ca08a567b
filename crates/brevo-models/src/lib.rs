//! # brevo-models
//!
//! Data models for Brevo API requests and responses.
//!
//! This crate provides strongly-typed Rust structures mirroring the JSON
//! shapes of the Brevo REST API v3: the response envelope shared by every
//! call, contacts and their attributes, lists, folders, and transactional
//! email and SMS payloads.
//!
//! ## Features
//!
//! - **Uniform Envelope**: `ApiResponse<T>` carries either data or an `ApiError`
//! - **Serde Integration**: camelCase on the wire, optional fields omitted
//! - **Sum Types**: mutually exclusive request variants are explicit enums
//!
//! ## Usage
//!
//! ```ignore
//! use brevo_models::{ApiResponse, GetListsResponse};
//!
//! let response: ApiResponse<GetListsResponse> = client.lists().all().await?;
//! if let Some(lists) = response.data() {
//!     println!("{} lists", lists.count);
//! }
//! ```

#![warn(clippy::all)]

pub mod campaigns;
pub mod common;
pub mod contacts;
pub mod email;
pub mod folders;
pub mod lists;
pub mod sms;
pub mod webhooks;

// Re-export common types for convenience
pub use common::*;

// Re-export all model types
pub use campaigns::*;
pub use contacts::*;
pub use email::*;
pub use folders::*;
pub use lists::*;
pub use sms::*;
pub use webhooks::*;
