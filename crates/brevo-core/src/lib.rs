pub mod config;
pub mod error;

pub use config::Config;
pub use error::{Error, Result};

/// Base URL for the Brevo REST API (v3)
pub const BREVO_BASE_URL: &str = "https://api.brevo.com/v3";

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "api-key";

/// Environment variable holding the API key
pub const API_KEY_ENV: &str = "BREVO_API_KEY";

/// Environment variable overriding the base URL
pub const BASE_URL_ENV: &str = "BREVO_BASE_URL";

/// Items requested per page by the pagination aggregator
pub const DEFAULT_PAGE_SIZE: u32 = 50;
