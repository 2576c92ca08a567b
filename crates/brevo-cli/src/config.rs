use anyhow::{bail, Result};
use brevo_client::Config;

/// Build the client configuration from the global flags
///
/// Flags win over the environment. A key is required up front since every
/// subcommand talks to the API.
pub fn resolve(api_key: Option<String>, base_url: Option<String>) -> Result<Config> {
  let config = Config::resolve(api_key, base_url);

  if !config.has_api_key() {
    bail!("no API key: pass --api-key or set BREVO_API_KEY");
  }

  Ok(config)
}
