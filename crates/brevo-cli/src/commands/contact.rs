use super::print_response;
use anyhow::Result;
use brevo_client::BrevoClient;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct ContactCommand {
  #[command(subcommand)]
  command: ContactSubcommands,
}

#[derive(Subcommand, Debug)]
enum ContactSubcommands {
  /// Show one contact
  Get {
    /// Email address or numeric contact id
    identifier: String,
  },

  /// Delete one contact
  Delete {
    /// Email address or numeric contact id
    identifier: String,
  },
}

pub async fn execute(cmd: ContactCommand, client: &BrevoClient) -> Result<bool> {
  match cmd.command {
    ContactSubcommands::Get { identifier } => {
      print_response(&client.contacts().get(identifier).await?)
    }
    ContactSubcommands::Delete { identifier } => {
      print_response(&client.contacts().delete(identifier).await?)
    }
  }
}
