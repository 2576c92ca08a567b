use super::print_response;
use anyhow::Result;
use brevo_client::BrevoClient;
use clap::{Args, Subcommand};

#[derive(Args, Debug)]
pub struct FoldersCommand {
  #[command(subcommand)]
  command: FoldersSubcommands,
}

#[derive(Subcommand, Debug)]
enum FoldersSubcommands {
  /// Every folder of the account
  All,

  /// Details of one folder
  Details { id: u64 },

  /// Every list inside a folder
  Lists { id: u64 },

  /// Create a folder
  Create { name: String },

  /// Delete a folder and the lists inside it
  Delete { id: u64 },
}

pub async fn execute(cmd: FoldersCommand, client: &BrevoClient) -> Result<bool> {
  let folders = client.folders();

  match cmd.command {
    FoldersSubcommands::All => print_response(&folders.all().await?),
    FoldersSubcommands::Details { id } => print_response(&folders.details(id).await?),
    FoldersSubcommands::Lists { id } => print_response(&folders.lists(id).await?),
    FoldersSubcommands::Create { name } => print_response(&folders.create(name).await?),
    FoldersSubcommands::Delete { id } => print_response(&folders.delete(id).await?),
  }
}
