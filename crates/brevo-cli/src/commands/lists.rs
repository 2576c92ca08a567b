use super::print_response;
use anyhow::Result;
use brevo_client::{BrevoClient, CreateListRequest};
use clap::{Args, Subcommand};
use tracing::info;

#[derive(Args, Debug)]
pub struct ListsCommand {
  #[command(subcommand)]
  command: ListsSubcommands,
}

#[derive(Subcommand, Debug)]
enum ListsSubcommands {
  /// Every list of the account
  All,

  /// Details of one list
  Details { id: u64 },

  /// Every contact of a list
  Contacts { id: u64 },

  /// Create a list
  Create {
    name: String,

    /// Folder to create the list in
    #[arg(short, long)]
    folder_id: Option<u64>,
  },

  /// Delete a list, keeping its contacts
  Delete { id: u64 },
}

pub async fn execute(cmd: ListsCommand, client: &BrevoClient) -> Result<bool> {
  let lists = client.lists();

  match cmd.command {
    ListsSubcommands::All => {
      let response = lists.all().await?;
      if let Some(data) = response.data() {
        info!("fetched {} lists", data.count);
      }
      print_response(&response)
    }
    ListsSubcommands::Details { id } => print_response(&lists.details(id).await?),
    ListsSubcommands::Contacts { id } => {
      let response = lists.contacts(id).await?;
      if let Some(data) = response.data() {
        info!("fetched {} contacts of list {}", data.count, id);
      }
      print_response(&response)
    }
    ListsSubcommands::Create { name, folder_id } => {
      let request = match folder_id {
        Some(folder_id) => CreateListRequest::new(name).in_folder(folder_id),
        None => CreateListRequest::new(name),
      };
      print_response(&lists.create(&request).await?)
    }
    ListsSubcommands::Delete { id } => print_response(&lists.delete(id).await?),
  }
}
