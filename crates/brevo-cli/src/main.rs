/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-dot-]browne[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

use anyhow::Result;
use brevo_client::BrevoClient;
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::process::ExitCode;
use tracing::debug;

mod commands;
use commands::{contact::ContactCommand, folders::FoldersCommand, lists::ListsCommand};

mod config;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "brevo")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,

  /// Brevo API key
  #[arg(long, global = true, env = "BREVO_API_KEY", hide_env_values = true)]
  api_key: Option<String>,

  /// Base URL of the API, including the version path
  #[arg(long, global = true, env = "BREVO_BASE_URL")]
  base_url: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Check the key against the account endpoint
  Ping,
  /// Single contact operations
  Contact(ContactCommand),
  /// Contact lists
  Lists(ListsCommand),
  /// Folders of contact lists
  Folders(FoldersCommand),
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
  // Load environment variables
  dotenv().ok();

  // Parse CLI arguments
  let cli = Cli::parse();

  // Initialize logging
  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt().with_env_filter(log_level).with_writer(std::io::stderr).init();

  let config = config::resolve(cli.api_key, cli.base_url)?;
  let client = BrevoClient::new(config)?;
  debug!("using {}", client.base_url());

  // Execute command
  let succeeded = match cli.command {
    Commands::Ping => commands::print_response(&client.ping().await?)?,
    Commands::Contact(cmd) => commands::contact::execute(cmd, &client).await?,
    Commands::Lists(cmd) => commands::lists::execute(cmd, &client).await?,
    Commands::Folders(cmd) => commands::folders::execute(cmd, &client).await?,
  };

  Ok(if succeeded { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}
