// Copyright 2025 itscheems
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Command-line access to the banking API
//!
//! `validate` works offline and checks a JSON payload against a resource
//! model. The other commands call the API using `MERIDIAN_*` settings from
//! the environment (or `.env`), optionally layered over a config file.

mod commands;
mod config;
mod logging;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use meridian_core::WireValue;
use meridian_sdk::{Client, ClientConfig, KINDS};
use tracing::info;

use crate::logging::init_logging;

#[derive(Debug, Parser)]
#[command(name = "meridian")]
#[command(version, about = "Typed client for the banking API")]
struct Cli {
	/// Client configuration file; MERIDIAN_* environment variables take precedence
	#[arg(short, long, global = true)]
	config: Option<String>,

	#[command(subcommand)]
	command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
	/// Check a JSON payload against a resource model and print its normalized form
	Validate {
		/// Resource kind, e.g. `ach_transfer`
		kind: String,
		/// Payload file, or `-` for stdin
		input: String,
	},
	/// Retrieve a resource by id
	Get { kind: String, id: String },
	/// List one page of resources
	List {
		kind: String,
		#[arg(long)]
		limit: Option<i64>,
		#[arg(long)]
		cursor: Option<String>,
	},
	/// Look up the balances of an account
	Balance { account_id: String },
	/// Print the resource kinds accepted by `validate`
	Kinds,
}

fn client(config_path: Option<&str>) -> Result<Client> {
	let config = match config_path {
		Some(path) => ClientConfig::from_file(path)
			.with_context(|| format!("Failed to load client configuration from {}", path))?,
		None => ClientConfig::from_env().context("Failed to load client configuration")?,
	};
	info!(base_url = %config.base_url, "Using API");
	Client::new(config).context("Failed to create client")
}

fn print_json(value: &WireValue) -> Result<()> {
	let rendered = serde_json::to_string_pretty(value).context("Failed to render output")?;
	println!("{}", rendered);
	Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
	dotenv::dotenv().ok();
	init_logging()?;

	let cli = Cli::parse();
	let config_path = cli.config.as_deref();

	match cli.command {
		Command::Validate { kind, input } => {
			let payload = commands::read_input(&input)?;
			print_json(&commands::validate(&kind, &payload)?)
		}
		Command::Get { kind, id } => {
			let client = client(config_path)?;
			print_json(&commands::get(&client, &kind, &id).await?)
		}
		Command::List {
			kind,
			limit,
			cursor,
		} => {
			let client = client(config_path)?;
			print_json(&commands::list(&client, &kind, cursor, limit).await?)
		}
		Command::Balance { account_id } => {
			let client = client(config_path)?;
			print_json(&commands::balance(&client, &account_id).await?)
		}
		Command::Kinds => {
			for kind in KINDS {
				println!("{}", kind);
			}
			Ok(())
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_validate_from_stdin() {
		let cli = Cli::try_parse_from(["meridian", "validate", "ach_transfer", "-"]).unwrap();
		match cli.command {
			Command::Validate { kind, input } => {
				assert_eq!(kind, "ach_transfer");
				assert_eq!(input, config::STDIN_PATH);
			}
			other => panic!("unexpected command: {other:?}"),
		}
	}

	#[test]
	fn test_parse_list_with_pagination() {
		let cli = Cli::try_parse_from([
			"meridian", "list", "account", "--limit", "5", "--cursor", "v57w5d", "-c", "meridian.toml",
		])
		.unwrap();

		assert_eq!(cli.config.as_deref(), Some("meridian.toml"));
		match cli.command {
			Command::List {
				kind,
				limit,
				cursor,
			} => {
				assert_eq!(kind, "account");
				assert_eq!(limit, Some(5));
				assert_eq!(cursor.as_deref(), Some("v57w5d"));
			}
			other => panic!("unexpected command: {other:?}"),
		}
	}

	#[test]
	fn test_get_requires_id() {
		assert!(Cli::try_parse_from(["meridian", "get", "account"]).is_err());
	}
}
