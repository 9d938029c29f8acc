// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! # vinyldns-cli - command-line client for VinylDNS zone management
//!
//! VinylDNS accepts zone and group changes asynchronously. This crate turns
//! that eventually-consistent API into a synchronous command line: a command
//! that creates or deletes something only returns once the change can be
//! observed.
//!
//! ## Modules
//!
//! - [`cli`] - `clap` definitions for flags and subcommands
//! - [`commands`] - One handler per subcommand
//! - [`connection`] - Zone/transfer connection flag validation
//! - [`resolver`] - Name or id to zone/group resolution
//! - [`poller`] - Bounded waits for asynchronous changes
//! - [`output`] - Table and JSON rendering
//! - [`lifecycle`] - Zone plus admin group setup and teardown
//! - [`api`] - The `ZoneApi` trait the command layer consumes
//! - [`client`] - `ZoneApi` over HTTP with request signing
//! - [`types`] - Wire types
//! - [`errors`] - Error types and exit codes
//!
//! ## Example
//!
//! ```rust,no_run
//! use vinyldns_cli::cli::{Command, ZoneArgs};
//! use vinyldns_cli::client::{ClientConfig, VinylClient};
//! use vinyldns_cli::commands::run;
//! use vinyldns_cli::output::{OutputFormat, Render};
//! use vinyldns_cli::poller::PollSettings;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = VinylClient::new(ClientConfig {
//!     host: "http://localhost:9000".to_string(),
//!     access_key: Some("okAccessKey".to_string()),
//!     secret_key: Some("okSecretKey".to_string()),
//! })?;
//!
//! let command = Command::Zone(ZoneArgs {
//!     zone_name: Some("vinyldns.".to_string()),
//!     zone_id: None,
//! });
//! let output = run(&client, &PollSettings::default(), &command).await?;
//! println!("{}", output.render(OutputFormat::Json)?);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cli;
pub mod client;
pub mod commands;
pub mod connection;
pub mod constants;
pub mod errors;
pub mod lifecycle;
pub mod output;
pub mod poller;
pub mod resolver;
pub mod types;

#[cfg(test)]
pub(crate) mod test_utils;
