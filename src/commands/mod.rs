// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Subcommand handlers.
//!
//! Each handler turns parsed flags into API calls and returns a
//! [`CommandOutput`] for the renderer. Handlers never print and never exit;
//! the binary does both.
//!
//! # Available Commands
//!
//! ## Zones
//!
//! - [`zone::list_zones`] - `zones`
//! - [`zone::show_zone`] - `zone`
//! - [`zone::create_zone`] - `zone-create`, waits until the zone is Active
//! - [`zone::delete_zone`] - `zone-delete`, waits until the zone is gone
//!
//! ## Groups
//!
//! - [`group::list_groups`] - `groups`
//! - [`group::show_group`] - `group`
//! - [`group::create_group`] - `group-create`
//! - [`group::delete_group`] - `group-delete`, waits until the group is gone
//!
//! # Example
//!
//! ```rust,no_run
//! use vinyldns_cli::cli::Command;
//! use vinyldns_cli::client::{ClientConfig, VinylClient};
//! use vinyldns_cli::commands::run;
//! use vinyldns_cli::output::{OutputFormat, Render};
//! use vinyldns_cli::poller::PollSettings;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = VinylClient::new(ClientConfig {
//!     host: "http://localhost:9000".to_string(),
//!     ..ClientConfig::default()
//! })?;
//! let output = run(&client, &PollSettings::default(), &Command::Zones).await?;
//! println!("{}", output.render(OutputFormat::Text)?);
//! # Ok(())
//! # }
//! ```

pub mod group;
pub mod zone;


use clap::CommandFactory;
use clap_complete::Shell;

use crate::api::ZoneApi;
use crate::cli::{Cli, Command};
use crate::errors::CommandError;
use crate::output::CommandOutput;
use crate::poller::PollSettings;

/// Run one subcommand against `api`.
///
/// # Errors
///
/// Whatever the handler reports; see [`CommandError`].
pub async fn run<A>(
    api: &A,
    settings: &PollSettings,
    command: &Command,
) -> Result<CommandOutput, CommandError>
where
    A: ZoneApi + ?Sized,
{
    match command {
        Command::Zones => zone::list_zones(api).await,
        Command::Zone(args) => zone::show_zone(api, args).await,
        Command::ZoneCreate(args) => zone::create_zone(api, settings, args).await,
        Command::ZoneDelete(args) => zone::delete_zone(api, settings, args).await,
        Command::Groups => group::list_groups(api).await,
        Command::Group(args) => group::show_group(api, args).await,
        Command::GroupCreate(args) => group::create_group(api, args).await,
        Command::GroupDelete(args) => group::delete_group(api, settings, args).await,
        Command::Completion { shell } => completion(*shell),
    }
}

/// Generate the completion script for `shell`. Never touches the API.
///
/// # Errors
///
/// [`CommandError::Render`] if the generated script is not valid UTF-8.
pub fn completion(shell: Shell) -> Result<CommandOutput, CommandError> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    let mut buf = Vec::new();
    clap_complete::generate(shell, &mut cmd, name, &mut buf);

    String::from_utf8(buf)
        .map(CommandOutput::Script)
        .map_err(|e| CommandError::Render(e.to_string()))
}
