// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Command-line surface of the `vinyldns` binary.
//!
//! Global flags configure the API connection, the output format and the
//! consistency poll; each has an environment variable fallback. Name/id pairs
//! such as `--zone-name`/`--zone-id` are not marked as conflicting here; the
//! resolver reports that case with exit code 1.

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use std::time::Duration;

use crate::client::ClientConfig;
use crate::connection::ConnectionFlags;
use crate::constants::{
    DEFAULT_HOST, DEFAULT_POLL_MAX_ATTEMPTS, DEFAULT_POLL_TIMEOUT_SECS, DEFAULT_SETTLE_DELAY_SECS,
    ENV_ACCESS_KEY, ENV_HOST, ENV_OUTPUT, ENV_POLL_ATTEMPTS, ENV_POLL_TIMEOUT, ENV_SECRET_KEY,
    ENV_SETTLE_DELAY,
};
use crate::output::OutputFormat;
use crate::poller::PollSettings;

/// VinylDNS command-line client
#[derive(Parser, Debug)]
#[command(name = "vinyldns", author, version, about = "Manage DNS zones through the VinylDNS API")]
#[command(propagate_version = true)]
pub struct Cli {
    /// VinylDNS API endpoint
    #[arg(long, global = true, env = ENV_HOST, default_value = DEFAULT_HOST)]
    pub host: String,

    /// Access key used to sign requests
    #[arg(long, global = true, env = ENV_ACCESS_KEY, default_value = "", hide_env_values = true)]
    pub access_key: String,

    /// Secret key used to sign requests
    #[arg(long, global = true, env = ENV_SECRET_KEY, default_value = "", hide_env_values = true)]
    pub secret_key: String,

    /// Output format
    #[arg(short, long, global = true, env = ENV_OUTPUT, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Seconds to wait for a change to become visible
    #[arg(long, global = true, env = ENV_POLL_TIMEOUT, default_value_t = DEFAULT_POLL_TIMEOUT_SECS)]
    pub poll_timeout: u64,

    /// Maximum number of checks while waiting for a change
    #[arg(long, global = true, env = ENV_POLL_ATTEMPTS, default_value_t = DEFAULT_POLL_MAX_ATTEMPTS)]
    pub poll_attempts: u32,

    /// Seconds to pause for backend propagation after a zone change
    #[arg(long, global = true, env = ENV_SETTLE_DELAY, default_value_t = DEFAULT_SETTLE_DELAY_SECS)]
    pub settle_delay: u64,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// API connection settings; blank keys mean unsigned requests.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        let non_empty = |v: &str| (!v.is_empty()).then(|| v.to_string());
        ClientConfig {
            host: self.host.clone(),
            access_key: non_empty(&self.access_key),
            secret_key: non_empty(&self.secret_key),
        }
    }

    /// Poll bounds from the global flags; backoff pacing keeps its defaults.
    #[must_use]
    pub fn poll_settings(&self) -> PollSettings {
        PollSettings {
            max_attempts: self.poll_attempts,
            timeout: Duration::from_secs(self.poll_timeout),
            settle_delay: Duration::from_secs(self.settle_delay),
            ..PollSettings::default()
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// List all vinyldns zones
    Zones,

    /// view zone details
    Zone(ZoneArgs),

    /// Create a zone
    ZoneCreate(ZoneCreateArgs),

    /// Delete a zone and wait until it is gone
    ZoneDelete(ZoneArgs),

    /// List all vinyldns groups
    Groups,

    /// view group details
    Group(GroupArgs),

    /// Create a group
    GroupCreate(GroupCreateArgs),

    /// Delete a group and wait until it is gone
    GroupDelete(GroupArgs),

    /// Print a shell completion script
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Identifies one zone by name or id.
#[derive(Args, Debug, Clone, Default)]
pub struct ZoneArgs {
    /// Zone name, including the trailing dot
    #[arg(long)]
    pub zone_name: Option<String>,

    /// Zone id
    #[arg(long)]
    pub zone_id: Option<String>,
}

/// Identifies one group by name or id.
#[derive(Args, Debug, Clone, Default)]
pub struct GroupArgs {
    /// Group name
    #[arg(long)]
    pub group_name: Option<String>,

    /// Group id
    #[arg(long)]
    pub group_id: Option<String>,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ZoneCreateArgs {
    /// Zone name, including the trailing dot
    #[arg(long)]
    pub name: String,

    /// Zone contact email
    #[arg(long)]
    pub email: String,

    /// Name of the group administering the zone
    #[arg(long)]
    pub admin_group_name: Option<String>,

    /// Id of the group administering the zone
    #[arg(long)]
    pub admin_group_id: Option<String>,

    /// TSIG key name for the zone connection
    #[arg(long)]
    pub zone_connection_key_name: Option<String>,

    /// TSIG key for the zone connection
    #[arg(long)]
    pub zone_connection_key: Option<String>,

    /// Primary server for the zone connection
    #[arg(long)]
    pub zone_connection_primary_server: Option<String>,

    /// TSIG key name for the transfer connection
    #[arg(long)]
    pub transfer_connection_key_name: Option<String>,

    /// TSIG key for the transfer connection
    #[arg(long)]
    pub transfer_connection_key: Option<String>,

    /// Primary server for the transfer connection
    #[arg(long)]
    pub transfer_connection_primary_server: Option<String>,
}

impl ZoneCreateArgs {
    #[must_use]
    pub fn zone_connection(&self) -> ConnectionFlags {
        ConnectionFlags {
            key_name: self.zone_connection_key_name.clone(),
            key: self.zone_connection_key.clone(),
            primary_server: self.zone_connection_primary_server.clone(),
        }
    }

    #[must_use]
    pub fn transfer_connection(&self) -> ConnectionFlags {
        ConnectionFlags {
            key_name: self.transfer_connection_key_name.clone(),
            key: self.transfer_connection_key.clone(),
            primary_server: self.transfer_connection_primary_server.clone(),
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct GroupCreateArgs {
    /// Group name
    #[arg(long)]
    pub name: String,

    /// Group contact email
    #[arg(long)]
    pub email: String,

    /// Free-form description
    #[arg(long)]
    pub description: Option<String>,

    /// User id of a member (repeatable)
    #[arg(long = "member-id")]
    pub member_ids: Vec<String>,

    /// User id of an admin (repeatable, at least one)
    #[arg(long = "admin-id")]
    pub admin_ids: Vec<String>,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
