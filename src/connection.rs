// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Validation of zone and transfer connection flags.
//!
//! A connection is described by three flags (key name, key, primary server).
//! They must be supplied together or not at all; a partial triple is rejected
//! before any API call is made.

use std::fmt;
use tracing::debug;

use crate::errors::CommandError;
use crate::types::ZoneConnection;

/// Which connection a set of flags describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionKind {
    /// Primary DNS connection (`--zone-connection-*`)
    Zone,
    /// Transfer connection (`--transfer-connection-*`)
    Transfer,
}

impl ConnectionKind {
    /// Flag prefix, e.g. `zone` for `--zone-connection-key`.
    #[must_use]
    pub fn prefix(self) -> &'static str {
        match self {
            Self::Zone => "zone",
            Self::Transfer => "transfer",
        }
    }

    /// The three flag names, in key-name, key, primary-server order.
    #[must_use]
    pub fn flag_names(self) -> [String; 3] {
        let prefix = self.prefix();
        [
            format!("--{prefix}-connection-key-name"),
            format!("--{prefix}-connection-key"),
            format!("--{prefix}-connection-primary-server"),
        ]
    }
}

impl fmt::Display for ConnectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.prefix())
    }
}

/// Raw flag values for one connection. Empty strings count as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionFlags {
    pub key_name: Option<String>,
    pub key: Option<String>,
    pub primary_server: Option<String>,
}

fn present(value: Option<&String>) -> Option<&str> {
    value.map(String::as_str).filter(|v| !v.is_empty())
}

impl ConnectionFlags {
    /// Check the triple and build the connection if it is complete.
    ///
    /// Returns `Ok(None)` when no flag is set and `Ok(Some(_))` when all three
    /// are; the connection name is the key name.
    ///
    /// # Errors
    ///
    /// [`CommandError::Validation`] when one or two of the three flags are set.
    pub fn validate(&self, kind: ConnectionKind) -> Result<Option<ZoneConnection>, CommandError> {
        let values = [
            present(self.key_name.as_ref()),
            present(self.key.as_ref()),
            present(self.primary_server.as_ref()),
        ];

        match values {
            [None, None, None] => Ok(None),
            [Some(key_name), Some(key), Some(primary_server)] => Ok(Some(ZoneConnection {
                name: key_name.to_string(),
                key_name: key_name.to_string(),
                key: key.to_string(),
                primary_server: primary_server.to_string(),
            })),
            _ => {
                let [a, b, c] = kind.flag_names();
                let missing: Vec<String> = kind
                    .flag_names()
                    .into_iter()
                    .zip(values)
                    .filter(|(_, value)| value.is_none())
                    .map(|(flag, _)| flag)
                    .collect();
                debug!(connection = %kind, missing = ?missing, "Incomplete connection flags");
                Err(CommandError::Validation {
                    message: format!("{kind} connection requires '{a}', '{b}', and '{c}'"),
                    missing,
                })
            }
        }
    }
}

/// Validate both connections, zone first.
///
/// # Errors
///
/// The first [`CommandError::Validation`] encountered.
pub fn validate_connections(
    zone: &ConnectionFlags,
    transfer: &ConnectionFlags,
) -> Result<(Option<ZoneConnection>, Option<ZoneConnection>), CommandError> {
    let zone_connection = zone.validate(ConnectionKind::Zone)?;
    let transfer_connection = transfer.validate(ConnectionKind::Transfer)?;
    Ok((zone_connection, transfer_connection))
}

#[cfg(test)]
#[path = "connection_tests.rs"]
mod connection_tests;
