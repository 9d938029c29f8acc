// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

//! Rendering command results as ASCII tables or JSON.
//!
//! Every command produces one [`CommandOutput`]. Rendering is pure: it only
//! formats what the command already fetched.

use clap::ValueEnum;
use comfy_table::{Cell, CellAlignment, Table, TableComponent};
use serde::Serialize;

use crate::constants::{NO_GROUPS_FOUND, NO_ZONES_FOUND};
use crate::errors::CommandError;
use crate::types::{Group, User, Zone};

/// `+---+` borders, `|` column separators, `+` at every intersection.
const ASCII_BORDERED: &str = "||--+-++|-+++++++++";

/// Output format selected by `--output`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable tables and messages
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

/// Successful result of a command.
#[derive(Debug, Clone, PartialEq)]
pub enum CommandOutput {
    Zones(Vec<Zone>),
    Zone(Zone),
    Groups(Vec<Group>),
    Group(Group),
    /// A zone mutation, e.g. "Created zone vinyldns."
    ZoneChange { message: String, zone: Zone },
    /// A group mutation, e.g. "Deleted group ops."
    GroupChange { message: String, group: Group },
    /// Shell completion script, printed verbatim in both modes
    Script(String),
}

/// Dual-mode rendering of a command result.
pub trait Render {
    /// Text form: a table, an empty-collection notice, or a message.
    fn to_table(&self) -> String;

    /// JSON form.
    ///
    /// # Errors
    ///
    /// [`CommandError::Render`] if serialization fails.
    fn to_json(&self) -> Result<String, CommandError>;

    /// Render in the requested format.
    ///
    /// # Errors
    ///
    /// As [`Render::to_json`].
    fn render(&self, format: OutputFormat) -> Result<String, CommandError> {
        match format {
            OutputFormat::Text => Ok(self.to_table()),
            OutputFormat::Json => self.to_json(),
        }
    }
}

impl Render for CommandOutput {
    fn to_table(&self) -> String {
        match self {
            Self::Zones(zones) if zones.is_empty() => NO_ZONES_FOUND.to_string(),
            Self::Zones(zones) => list_table(
                ["NAME", "ID"],
                zones.iter().map(|z| [z.name.as_str(), z.id.as_str()]),
            ),
            Self::Zone(zone) => zone_detail_table(zone),
            Self::Groups(groups) if groups.is_empty() => NO_GROUPS_FOUND.to_string(),
            Self::Groups(groups) => list_table(
                ["NAME", "ID"],
                groups.iter().map(|g| [g.name.as_str(), g.id.as_str()]),
            ),
            Self::Group(group) => group_detail_table(group),
            Self::ZoneChange { message, .. }
            | Self::GroupChange { message, .. } => message.clone(),
            Self::Script(script) => script.clone(),
        }
    }

    fn to_json(&self) -> Result<String, CommandError> {
        match self {
            Self::Zones(zones) => pretty(zones),
            Self::Zone(zone) | Self::ZoneChange { zone, .. } => pretty(zone),
            Self::Groups(groups) => pretty(groups),
            Self::Group(group) | Self::GroupChange { group, .. } => pretty(group),
            Self::Script(script) => Ok(script.clone()),
        }
    }
}

fn pretty<T: Serialize + ?Sized>(value: &T) -> Result<String, CommandError> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn base_table() -> Table {
    let mut table = Table::new();
    table.load_preset(ASCII_BORDERED).force_no_tty();
    table
}

/// Collection table: uppercase centred header, no lines between rows.
fn list_table<'a, const N: usize>(
    headers: [&str; N],
    rows: impl Iterator<Item = [&'a str; N]>,
) -> String {
    let mut table = base_table();
    table
        .remove_style(TableComponent::HorizontalLines)
        .remove_style(TableComponent::MiddleIntersections)
        .remove_style(TableComponent::LeftBorderIntersections)
        .remove_style(TableComponent::RightBorderIntersections);
    table.set_header(
        headers
            .iter()
            .map(|h| Cell::new(h.to_uppercase()).set_alignment(CellAlignment::Center)),
    );
    for row in rows {
        table.add_row(row);
    }
    table.to_string()
}

/// Key/value table with a line after every row and no header.
fn detail_table(rows: &[(&str, &str)]) -> String {
    let mut table = base_table();
    for (key, value) in rows {
        table.add_row([*key, *value]);
    }
    table.to_string()
}

fn zone_detail_table(zone: &Zone) -> String {
    let status = zone.status_label();
    detail_table(&[
        ("Name", zone.name.as_str()),
        ("ID", zone.id.as_str()),
        ("Status", status.as_str()),
    ])
}

fn group_detail_table(group: &Group) -> String {
    let members = user_ids(&group.members);
    let admins = user_ids(&group.admins);
    detail_table(&[
        ("Name", group.name.as_str()),
        ("ID", group.id.as_str()),
        ("Email", group.email.as_str()),
        ("Description", group.description.as_deref().unwrap_or_default()),
        ("Admins", admins.as_str()),
        ("Members", members.as_str()),
    ])
}

fn user_ids(users: &[User]) -> String {
    users
        .iter()
        .map(|u| u.user_name.as_deref().unwrap_or(&u.id))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod output_tests;
