// Copyright (c) 2025 Erick Bourgeois, firestoned
// SPDX-License-Identifier: MIT

use anyhow::Result;
use clap::error::ErrorKind;
use clap::Parser;
use tracing::debug;
use vinyldns_cli::{
    cli::{Cli, Command},
    client::VinylClient,
    commands,
    errors::{CommandError, EXIT_FAILURE},
    output::{CommandOutput, Render},
};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            // Every usage error exits 1, including the ones clap detects
            let _ = e.print();
            std::process::exit(EXIT_FAILURE);
        }
    };

    initialize_logging();

    let code = match run(&cli) {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{e}");
            e.downcast_ref::<CommandError>()
                .map_or(EXIT_FAILURE, CommandError::exit_code)
        }
    };

    std::process::exit(code);
}

/// Initialize logging on stderr so stdout stays parseable.
///
/// Respects `RUST_LOG` if set, otherwise only warnings are shown.
/// Example: `RUST_LOG=debug vinyldns zones`
///
/// Respects `RUST_LOG_FORMAT` for the output format.
/// Example: `RUST_LOG_FORMAT=json vinyldns zones`
fn initialize_logging() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));

    let log_format = std::env::var("RUST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

    match log_format.to_lowercase().as_str() {
        "json" => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .json()
                .init();
        }
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_file(true)
                .with_line_number(true)
                .with_target(false)
                .with_ansi(false)
                .compact()
                .init();
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    // One request at a time; no worker threads needed
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let output = runtime.block_on(execute(cli))?;
    println!("{}", output.render(cli.output)?);
    Ok(())
}

async fn execute(cli: &Cli) -> Result<CommandOutput> {
    if let Command::Completion { shell } = &cli.command {
        return Ok(commands::completion(*shell)?);
    }

    let client = VinylClient::new(cli.client_config()).map_err(CommandError::from)?;
    debug!(host = %client.base_url(), "VinylDNS client initialized");

    let settings = cli.poll_settings();
    Ok(commands::run(&client, &settings, &cli.command).await?)
}
