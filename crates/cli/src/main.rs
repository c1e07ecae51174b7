// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! `stocktake` - inventory utility with an automatic test runner.

mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use output::OutputFormat;

#[derive(Parser)]
#[command(name = "stocktake", version, about = "Inventory utility with an automatic test runner")]
struct Cli {
    /// Emit machine-readable JSON where supported
    #[arg(long, global = true)]
    json: bool,

    /// Inventory file used by the product commands
    #[arg(long, global = true, default_value = "inventory.json")]
    db: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Detect the environment, run the OS test script, and log the verdict
    Test,
    /// Add a product to the inventory
    Add {
        #[arg(long)]
        id: u32,
        #[arg(long)]
        name: String,
        #[arg(long)]
        qty: u32,
        #[arg(long)]
        price: f64,
    },
    /// List all products
    List,
    /// Print aggregate quantity and value
    Totals,
    /// Export a CSV report
    Report {
        /// Output path for the report
        path: PathBuf,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stocktake=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let result = match cli.command {
        Command::Test => commands::test::run().await,
        Command::Add { id, name, qty, price } => {
            commands::product::add(&cli.db, id, name, qty, price)
        }
        Command::List => commands::product::list(&cli.db, format),
        Command::Totals => commands::product::totals(&cli.db, format),
        Command::Report { path } => commands::product::report(&cli.db, &path),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
