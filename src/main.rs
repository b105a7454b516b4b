// SPDX-FileCopyrightText: 2025 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Command-line interface for the shipboard binary.
//!
//! The CLI exposes subcommands for normalizing project configuration
//! documents and rendering the dashboard table, optionally resolving CI
//! access tokens from a JSON-seeded token store.

use std::{io, path::PathBuf, process};

use clap::{ArgAction, Args, Parser, Subcommand};
use shipboard::{
    Error, MemoryStore, PluginRegistry, ProjectsDocument, load_projects, render_table,
    resolve_tokens,
};
use tracing_subscriber::EnvFilter;

/// Command line interface for rendering deployment dashboard columns.
#[derive(Debug, Parser)]
#[command(name = "shipboard", version, about = "Render deployment dashboard status columns")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
/// Supported commands exposed by the CLI.
enum Command {
    /// Normalize projects from a YAML configuration file.
    Projects(ProjectsArgs),
    /// Render the dashboard HTML table for the configured projects.
    Table(TableArgs),
}

#[derive(Debug, Args)]
/// Arguments accepted by the `projects` subcommand.
struct ProjectsArgs {
    /// Path to the YAML configuration file describing dashboard projects.
    #[arg(long = "config", value_name = "PATH")]
    config: PathBuf,

    /// Output formatted JSON for easier inspection.
    #[arg(long = "pretty", action = ArgAction::SetTrue)]
    pretty: bool,
}

#[derive(Debug, Args)]
/// Arguments accepted by the `table` subcommand.
struct TableArgs {
    /// Path to the YAML configuration file describing dashboard projects.
    #[arg(long = "config", value_name = "PATH")]
    config: PathBuf,

    /// Path to a JSON object mapping store keys to access tokens.
    #[arg(long = "tokens", value_name = "PATH")]
    tokens: Option<PathBuf>,
}

/// Entry point that reports errors and sets the appropriate exit status.
#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(error) = run().await {
        eprintln!("{}", error.to_display_string());
        process::exit(1);
    }
}

/// Executes the CLI using parsed arguments.
///
/// # Errors
///
/// Propagates errors originating from configuration loading, token
/// resolution, and rendering.
async fn run() -> Result<(), Error> {
    let cli = Cli::parse();

    match cli.command {
        Command::Projects(args) => run_projects(args),
        Command::Table(args) => run_table(args).await,
    }
}

fn run_projects(args: ProjectsArgs) -> Result<(), Error> {
    let document = load_projects(&args.config)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    write_projects_document(&mut handle, &document, args.pretty)
}

fn write_projects_document<W: io::Write>(
    writer: &mut W,
    document: &ProjectsDocument,
    pretty: bool,
) -> Result<(), Error> {
    if pretty {
        serde_json::to_writer_pretty(writer, document)?;
    } else {
        serde_json::to_writer(writer, document)?;
    }

    Ok(())
}

/// Handles the `table` subcommand by resolving tokens and rendering rows.
///
/// # Errors
///
/// Returns an [`Error`] when configuration loading fails, the token store
/// file is invalid, a lookup keeps failing after retries, or a column
/// cannot be rendered.
async fn run_table(args: TableArgs) -> Result<(), Error> {
    let document = load_projects(&args.config)?;
    let mut projects = document.projects;

    let store = match args.tokens.as_deref() {
        Some(path) => MemoryStore::from_json_file(path)?,
        None => MemoryStore::new(),
    };

    resolve_tokens(&store, &mut projects).await?;

    let registry = PluginRegistry::with_defaults();
    let table = render_table(&registry, &projects)?;

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_table(&mut handle, &table)
}

fn write_table<W: io::Write>(writer: &mut W, table: &str) -> Result<(), Error> {
    writeln!(writer, "{table}").map_err(|source| Error::Output {
        source,
    })
}
