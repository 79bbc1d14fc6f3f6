//! TableDB CLI
//!
//! Command-line front end for TableDB.
//!
//! # Commands
//!
//! - `query` - Load a file, optionally index a column, and select rows
//! - `shell` - Interactive command loop over one resident table
//! - `version` - Show version information

mod commands;

use clap::{Parser, Subcommand};
use commands::output::Format;
use std::path::PathBuf;
use tabledb_core::{Config, RowValidation};
use tracing_subscriber::EnvFilter;

/// TableDB command-line tools.
#[derive(Parser)]
#[command(name = "tabledb")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(global = true, short, long)]
    verbose: bool,

    /// Field delimiter of loaded sources
    #[arg(global = true, short, long, default_value_t = ',')]
    delimiter: char,

    /// Accept rows whose field count differs from the header
    #[arg(global = true, long)]
    permissive: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load a file and select rows where a column equals a value
    Query {
        /// Name to load the table under
        #[arg(short, long)]
        table: String,

        /// Delimited source file
        #[arg(short, long)]
        file: PathBuf,

        /// Column to match
        #[arg(short, long)]
        column: String,

        /// Value to match exactly
        #[arg(long)]
        value: String,

        /// Build an index on the column before selecting
        #[arg(short, long)]
        index: bool,

        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Run an interactive command loop on stdin
    Shell {
        /// Load this file on startup
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Table name for the startup file (defaults to the file stem)
        #[arg(short, long)]
        table: Option<String>,
    },

    /// Show version information
    Version,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let validation = if cli.permissive {
        RowValidation::Permissive
    } else {
        RowValidation::Strict
    };
    let config = Config::new()
        .delimiter(cli.delimiter)
        .row_validation(validation);

    match cli.command {
        Commands::Query {
            table,
            file,
            column,
            value,
            index,
            format,
        } => {
            let format = Format::parse(&format)?;
            commands::query::run(config, &table, &file, &column, &value, index, format)?;
        }
        Commands::Shell { file, table } => {
            commands::shell::run(config, file.as_deref(), table.as_deref())?;
        }
        Commands::Version => {
            println!("TableDB CLI v{}", env!("CARGO_PKG_VERSION"));
            println!("TableDB Core v{}", tabledb_core::VERSION);
        }
    }

    Ok(())
}
