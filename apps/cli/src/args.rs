//! # CLI Argument Definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// The main CLI structure parsing command-line arguments.
#[derive(Debug, Parser)]
#[command(name = "slugeq")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(arg_required_else_help = true)]
#[command(about = "Inspect and edit per-element slug overrides")]
pub struct Cli {
    /// Configuration file (defaults to `slugeq.toml` in the working directory, if present)
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the stored override of an element
    Get {
        id: u64,
    },
    /// Store an explicit override for an element
    Set {
        id: u64,
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
    /// List every stored override
    List {
        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Resolve the override decision for an element
    ///
    /// Only the built-in families can be checked; other classes report as unsupported.
    Check {
        /// Element class (e.g. `element.entry`)
        #[arg(long = "class")]
        class_id: String,
        /// Handle of the element's content type
        #[arg(long = "type")]
        handle: String,
        #[arg(long)]
        id: u64,
    },
}
