//! Command-line argument definitions.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "advaitzz")]
#[command(author, version, about = "Google dork generator and recon helper")]
pub struct Cli {
    /// Directory holding the history and key files (defaults to the current directory)
    #[arg(long, global = true, env = "ADVAITZZ_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "ADVAITZZ_LOG")]
    pub log_level: Option<String>,

    /// JSON catalog file replacing the built-in templates
    #[arg(long, global = true, env = "ADVAITZZ_CATALOG")]
    pub catalog: Option<PathBuf>,

    /// Disable the progress spinner
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List template categories with their template counts
    Categories,

    /// Expand templates for a domain
    Generate(GenerateArgs),

    /// Show recorded runs, newest last
    History {
        /// Only show the most recent N runs
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Catalog file operations
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },

    /// Manage stored API keys
    Keys {
        #[command(subcommand)]
        action: KeyAction,
    },
}

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Target domain, e.g. example.com
    pub domain: String,

    /// Category name or 1-based index; repeat or comma-separate. Defaults to all
    #[arg(short = 'c', long = "category")]
    pub categories: Vec<String>,

    /// Select every category
    #[arg(long, conflicts_with = "categories")]
    pub all: bool,

    /// Export results; format follows the extension (txt, csv, json, xlsx, xls)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Free-form note stored with the history entry
    #[arg(long, default_value = "")]
    pub note: String,

    /// Do not record this run in history
    #[arg(long)]
    pub no_history: bool,
}

#[derive(Debug, Subcommand)]
pub enum CatalogAction {
    /// Write the active catalog as JSON
    Export { path: PathBuf },
}

#[derive(Debug, Subcommand)]
pub enum KeyAction {
    /// List stored keys with masked values
    List,
    /// Print one stored value
    Get { key: String },
    /// Store a value
    Set { key: String, value: String },
    /// Delete a stored value
    Remove { key: String },
}
