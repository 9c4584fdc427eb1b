//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Walk a chain of JSON pages as one list
#[derive(Parser, Debug)]
#[command(name = "paginated-list")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Source configuration file (YAML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// First page file (JSON); overrides `first_page` from the config
    #[arg(short, long, global = true)]
    pub page: Option<PathBuf>,

    /// Directory next-page links are resolved against
    #[arg(short, long, global = true)]
    pub base_dir: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show total, per-page size and first page details (no fetch)
    Info,

    /// Count every element across all pages
    Count,

    /// Print elements in order
    Dump {
        /// Stop after this many elements
        #[arg(long)]
        limit: Option<usize>,
    },

    /// Print the element at an index
    Get {
        /// Zero-based index
        #[arg(allow_negative_numbers = true)]
        index: isize,
    },

    /// Report whether and where a value occurs
    Find {
        /// Value to search for (JSON, or a plain string)
        value: String,
    },

    /// Print the elements in `from..to`
    Slice {
        /// Start index (inclusive)
        from: usize,
        /// End index (exclusive)
        to: usize,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one value per line)
    Json,
    /// Human-readable output
    Pretty,
}
