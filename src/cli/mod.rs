//! CLI module
//!
//! Command-line interface for walking page chains stored as JSON files.
//!
//! # Commands
//!
//! - `info` - Show what the first page reports
//! - `count` - Count every element
//! - `dump` - Print elements in order
//! - `get` - Print one element by index
//! - `find` - Search for a value
//! - `slice` - Print a sub-range

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
