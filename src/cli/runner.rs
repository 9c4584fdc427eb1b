//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::collection::PaginatedList;
use crate::config::{load_config, SourceConfig};
use crate::error::{Error, Result};
use crate::page::Locator;
use crate::types::JsonValue;
use serde_json::json;
use std::io::{self, Write};
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command, printing to stdout
    pub fn run(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.run_with(&mut out)
    }

    /// Run the CLI command, printing to `out`
    pub fn run_with<W: Write>(&self, out: &mut W) -> Result<()> {
        let list = self.open()?;

        match &self.cli.command {
            Commands::Info => self.info(&list, out),
            Commands::Count => self.emit(out, &json!({ "count": list.size()? })),
            Commands::Dump { limit } => self.dump(&list, *limit, out),
            Commands::Get { index } => self.emit(out, &list.get(*index)?),
            Commands::Find { value } => self.find(&list, value, out),
            Commands::Slice { from, to } => {
                for element in list.sub_list(*from, *to)? {
                    self.emit(out, &element)?;
                }
                Ok(())
            }
        }
    }

    /// Build the source config from the config file and flag overrides
    fn source_config(&self) -> Result<SourceConfig> {
        let mut config = match (&self.cli.config, &self.cli.page) {
            (Some(path), _) => load_config(path)?,
            (None, Some(page)) => SourceConfig::new(page),
            (None, None) => {
                return Err(Error::config(
                    "No source specified (use --config or --page)",
                ))
            }
        };

        if let Some(page) = &self.cli.page {
            config.first_page.clone_from(page);
        }
        if let Some(dir) = &self.cli.base_dir {
            config.base_dir = Some(dir.clone());
        }
        Ok(config)
    }

    fn open(&self) -> Result<PaginatedList<JsonValue>> {
        let config = self.source_config()?;
        debug!("Opening source: {}", config.first_page.display());
        config.open()
    }

    fn info<W: Write>(&self, list: &PaginatedList<JsonValue>, out: &mut W) -> Result<()> {
        let first = list.first_page();
        let info = json!({
            "total": list.total(),
            "per_page": list.per_page(),
            "first_page_size": first.len(),
            "next": first.next().map(Locator::as_str),
            "size_known": list.traversal().size_claim().is_exact(),
        });
        self.emit(out, &info)
    }

    fn dump<W: Write>(
        &self,
        list: &PaginatedList<JsonValue>,
        limit: Option<usize>,
        out: &mut W,
    ) -> Result<()> {
        let limit = limit.unwrap_or(usize::MAX);
        for element in list.iter().take(limit) {
            self.emit(out, &element?)?;
        }
        Ok(())
    }

    fn find<W: Write>(
        &self,
        list: &PaginatedList<JsonValue>,
        raw: &str,
        out: &mut W,
    ) -> Result<()> {
        // Plain words are searched as JSON strings
        let value: JsonValue =
            serde_json::from_str(raw).unwrap_or_else(|_| JsonValue::String(raw.to_string()));

        let first = list.index_of(&value)?;
        let last = match first {
            Some(_) => list.last_index_of(&value)?,
            None => None,
        };
        let result = json!({
            "value": value,
            "contains": first.is_some(),
            "index_of": first,
            "last_index_of": last,
        });
        self.emit(out, &result)
    }

    fn emit<W: Write>(&self, out: &mut W, value: &JsonValue) -> Result<()> {
        let rendered = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        writeln!(out, "{rendered}")?;
        Ok(())
    }
}
