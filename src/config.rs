//! Source configuration
//!
//! Describes a page chain stored as JSON files on disk: where the first page
//! lives, which directory next-page locators are relative to, and how each
//! page document is laid out. Loaded from YAML.
//!
//! ```yaml
//! first_page: pages/1.json
//! base_dir: pages
//! decoder:
//!   record_path: data
//!   next_path: links.next
//! ```

use crate::collection::PaginatedList;
use crate::decode::{DecoderConfig, JsonPageDecoder, PageDecoder};
use crate::error::{Error, Result};
use crate::resolve::FileResolver;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for a file-backed page chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Path of the first page document
    pub first_page: PathBuf,

    /// Directory next-page locators are resolved against
    /// (defaults to the first page's directory)
    #[serde(default)]
    pub base_dir: Option<PathBuf>,

    /// Page document layout
    #[serde(default)]
    pub decoder: DecoderConfig,
}

impl SourceConfig {
    /// Create a config for a first page using the default layout
    pub fn new(first_page: impl Into<PathBuf>) -> Self {
        Self {
            first_page: first_page.into(),
            base_dir: None,
            decoder: DecoderConfig::default(),
        }
    }

    /// Set the base directory
    #[must_use]
    pub fn with_base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.base_dir = Some(dir.into());
        self
    }

    /// Set the decoder layout
    #[must_use]
    pub fn with_decoder(mut self, decoder: DecoderConfig) -> Self {
        self.decoder = decoder;
        self
    }

    /// Directory next-page locators are resolved against
    pub fn resolved_base_dir(&self) -> PathBuf {
        match &self.base_dir {
            Some(dir) => dir.clone(),
            None => self
                .first_page
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default(),
        }
    }

    /// Check the config for obviously invalid values
    pub fn validate(&self) -> Result<()> {
        if self.first_page.as_os_str().is_empty() {
            return Err(Error::config("first_page must not be empty"));
        }
        self.decoder.validate()
    }

    /// Resolve relative paths against `dir` (usually the config file's directory)
    #[must_use]
    pub fn relative_to(mut self, dir: &Path) -> Self {
        if self.first_page.is_relative() {
            self.first_page = dir.join(&self.first_page);
        }
        if let Some(base) = self.base_dir.take() {
            self.base_dir = Some(if base.is_relative() {
                dir.join(base)
            } else {
                base
            });
        }
        self
    }

    /// Read the first page and build a list over the chain
    ///
    /// Only the first page is read here; later pages are fetched on demand.
    pub fn open<T>(&self) -> Result<PaginatedList<T>>
    where
        T: DeserializeOwned + Clone + 'static,
    {
        self.validate()?;

        let bytes = fs::read(&self.first_page).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::FileNotFound {
                    path: self.first_page.display().to_string(),
                }
            } else {
                Error::Io(e)
            }
        })?;

        let decoder = JsonPageDecoder::<T>::with_config(self.decoder.clone())?;
        let first_page = decoder.decode(&bytes)?;
        let base_dir = self.resolved_base_dir();
        debug!(
            "Opened first page {}: {} elements, resolving next pages against {}",
            self.first_page.display(),
            first_page.len(),
            base_dir.display()
        );

        Ok(PaginatedList::with_collaborators(
            first_page,
            FileResolver::new(base_dir),
            decoder,
        ))
    }
}

/// Load a source config from a YAML file
///
/// Relative paths inside the file are taken relative to the file itself.
pub fn load_config(path: impl AsRef<Path>) -> Result<SourceConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        }
    })?;

    let config = config_from_str(&content)?;
    Ok(match path.parent() {
        Some(dir) => config.relative_to(dir),
        None => config,
    })
}

/// Parse a source config from a YAML string
pub fn config_from_str(content: &str) -> Result<SourceConfig> {
    let config: SourceConfig = serde_yaml::from_str(content)?;
    config.validate()?;
    Ok(config)
}
