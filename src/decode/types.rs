//! Decoder types and traits
//!
//! Defines the core decoder abstractions.

use crate::error::{Error, Result};
use crate::page::Page;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Trait for decoding raw page bytes into a typed page
///
/// The target element type is the trait parameter `T`.
pub trait PageDecoder<T>: Send + Sync {
    /// Decode one page
    fn decode(&self, bytes: &[u8]) -> Result<Page<T>>;
}

impl<T, D: PageDecoder<T> + ?Sized> PageDecoder<T> for Arc<D> {
    fn decode(&self, bytes: &[u8]) -> Result<Page<T>> {
        (**self).decode(bytes)
    }
}

impl<T, D: PageDecoder<T> + ?Sized> PageDecoder<T> for Box<D> {
    fn decode(&self, bytes: &[u8]) -> Result<Page<T>> {
        (**self).decode(bytes)
    }
}

/// Where the JSON decoder finds each part of a page document
///
/// Defaults follow the JSON:API layout: records under `data`, counts under
/// `meta`, the next link under `links.next`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// Path to the records (None = the whole document)
    pub record_path: Option<String>,
    /// Path to the total element count
    pub total_path: Option<String>,
    /// Path to the per-page size
    pub per_page_path: Option<String>,
    /// Path to the next page link
    pub next_path: Option<String>,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            record_path: Some("data".to_string()),
            total_path: Some("meta.total".to_string()),
            per_page_path: Some("meta.per_page".to_string()),
            next_path: Some("links.next".to_string()),
        }
    }
}

impl DecoderConfig {
    /// JSON:API layout
    pub fn json_api() -> Self {
        Self::default()
    }

    /// A bare JSON array with no metadata and no next link
    pub fn bare_array() -> Self {
        Self {
            record_path: None,
            total_path: None,
            per_page_path: None,
            next_path: None,
        }
    }

    /// Set the record path
    #[must_use]
    pub fn with_record_path(mut self, path: impl Into<String>) -> Self {
        self.record_path = Some(path.into());
        self
    }

    /// Set the total path
    #[must_use]
    pub fn with_total_path(mut self, path: impl Into<String>) -> Self {
        self.total_path = Some(path.into());
        self
    }

    /// Set the per-page path
    #[must_use]
    pub fn with_per_page_path(mut self, path: impl Into<String>) -> Self {
        self.per_page_path = Some(path.into());
        self
    }

    /// Set the next link path
    #[must_use]
    pub fn with_next_path(mut self, path: impl Into<String>) -> Self {
        self.next_path = Some(path.into());
        self
    }

    /// Reject configured paths that are empty
    pub fn validate(&self) -> Result<()> {
        let paths = [
            ("record_path", &self.record_path),
            ("total_path", &self.total_path),
            ("per_page_path", &self.per_page_path),
            ("next_path", &self.next_path),
        ];
        for (field, path) in paths {
            if let Some(path) = path {
                let trimmed = path.strip_prefix("$.").unwrap_or(path);
                if trimmed.trim().is_empty() {
                    return Err(Error::config(format!("decoder.{field} must not be empty")));
                }
            }
        }
        Ok(())
    }
}
