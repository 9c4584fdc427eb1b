//! Decoder implementations
//!
//! Each decoder handles a specific page encoding.

use super::types::{DecoderConfig, PageDecoder};
use crate::error::{Error, Result};
use crate::page::{Locator, Page, PageMeta};
use crate::types::OptionStringExt;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;

// ============================================================================
// JSON Page Decoder
// ============================================================================

/// JSON decoder that extracts records, counts and the next link by path
pub struct JsonPageDecoder<T> {
    config: DecoderConfig,
    _target: PhantomData<fn() -> T>,
}

impl<T> JsonPageDecoder<T> {
    /// Create a decoder using the JSON:API layout
    pub fn new() -> Self {
        Self::from_valid(DecoderConfig::default())
    }

    /// Create a decoder with a custom layout
    pub fn with_config(config: DecoderConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: DecoderConfig) -> Self {
        Self {
            config,
            _target: PhantomData,
        }
    }

    pub fn config(&self) -> &DecoderConfig {
        &self.config
    }

    /// Extract records from a JSON value using the record path
    fn extract_records(&self, value: &Value) -> Vec<Value> {
        match &self.config.record_path {
            Some(path) => match extract_simple_path(value, path) {
                Some(Value::Array(arr)) => arr,
                Some(Value::Null) | None => vec![],
                Some(v) => vec![v],
            },
            None => match value {
                Value::Array(arr) => arr.clone(),
                _ => vec![value.clone()],
            },
        }
    }

    fn extract_meta(&self, value: &Value) -> PageMeta {
        let count_at = |path: &Option<String>| {
            path.as_deref()
                .and_then(|p| extract_simple_path(value, p))
                .and_then(|v| parse_count(&v))
        };
        PageMeta {
            total: count_at(&self.config.total_path),
            per_page: count_at(&self.config.per_page_path),
        }
    }

    fn extract_next(&self, value: &Value) -> Option<Locator> {
        let link = extract_simple_path(value, self.config.next_path.as_deref()?)?;
        parse_link(&link).map(Locator::from)
    }
}

impl<T> Default for JsonPageDecoder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonPageDecoder<T> {
    fn clone(&self) -> Self {
        Self::from_valid(self.config.clone())
    }
}

impl<T> fmt::Debug for JsonPageDecoder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonPageDecoder")
            .field("config", &self.config)
            .finish()
    }
}

impl<T: DeserializeOwned> PageDecoder<T> for JsonPageDecoder<T> {
    fn decode(&self, bytes: &[u8]) -> Result<Page<T>> {
        let body = std::str::from_utf8(bytes)
            .map_err(|e| Error::decode(format!("Page is not valid UTF-8: {e}")))?;
        let value: Value = serde_json::from_str(body)
            .map_err(|e| Error::decode(format!("Failed to parse JSON: {e}")))?;

        let elements = self
            .extract_records(&value)
            .into_iter()
            .enumerate()
            .map(|(i, record)| {
                serde_json::from_value(record)
                    .map_err(|e| Error::decode(format!("Failed to decode record {i}: {e}")))
            })
            .collect::<Result<Vec<T>>>()?;

        let page = Page::new(elements).with_meta(self.extract_meta(&value));
        Ok(match self.extract_next(&value) {
            Some(next) => page.with_next(next),
            None => page,
        })
    }
}

// ============================================================================
// Closure Decoder
// ============================================================================

/// Decoder that delegates to a closure
pub struct FnDecoder<F> {
    f: F,
}

impl<F> FnDecoder<F> {
    /// Wrap a closure as a decoder
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> fmt::Debug for FnDecoder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnDecoder").finish_non_exhaustive()
    }
}

impl<T, F> PageDecoder<T> for FnDecoder<F>
where
    F: Fn(&[u8]) -> Result<Page<T>> + Send + Sync,
{
    fn decode(&self, bytes: &[u8]) -> Result<Page<T>> {
        (self.f)(bytes)
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Parse a non-negative count; negative values mean "unknown"
fn parse_count(value: &Value) -> Option<usize> {
    match value {
        Value::Number(n) => n.as_u64().map(|v| v as usize).or_else(|| {
            // whole floats such as 10.0 or 1e1
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0 && f.fract() == 0.0)
                .map(|f| f as usize)
        }),
        Value::String(s) => s.trim().parse::<u64>().ok().map(|v| v as usize),
        _ => None,
    }
}

/// A link is either a string or an object carrying `href`
fn parse_link(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => s.clone().none_if_empty(),
        Value::Object(map) => map
            .get("href")
            .and_then(Value::as_str)
            .map(str::to_string)
            .none_if_empty(),
        _ => None,
    }
}

/// Extract a value using simple dot-notation path
fn extract_simple_path(value: &Value, path: &str) -> Option<Value> {
    let path = path.strip_prefix("$.").unwrap_or(path);
    let parts: Vec<&str> = path.split('.').collect();

    let mut current = value;
    for part in parts {
        // Handle array indexing like "data[0]" or "items[-1]"
        if let Some(bracket_pos) = part.find('[') {
            let name = &part[..bracket_pos];
            let index_str = part[bracket_pos + 1..].strip_suffix(']')?;

            if !name.is_empty() {
                current = current.get(name)?;
            }

            let index = index_str.parse::<i64>().ok()?;
            let Value::Array(arr) = current else {
                return None;
            };
            let idx = if index < 0 {
                arr.len().checked_sub(index.unsigned_abs() as usize)?
            } else {
                index as usize
            };
            current = arr.get(idx)?;
        } else {
            current = current.get(part)?;
        }
    }

    Some(current.clone())
}
