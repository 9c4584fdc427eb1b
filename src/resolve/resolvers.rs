//! Resolver implementations
//!
//! Each resolver handles a specific page source.

use super::types::PageResolver;
use crate::error::{Error, Result};
use crate::page::Locator;
use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};
use tracing::debug;

// ============================================================================
// Memory Resolver
// ============================================================================

/// Resolver backed by an in-memory map of locator to bytes
///
/// Every call is counted, so tests and tools can check how many fetches a
/// traversal performed.
#[derive(Debug, Default)]
pub struct MemoryResolver {
    pages: HashMap<Locator, Vec<u8>>,
    calls: AtomicUsize,
    calls_by_locator: Mutex<HashMap<Locator, usize>>,
}

impl MemoryResolver {
    /// Create an empty resolver
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the bytes served for a locator
    #[must_use]
    pub fn with_page(mut self, locator: impl Into<Locator>, bytes: impl Into<Vec<u8>>) -> Self {
        self.insert(locator, bytes);
        self
    }

    /// Register the bytes served for a locator
    pub fn insert(&mut self, locator: impl Into<Locator>, bytes: impl Into<Vec<u8>>) {
        self.pages.insert(locator.into(), bytes.into());
    }

    /// Total number of `resolve` calls, successful or not
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Number of `resolve` calls made for one locator
    pub fn calls_for(&self, locator: impl Into<Locator>) -> usize {
        let locator = locator.into();
        self.calls_by_locator
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&locator)
            .copied()
            .unwrap_or(0)
    }
}

impl PageResolver for MemoryResolver {
    fn resolve(&self, locator: &Locator) -> Result<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        *self
            .calls_by_locator
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(locator.clone())
            .or_insert(0) += 1;

        self.pages
            .get(locator)
            .cloned()
            .ok_or_else(|| Error::resolution(locator.as_str(), "no page registered"))
    }
}

// ============================================================================
// File Resolver
// ============================================================================

/// Resolver that reads pages from files relative to a base directory
#[derive(Debug, Clone)]
pub struct FileResolver {
    base_dir: PathBuf,
}

impl FileResolver {
    /// Create a resolver rooted at `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Path a locator maps to
    pub fn path_for(&self, locator: &Locator) -> PathBuf {
        self.base_dir.join(locator.as_str())
    }
}

impl PageResolver for FileResolver {
    fn resolve(&self, locator: &Locator) -> Result<Vec<u8>> {
        if locator.as_str().is_empty() {
            return Err(Error::resolution("", "empty locator"));
        }

        let path = self.path_for(locator);
        debug!("Reading page file: {}", path.display());

        fs::read(&path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::resolution(
                    locator.as_str(),
                    format!("file not found: {}", path.display()),
                )
            } else {
                Error::resolution(
                    locator.as_str(),
                    format!("failed to read {}: {e}", path.display()),
                )
            }
        })
    }
}

// ============================================================================
// Closure Resolver
// ============================================================================

/// Resolver that delegates to a closure
pub struct FnResolver<F> {
    f: F,
}

impl<F> FnResolver<F>
where
    F: Fn(&Locator) -> Result<Vec<u8>> + Send + Sync,
{
    /// Wrap a closure as a resolver
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> fmt::Debug for FnResolver<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnResolver").finish_non_exhaustive()
    }
}

impl<F> PageResolver for FnResolver<F>
where
    F: Fn(&Locator) -> Result<Vec<u8>> + Send + Sync,
{
    fn resolve(&self, locator: &Locator) -> Result<Vec<u8>> {
        (self.f)(locator)
    }
}
