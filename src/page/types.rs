//! Page types
//!
//! A page is one already-fetched batch of elements together with its
//! pagination metadata and the locator of the page that follows it.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Locator
// ============================================================================

/// Opaque reference used to request the next page (usually a link)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Locator(String);

impl Locator {
    /// Create a new locator
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Borrow the locator as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the locator, returning the inner string
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Locator {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Locator {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for Locator {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ============================================================================
// Page Metadata
// ============================================================================

/// Pagination metadata reported alongside a page
///
/// `None` means the source did not report the value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageMeta {
    /// Total element count across all pages
    #[serde(default)]
    pub total: Option<usize>,
    /// Element count the page was sized to hold
    #[serde(default)]
    pub per_page: Option<usize>,
}

impl PageMeta {
    /// Metadata with nothing known
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Metadata with both values known
    pub fn new(total: usize, per_page: usize) -> Self {
        Self {
            total: Some(total),
            per_page: Some(per_page),
        }
    }

    /// Check whether the total element count is known
    pub fn has_total(&self) -> bool {
        self.total.is_some()
    }
}

// ============================================================================
// Page
// ============================================================================

/// A single fetched batch of elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    elements: Vec<T>,
    meta: PageMeta,
    next: Option<Locator>,
}

impl<T> Page<T> {
    /// Create a final page with no metadata
    pub fn new(elements: Vec<T>) -> Self {
        Self {
            elements,
            meta: PageMeta::default(),
            next: None,
        }
    }

    /// Create an empty final page
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Set the metadata
    #[must_use]
    pub fn with_meta(mut self, meta: PageMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Set the total element count
    #[must_use]
    pub fn with_total(mut self, total: usize) -> Self {
        self.meta.total = Some(total);
        self
    }

    /// Set the per-page size
    #[must_use]
    pub fn with_per_page(mut self, per_page: usize) -> Self {
        self.meta.per_page = Some(per_page);
        self
    }

    /// Set the locator of the following page
    #[must_use]
    pub fn with_next(mut self, next: impl Into<Locator>) -> Self {
        self.next = Some(next.into());
        self
    }

    pub fn elements(&self) -> &[T] {
        &self.elements
    }

    pub fn meta(&self) -> &PageMeta {
        &self.meta
    }

    pub fn total(&self) -> Option<usize> {
        self.meta.total
    }

    pub fn per_page(&self) -> Option<usize> {
        self.meta.per_page
    }

    pub fn next(&self) -> Option<&Locator> {
        self.next.as_ref()
    }

    /// Number of elements on this page
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// A page without a next locator is the last one, whatever its total says
    pub fn is_last(&self) -> bool {
        self.next.is_none()
    }

    /// Split the page into elements, metadata and next locator
    pub fn into_parts(self) -> (Vec<T>, PageMeta, Option<Locator>) {
        (self.elements, self.meta, self.next)
    }
}

impl<T> Default for Page<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T> From<Vec<T>> for Page<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::new(elements)
    }
}
