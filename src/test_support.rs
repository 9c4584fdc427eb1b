//! Shared fixtures for unit tests
//!
//! A [`PageChain`] wires a list of pages together with locators named
//! `"page 2"`, `"page 3"`, ... and serves them through a [`MemoryResolver`]
//! and a [`ChainDecoder`], mirroring how a real source hands out pages.

use crate::collection::PaginatedList;
use crate::decode::PageDecoder;
use crate::error::{Error, Result};
use crate::page::{Page, PageMeta};
use crate::resolve::MemoryResolver;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Build owned ids from string slices
pub(crate) fn ids(ids: &[&str]) -> Vec<String> {
    ids.iter().map(|id| (*id).to_string()).collect()
}

/// Decoder that maps known byte strings to prepared pages
#[derive(Debug, Default)]
pub(crate) struct ChainDecoder {
    pages: HashMap<Vec<u8>, Page<String>>,
    calls: AtomicUsize,
}

impl ChainDecoder {
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl PageDecoder<String> for ChainDecoder {
    fn decode(&self, bytes: &[u8]) -> Result<Page<String>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.pages.get(bytes).cloned().ok_or_else(|| {
            Error::decode(format!(
                "unrecognised page bytes: {}",
                String::from_utf8_lossy(bytes)
            ))
        })
    }
}

/// A first page plus the collaborators that serve the rest of its chain
pub(crate) struct PageChain {
    pub first: Page<String>,
    pub resolver: Arc<MemoryResolver>,
    pub decoder: Arc<ChainDecoder>,
}

impl PageChain {
    /// Chain pages with no metadata
    pub(crate) fn new(pages: &[&[&str]]) -> Self {
        Self::builder(pages).build()
    }

    pub(crate) fn builder(pages: &[&[&str]]) -> ChainBuilder {
        ChainBuilder {
            pages: pages.iter().map(|page| Page::new(ids(page))).collect(),
            first_meta: PageMeta::default(),
            unresolvable: None,
            corrupt: None,
        }
    }

    /// Build a list over this chain
    pub(crate) fn list(&self) -> PaginatedList<String> {
        PaginatedList::new(
            self.first.clone(),
            self.resolver.clone(),
            self.decoder.clone(),
        )
    }

    /// Resolver calls made so far
    pub(crate) fn fetches(&self) -> usize {
        self.resolver.calls()
    }
}

pub(crate) struct ChainBuilder {
    pages: Vec<Page<String>>,
    first_meta: PageMeta,
    unresolvable: Option<usize>,
    corrupt: Option<usize>,
}

impl ChainBuilder {
    /// Metadata reported by the first page
    pub(crate) fn first_meta(mut self, meta: PageMeta) -> Self {
        self.first_meta = meta;
        self
    }

    /// Metadata reported by a later page
    pub(crate) fn meta_at(mut self, index: usize, meta: PageMeta) -> Self {
        let page = std::mem::take(&mut self.pages[index]);
        self.pages[index] = page.with_meta(meta);
        self
    }

    /// Make the resolver fail for the page at `index`
    pub(crate) fn unresolvable(mut self, index: usize) -> Self {
        self.unresolvable = Some(index);
        self
    }

    /// Make the decoder fail for the page at `index`
    pub(crate) fn corrupt(mut self, index: usize) -> Self {
        self.corrupt = Some(index);
        self
    }

    pub(crate) fn build(self) -> PageChain {
        let count = self.pages.len();
        let mut resolver = MemoryResolver::new();
        let mut decoder = ChainDecoder::default();
        let mut first = Page::empty();

        for (i, page) in self.pages.into_iter().enumerate() {
            let page = if i + 1 < count {
                page.with_next(locator(i + 1))
            } else {
                page
            };

            if i == 0 {
                first = page.with_meta(self.first_meta);
                continue;
            }

            let name = locator(i);
            if self.unresolvable == Some(i) {
                continue;
            }
            if self.corrupt == Some(i) {
                resolver.insert(name.as_str(), format!("corrupt {name}"));
                continue;
            }
            resolver.insert(name.as_str(), name.clone());
            decoder.pages.insert(name.into_bytes(), page);
        }

        PageChain {
            first,
            resolver: Arc::new(resolver),
            decoder: Arc::new(decoder),
        }
    }
}

/// Locator of the page at zero-based `index`
pub(crate) fn locator(index: usize) -> String {
    format!("page {}", index + 1)
}
