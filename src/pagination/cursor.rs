//! Paginated cursor
//!
//! Walks a chain of pages forward, fetching each following page through the
//! resolver and decoder only once the current one has been drained.

use crate::decode::PageDecoder;
use crate::error::{Error, Result};
use crate::page::{Locator, Page};
use crate::resolve::PageResolver;
use std::fmt;
use std::iter::FusedIterator;
use tracing::{debug, trace, warn};

/// Unread elements of the page being drained
///
/// The first page belongs to the collection and is only borrowed; pages
/// fetched by the cursor are owned and dropped once drained.
enum PageElements<'a, T> {
    Borrowed(std::slice::Iter<'a, T>),
    Owned(std::vec::IntoIter<T>),
}

impl<T: Clone> PageElements<'_, T> {
    fn next(&mut self) -> Option<T> {
        match self {
            Self::Borrowed(iter) => iter.next().cloned(),
            Self::Owned(iter) => iter.next(),
        }
    }

    fn remaining(&self) -> usize {
        match self {
            Self::Borrowed(iter) => iter.len(),
            Self::Owned(iter) => iter.len(),
        }
    }
}

/// Forward-only cursor over every element of a page chain
///
/// Created fresh for each enumeration. Yields `Err` at most once, when a
/// page cannot be resolved or decoded, and `None` from then on.
pub struct PageCursor<'a, T> {
    current: PageElements<'a, T>,
    next: Option<Locator>,
    resolver: &'a dyn PageResolver,
    decoder: &'a dyn PageDecoder<T>,
    first_total: Option<usize>,
    pages_fetched: usize,
    position: usize,
    failed: bool,
}

impl<'a, T: Clone> PageCursor<'a, T> {
    /// Start a cursor at `first`; no fetch happens until the first page is drained
    pub fn new(
        first: &'a Page<T>,
        resolver: &'a dyn PageResolver,
        decoder: &'a dyn PageDecoder<T>,
    ) -> Self {
        Self {
            current: PageElements::Borrowed(first.elements().iter()),
            next: first.next().cloned(),
            resolver,
            decoder,
            first_total: first.total(),
            pages_fetched: 0,
            position: 0,
            failed: false,
        }
    }

    /// Check whether another element is available, fetching ahead if needed
    ///
    /// Empty pages that still carry a next locator are skipped.
    pub fn has_next(&mut self) -> Result<bool> {
        loop {
            if self.current.remaining() > 0 {
                return Ok(true);
            }
            if !self.advance()? {
                return Ok(false);
            }
        }
    }

    /// Return the next element, or `Error::Exhausted` past the end
    pub fn next_element(&mut self) -> Result<T> {
        self.next().unwrap_or(Err(Error::Exhausted))
    }

    /// True once the last page has been drained or a fetch has failed
    pub fn is_exhausted(&self) -> bool {
        self.current.remaining() == 0 && (self.next.is_none() || self.failed)
    }

    /// Number of pages fetched so far (the first page is not counted)
    pub fn pages_fetched(&self) -> usize {
        self.pages_fetched
    }

    /// Number of elements yielded so far
    pub fn position(&self) -> usize {
        self.position
    }

    /// Replace the drained page with the next one in the chain
    ///
    /// Returns `Ok(false)` when there is no next page.
    fn advance(&mut self) -> Result<bool> {
        if self.failed {
            return Ok(false);
        }
        let Some(locator) = self.next.take() else {
            return Ok(false);
        };

        let page = match self.fetch(&locator) {
            Ok(page) => page,
            Err(e) => {
                warn!("Traversal stopped at page '{}': {}", locator, e);
                self.failed = true;
                return Err(e);
            }
        };
        self.pages_fetched += 1;

        debug!(
            "Fetched page {} from '{}': {} elements, next: {}",
            self.pages_fetched,
            locator,
            page.len(),
            page.next().map_or("none", Locator::as_str)
        );
        if let (Some(first), Some(reported)) = (self.first_total, page.total()) {
            if first != reported {
                debug!(
                    "Page '{}' reports total {} but first page reported {}; keeping {}",
                    locator, reported, first, first
                );
            }
        }
        if page.is_empty() && !page.is_last() {
            trace!("Skipping empty page '{}'", locator);
        }

        let (elements, _meta, next) = page.into_parts();
        self.current = PageElements::Owned(elements.into_iter());
        self.next = next;
        Ok(true)
    }

    fn fetch(&self, locator: &Locator) -> Result<Page<T>> {
        let bytes = self
            .resolver
            .resolve(locator)
            .map_err(|e| e.into_resolution(locator.as_str()))?;
        self.decoder.decode(&bytes).map_err(Error::into_decode)
    }
}

impl<T: Clone> Iterator for PageCursor<'_, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.has_next() {
            Ok(true) => {
                let element = self.current.next()?;
                self.position += 1;
                Some(Ok(element))
            }
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.current.remaining();
        if self.next.is_none() || self.failed {
            (remaining, Some(remaining))
        } else {
            (remaining, None)
        }
    }
}

impl<T: Clone> FusedIterator for PageCursor<'_, T> {}

impl<T> fmt::Debug for PageCursor<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageCursor")
            .field("next", &self.next)
            .field("pages_fetched", &self.pages_fetched)
            .field("position", &self.position)
            .field("failed", &self.failed)
            .finish_non_exhaustive()
    }
}
