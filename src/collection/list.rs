//! Paginated list facade
//!
//! Re-derives list operations on top of a forward-only page chain. Each
//! operation starts a fresh cursor at the first page and reads only as far
//! as it needs to.

use super::materialized::MaterializedList;
use crate::decode::PageDecoder;
use crate::error::{Error, Result};
use crate::page::Page;
use crate::pagination::{PageCursor, SizeClaim, SizedTraversal};
use crate::resolve::PageResolver;
use std::fmt;
use std::sync::Arc;
use tracing::trace;

/// Read-only list over a chain of pages, fetched lazily
///
/// The list itself is immutable and can be shared between threads; every
/// enumeration gets its own [`PageCursor`] and refetches the chain from the
/// first page.
pub struct PaginatedList<T> {
    first_page: Page<T>,
    resolver: Arc<dyn PageResolver>,
    decoder: Arc<dyn PageDecoder<T>>,
}

impl<T: Clone> PaginatedList<T> {
    /// Create a list from a first page already in hand; nothing is fetched
    pub fn new(
        first_page: Page<T>,
        resolver: Arc<dyn PageResolver>,
        decoder: Arc<dyn PageDecoder<T>>,
    ) -> Self {
        Self {
            first_page,
            resolver,
            decoder,
        }
    }

    /// Create a list, taking ownership of the collaborators
    pub fn with_collaborators<R, D>(first_page: Page<T>, resolver: R, decoder: D) -> Self
    where
        R: PageResolver + 'static,
        D: PageDecoder<T> + 'static,
    {
        Self::new(first_page, Arc::new(resolver), Arc::new(decoder))
    }

    pub fn first_page(&self) -> &Page<T> {
        &self.first_page
    }

    // ------------------------------------------------------------------------
    // Enumeration
    // ------------------------------------------------------------------------

    /// Start a new enumeration at the first page
    pub fn iter(&self) -> PageCursor<'_, T> {
        PageCursor::new(
            &self.first_page,
            self.resolver.as_ref(),
            self.decoder.as_ref(),
        )
    }

    /// Alias for [`iter`](Self::iter)
    pub fn stream(&self) -> PageCursor<'_, T> {
        self.iter()
    }

    /// Start a new size-aware traversal
    pub fn traversal(&self) -> SizedTraversal<'_, T> {
        SizedTraversal::new(self.iter(), SizeClaim::from_first_page(&self.first_page))
    }

    /// Request a parallel traversal; it always runs sequentially
    pub fn par_traversal(&self) -> SizedTraversal<'_, T> {
        trace!("Parallel traversal requested, running sequentially");
        self.traversal()
    }

    // ------------------------------------------------------------------------
    // Size reporting
    // ------------------------------------------------------------------------

    /// Total element count, if it can be known without fetching
    ///
    /// Uses the first page's reported total, or the first page's length when
    /// it is also the last page.
    pub fn total(&self) -> Option<usize> {
        self.first_page
            .total()
            .or_else(|| self.first_page.is_last().then_some(self.first_page.len()))
    }

    /// Per-page size reported by the first page
    pub fn per_page(&self) -> Option<usize> {
        self.first_page.per_page()
    }

    /// Check emptiness, fetching only when the first page is empty but not last
    pub fn is_empty(&self) -> Result<bool> {
        if !self.first_page.is_empty() {
            return Ok(false);
        }
        if self.first_page.is_last() {
            return Ok(true);
        }
        self.iter().has_next().map(|more| !more)
    }

    /// Count every element with one full traversal
    pub fn size(&self) -> Result<usize> {
        self.iter().try_fold(0, |count, element| element.map(|_| count + 1))
    }

    // ------------------------------------------------------------------------
    // Materialization
    // ------------------------------------------------------------------------

    /// Collect every element in order
    pub fn to_vec(&self) -> Result<Vec<T>> {
        self.iter().collect()
    }

    /// Copy every element into `target` if it is large enough
    ///
    /// Slots past the copied elements are set to `None`. When `target` is too
    /// small a new buffer of exactly the element count is returned instead.
    pub fn to_array(&self, mut target: Vec<Option<T>>) -> Result<Vec<Option<T>>> {
        let elements = self.to_vec()?;
        if target.len() < elements.len() {
            return Ok(elements.into_iter().map(Some).collect());
        }

        let copied = elements.len();
        for (slot, element) in target.iter_mut().zip(elements) {
            *slot = Some(element);
        }
        for slot in &mut target[copied..] {
            *slot = None;
        }
        Ok(target)
    }

    /// Read everything once into an in-memory list that never refetches
    pub fn materialize(&self) -> Result<MaterializedList<T>> {
        let elements = self.to_vec()?;
        Ok(MaterializedList::new(elements, self.total(), self.per_page()))
    }

    // ------------------------------------------------------------------------
    // Indexed access
    // ------------------------------------------------------------------------

    /// Element at `index`, stopping the traversal as soon as it is reached
    ///
    /// Fails with `IndexOutOfRange` when the chain ends first, even if the
    /// reported total claimed otherwise.
    pub fn get(&self, index: isize) -> Result<T> {
        let index = check_index(index)?;
        let mut seen = 0;
        for element in self.iter() {
            let element = element?;
            if seen == index {
                return Ok(element);
            }
            seen += 1;
        }
        Err(Error::index_out_of_range(index, seen))
    }

    /// Elements in `from..to`, reading only the first `to` elements
    pub fn sub_list(&self, from: usize, to: usize) -> Result<Vec<T>> {
        check_range(from, to)?;
        let mut prefix = Vec::new();
        for element in self.iter().take(to) {
            prefix.push(element?);
        }
        if prefix.len() < to {
            return Err(Error::index_out_of_range(to, prefix.len()));
        }
        Ok(prefix.split_off(from))
    }
}

impl<T: Clone + PartialEq> PaginatedList<T> {
    // ------------------------------------------------------------------------
    // Search
    // ------------------------------------------------------------------------

    /// Check membership, stopping at the first match
    pub fn contains(&self, value: &T) -> Result<bool> {
        self.index_of(value).map(|position| position.is_some())
    }

    /// Position of the first element equal to `value`
    pub fn index_of(&self, value: &T) -> Result<Option<usize>> {
        for (position, element) in self.iter().enumerate() {
            if element? == *value {
                return Ok(Some(position));
            }
        }
        Ok(None)
    }

    /// Position of the last element equal to `value`; always a full pass
    pub fn last_index_of(&self, value: &T) -> Result<Option<usize>> {
        let mut last = None;
        for (position, element) in self.iter().enumerate() {
            if element? == *value {
                last = Some(position);
            }
        }
        Ok(last)
    }
}

impl<T> Clone for PaginatedList<T>
where
    T: Clone,
{
    fn clone(&self) -> Self {
        Self {
            first_page: self.first_page.clone(),
            resolver: Arc::clone(&self.resolver),
            decoder: Arc::clone(&self.decoder),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for PaginatedList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaginatedList")
            .field("first_page", &self.first_page)
            .finish_non_exhaustive()
    }
}

impl<'a, T: Clone> IntoIterator for &'a PaginatedList<T> {
    type Item = Result<T>;
    type IntoIter = PageCursor<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// Argument checks
// ============================================================================

/// Reject negative indexes
pub(crate) fn check_index(index: isize) -> Result<usize> {
    usize::try_from(index)
        .map_err(|_| Error::invalid_argument(format!("index must not be negative: {index}")))
}

/// Reject reversed ranges
pub(crate) fn check_range(from: usize, to: usize) -> Result<()> {
    if from > to {
        return Err(Error::invalid_argument(format!(
            "range start {from} is greater than end {to}"
        )));
    }
    Ok(())
}
