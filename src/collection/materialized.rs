//! Materialized list
//!
//! Opt-in cache: every element of a [`PaginatedList`](super::PaginatedList)
//! read once into memory, so repeated lookups do not refetch the chain.

use super::list::{check_index, check_range};
use crate::error::{Error, Result};
use std::ops::Deref;

/// Fully-read snapshot of a paginated list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializedList<T> {
    elements: Vec<T>,
    reported_total: Option<usize>,
    per_page: Option<usize>,
}

impl<T> MaterializedList<T> {
    pub(crate) fn new(
        elements: Vec<T>,
        reported_total: Option<usize>,
        per_page: Option<usize>,
    ) -> Self {
        Self {
            elements,
            reported_total,
            per_page,
        }
    }

    /// Number of elements actually read
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Total the source reported up front, which may differ from `len()`
    pub fn total(&self) -> Option<usize> {
        self.reported_total
    }

    pub fn per_page(&self) -> Option<usize> {
        self.per_page
    }

    pub fn as_slice(&self) -> &[T] {
        &self.elements
    }

    pub fn into_vec(self) -> Vec<T> {
        self.elements
    }

    /// Element at `index`, with the same argument checks as the lazy list
    pub fn get(&self, index: isize) -> Result<&T> {
        let index = check_index(index)?;
        self.elements
            .get(index)
            .ok_or_else(|| Error::index_out_of_range(index, self.elements.len()))
    }

    /// Elements in `from..to`
    pub fn sub_list(&self, from: usize, to: usize) -> Result<&[T]> {
        check_range(from, to)?;
        self.elements
            .get(from..to)
            .ok_or_else(|| Error::index_out_of_range(to, self.elements.len()))
    }
}

impl<T: PartialEq> MaterializedList<T> {
    pub fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }

    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.elements.iter().position(|element| element == value)
    }

    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        self.elements.iter().rposition(|element| element == value)
    }
}

impl<T> Deref for MaterializedList<T> {
    type Target = [T];

    fn deref(&self) -> &[T] {
        &self.elements
    }
}

impl<T> IntoIterator for MaterializedList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a MaterializedList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
