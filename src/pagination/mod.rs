//! Pagination module
//!
//! Supports: lazy forward cursors over page chains, size-aware traversal
//!
//! # Overview
//!
//! A [`PageCursor`] drains the page in hand and fetches the next one through
//! the resolver and decoder only when it runs out. A [`SizedTraversal`]
//! pairs a cursor with the size characteristics derived from the first page.

mod cursor;
mod traversal;

pub use cursor::PageCursor;
pub use traversal::{Characteristics, SizeClaim, SizedTraversal};

#[cfg(test)]
mod tests;
