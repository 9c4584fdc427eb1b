//! Collection module
//!
//! The list-contract facade over a page chain.
//!
//! # Overview
//!
//! [`PaginatedList`] answers size, search, indexing and sub-range queries by
//! walking a fresh cursor each time. [`MaterializedList`] is the explicit
//! opt-in for callers who want to read the chain once and query it many
//! times.

mod list;
mod materialized;

pub use list::PaginatedList;
pub use materialized::MaterializedList;
