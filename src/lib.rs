// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::match_wildcard_for_single_variants)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::float_cmp)]

//! # paginated-list
//!
//! A lazily-paginated, read-only list over a chain of remotely fetched pages.
//!
//! ## Features
//!
//! - **Lazy Pagination**: pages are fetched one at a time, only when enumeration reaches them
//! - **Unknown Sizes**: works whether or not the source reports a total up front
//! - **List Operations**: indexing, search and sub-ranges on top of a forward-only cursor
//! - **Pluggable Sources**: bring your own resolver (transport) and decoder (wire format)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use paginated_list::{JsonPageDecoder, MemoryResolver, Page, PaginatedList, Result};
//!
//! fn main() -> Result<()> {
//!     let resolver = MemoryResolver::new()
//!         .with_page("page 2", r#"{"data": [3, 4], "links": {"next": null}}"#);
//!     let first = Page::new(vec![1, 2]).with_next("page 2");
//!
//!     let list = PaginatedList::with_collaborators(first, resolver, JsonPageDecoder::new());
//!     assert_eq!(list.total(), None);
//!     assert_eq!(list.get(3)?, 4);
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  PaginatedList (facade)                     │
//! │  get · contains · index_of · sub_list · to_vec · size       │
//! └─────────────────────────────────────────────────────────────┘
//!                               │ fresh cursor per call
//! ┌─────────────────────────────┴───────────────────────────────┐
//! │        SizedTraversal  ──wraps──▶  PageCursor               │
//! └─────────────────────────────────────────────────────────────┘
//!                               │ next locator
//!            ┌──────────────────┴──────────────────┐
//!            ▼                                     ▼
//!      PageResolver (bytes)  ────────────▶  PageDecoder (Page<T>)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Page model
pub mod page;

/// Page resolvers (locator to bytes)
pub mod resolve;

/// Page decoders (bytes to pages)
pub mod decode;

/// Paginated cursor and size-aware traversal
pub mod pagination;

/// List-contract facade
pub mod collection;

/// File-backed source configuration
pub mod config;

/// Command-line interface
pub mod cli;

#[cfg(test)]
mod test_support;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, ErrorKind, Result};

pub use collection::{MaterializedList, PaginatedList};
pub use config::{config_from_str, load_config, SourceConfig};
pub use decode::{DecoderConfig, FnDecoder, JsonPageDecoder, PageDecoder};
pub use page::{Locator, Page, PageMeta};
pub use pagination::{Characteristics, PageCursor, SizeClaim, SizedTraversal};
pub use resolve::{FileResolver, FnResolver, MemoryResolver, PageResolver};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
