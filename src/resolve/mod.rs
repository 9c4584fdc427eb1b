//! Page resolver module
//!
//! Supports: in-memory maps, local files, closures
//!
//! # Overview
//!
//! A resolver turns a next-page [`Locator`](crate::page::Locator) into the raw
//! bytes of that page. Transport concerns such as retries, timeouts and TLS
//! belong to the resolver, never to the cursor that drives it.

mod resolvers;
mod types;

pub use resolvers::{FileResolver, FnResolver, MemoryResolver};
pub use types::PageResolver;
