//! Page model
//!
//! A [`Page`] carries the decoded elements of one batch, its [`PageMeta`]
//! and an optional [`Locator`] for the following batch.

mod types;

pub use types::{Locator, Page, PageMeta};
