//! Page decoder module
//!
//! Supports: JSON documents with configurable record/metadata/link paths
//!
//! # Overview
//!
//! A decoder turns the raw bytes of one page into a typed
//! [`Page`](crate::page::Page), filling in whatever pagination metadata and
//! next link the bytes carry.

mod decoders;
mod types;

pub use decoders::{FnDecoder, JsonPageDecoder};
pub use types::{DecoderConfig, PageDecoder};
