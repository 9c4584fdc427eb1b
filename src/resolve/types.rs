//! Resolver types and traits

use crate::error::Result;
use crate::page::Locator;
use std::sync::Arc;

/// Trait for turning a locator into raw page bytes
///
/// Implementations must tolerate being called repeatedly with the same
/// locator: independent enumerations of one collection each fetch the chain
/// from the start.
pub trait PageResolver: Send + Sync {
    /// Fetch the raw bytes of the page behind `locator`
    fn resolve(&self, locator: &Locator) -> Result<Vec<u8>>;
}

impl<R: PageResolver + ?Sized> PageResolver for Arc<R> {
    fn resolve(&self, locator: &Locator) -> Result<Vec<u8>> {
        (**self).resolve(locator)
    }
}

impl<R: PageResolver + ?Sized> PageResolver for Box<R> {
    fn resolve(&self, locator: &Locator) -> Result<Vec<u8>> {
        (**self).resolve(locator)
    }
}
