//! Size-aware traversal
//!
//! Wraps a [`PageCursor`] with the size characteristics a split-capable
//! consumer needs. The size claim comes from the first page's metadata only
//! and is fixed for the lifetime of the traversal.

use super::cursor::PageCursor;
use crate::error::Result;
use crate::page::Page;
use std::fmt;
use std::iter::FusedIterator;
use std::ops::{BitOr, BitOrAssign};

// ============================================================================
// Characteristics
// ============================================================================

/// Set of traversal characteristics
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Characteristics(u8);

impl Characteristics {
    /// Elements have a defined encounter order
    pub const ORDERED: Self = Self(1);
    /// No element is a null/empty marker
    pub const NONNULL: Self = Self(1 << 1);
    /// The exact element count is known before traversal
    pub const SIZED: Self = Self(1 << 2);
    /// Any split of this traversal would also be sized
    pub const SUBSIZED: Self = Self(1 << 3);

    /// The empty set
    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Check whether every flag in `other` is set
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Characteristics {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for Characteristics {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for Characteristics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names = [
            (Self::ORDERED, "ORDERED"),
            (Self::NONNULL, "NONNULL"),
            (Self::SIZED, "SIZED"),
            (Self::SUBSIZED, "SUBSIZED"),
        ];
        let set: Vec<&str> = names
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect();
        write!(f, "Characteristics({})", set.join(" | "))
    }
}

// ============================================================================
// Size Claim
// ============================================================================

/// What a traversal claims to know about its length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeClaim {
    /// The first page reported the total element count
    Exact(usize),
    /// No size is claimed; callers must not assume any bound
    Unknown,
}

impl SizeClaim {
    /// Decide the claim from a first page's metadata
    pub fn from_first_page<T>(page: &Page<T>) -> Self {
        page.total().map_or(Self::Unknown, Self::Exact)
    }

    pub fn is_exact(self) -> bool {
        matches!(self, Self::Exact(_))
    }
}

// ============================================================================
// Sized Traversal
// ============================================================================

/// A cursor paired with its size characteristics
///
/// Always sequential: splitting is refused and a traversal never reports
/// itself as parallel, since concurrent splits would race on page fetches.
pub struct SizedTraversal<'a, T> {
    cursor: PageCursor<'a, T>,
    claim: SizeClaim,
}

impl<'a, T: Clone> SizedTraversal<'a, T> {
    /// Wrap a cursor with a claim decided from its first page
    pub fn new(cursor: PageCursor<'a, T>, claim: SizeClaim) -> Self {
        Self { cursor, claim }
    }

    pub fn size_claim(&self) -> SizeClaim {
        self.claim
    }

    pub fn characteristics(&self) -> Characteristics {
        match self.claim {
            SizeClaim::Exact(_) => {
                Characteristics::ORDERED
                    | Characteristics::NONNULL
                    | Characteristics::SIZED
                    | Characteristics::SUBSIZED
            }
            SizeClaim::Unknown => Characteristics::ORDERED | Characteristics::NONNULL,
        }
    }

    /// Remaining element count, only when the size is claimed exactly
    pub fn exact_size_if_known(&self) -> Option<usize> {
        match self.claim {
            SizeClaim::Exact(total) => Some(total.saturating_sub(self.cursor.position())),
            SizeClaim::Unknown => None,
        }
    }

    /// Estimated remaining element count; `None` means unbounded
    pub fn estimate_size(&self) -> Option<usize> {
        self.exact_size_if_known()
    }

    /// Splitting is never supported
    pub fn try_split(&mut self) -> Option<Self> {
        None
    }

    pub fn is_parallel(&self) -> bool {
        false
    }

    /// Unwrap the underlying cursor
    pub fn into_cursor(self) -> PageCursor<'a, T> {
        self.cursor
    }
}

impl<T: Clone> Iterator for SizedTraversal<'_, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        self.cursor.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.cursor.size_hint()
    }
}

impl<T: Clone> FusedIterator for SizedTraversal<'_, T> {}

impl<T> fmt::Debug for SizedTraversal<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizedTraversal")
            .field("claim", &self.claim)
            .field("cursor", &self.cursor)
            .finish()
    }
}
