//! Tests for pagination module

use super::*;
use crate::error::{Error, ErrorKind};
use crate::page::{Page, PageMeta};
use crate::resolve::{FnResolver, MemoryResolver};
use crate::test_support::{ids, PageChain};
use pretty_assertions::assert_eq;

fn open(chain: &PageChain) -> PageCursor<'_, String> {
    PageCursor::new(&chain.first, chain.resolver.as_ref(), chain.decoder.as_ref())
}

fn drain(cursor: PageCursor<'_, String>) -> Vec<String> {
    cursor.collect::<crate::Result<Vec<_>>>().unwrap()
}

// ============================================================================
// PageCursor Tests
// ============================================================================

#[test]
fn test_cursor_single_page_no_fetch() {
    let chain = PageChain::new(&[&["1", "2"]]);

    assert_eq!(drain(open(&chain)), ids(&["1", "2"]));
    assert_eq!(chain.fetches(), 0);
}

#[test]
fn test_cursor_creation_does_not_fetch() {
    let chain = PageChain::new(&[&["1"], &["2"]]);
    let cursor = open(&chain);

    assert_eq!(cursor.pages_fetched(), 0);
    assert_eq!(chain.fetches(), 0);
}

#[test]
fn test_cursor_three_pages_in_order() {
    let chain = PageChain::new(&[&["a"], &["b"], &["c"]]);

    assert_eq!(drain(open(&chain)), ids(&["a", "b", "c"]));
    assert_eq!(chain.resolver.calls(), 2);
    assert_eq!(chain.resolver.calls_for("page 1"), 0);
    assert_eq!(chain.resolver.calls_for("page 2"), 1);
    assert_eq!(chain.resolver.calls_for("page 3"), 1);
    assert_eq!(chain.decoder.calls(), 2);
}

#[test]
fn test_cursor_fetches_lazily() {
    let chain = PageChain::new(&[&["a", "b"], &["c"]]);
    let mut cursor = open(&chain);

    assert_eq!(cursor.next().unwrap().unwrap(), "a");
    assert_eq!(cursor.next().unwrap().unwrap(), "b");
    assert_eq!(chain.fetches(), 0);

    assert_eq!(cursor.next().unwrap().unwrap(), "c");
    assert_eq!(chain.fetches(), 1);
    assert_eq!(cursor.pages_fetched(), 1);
    assert_eq!(cursor.position(), 3);
}

#[test]
fn test_cursor_skips_empty_pages() {
    let chain = PageChain::new(&[&[], &["1"], &[], &[], &["2", "3"], &[]]);
    let mut cursor = open(&chain);

    assert!(cursor.has_next().unwrap());
    assert_eq!(drain(cursor), ids(&["1", "2", "3"]));
    assert_eq!(chain.fetches(), 5);
}

#[test]
fn test_cursor_has_next_fetches_ahead_only_when_needed() {
    let chain = PageChain::new(&[&["1"], &["2"]]);
    let mut cursor = open(&chain);

    assert!(cursor.has_next().unwrap());
    assert_eq!(chain.fetches(), 0);

    cursor.next().unwrap().unwrap();
    assert!(cursor.has_next().unwrap());
    assert_eq!(chain.fetches(), 1);

    // repeated checks do not refetch
    assert!(cursor.has_next().unwrap());
    assert_eq!(chain.fetches(), 1);
}

#[test]
fn test_cursor_has_next_false_after_trailing_empty_page() {
    let chain = PageChain::new(&[&["1"], &[]]);
    let mut cursor = open(&chain);

    cursor.next().unwrap().unwrap();
    assert!(!cursor.is_exhausted());
    assert!(!cursor.has_next().unwrap());
    assert!(cursor.is_exhausted());
}

#[test]
fn test_cursor_next_element_exhausted() {
    let chain = PageChain::new(&[&["only"]]);
    let mut cursor = open(&chain);

    assert_eq!(cursor.next_element().unwrap(), "only");
    let err = cursor.next_element().unwrap_err();
    assert!(matches!(err, Error::Exhausted));
    assert!(cursor.next().is_none());
}

#[test]
fn test_cursor_resolution_failure_is_terminal() {
    let chain = PageChain::builder(&[&["1"], &["2"], &["3"]])
        .unresolvable(1)
        .build();
    let mut cursor = open(&chain);

    assert_eq!(cursor.next().unwrap().unwrap(), "1");
    let err = cursor.next().unwrap().unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Resolution);
    assert!(err.to_string().contains("page 2"));

    assert!(cursor.next().is_none());
    assert!(!cursor.has_next().unwrap());
    assert!(cursor.is_exhausted());
    assert_eq!(chain.fetches(), 1);
}

#[test]
fn test_cursor_decode_failure_is_terminal() {
    let chain = PageChain::builder(&[&["1"], &["2"], &["3"]])
        .corrupt(1)
        .build();
    let results: Vec<_> = open(&chain).collect();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].as_ref().unwrap(), "1");
    assert_eq!(results[1].as_ref().unwrap_err().kind(), ErrorKind::Decode);
    // never skipped ahead to page 3
    assert_eq!(chain.resolver.calls_for("page 3"), 0);
}

#[test]
fn test_cursor_retags_resolver_errors() {
    let first = Page::new(ids(&["1"])).with_next("elsewhere");
    let resolver = FnResolver::new(|_: &crate::page::Locator| {
        Err(Error::Io(std::io::Error::other("reset")))
    });
    let decoder = crate::test_support::ChainDecoder::default();
    let mut cursor = PageCursor::new(&first, &resolver, &decoder);

    cursor.next().unwrap().unwrap();
    let err = cursor.next().unwrap().unwrap_err();
    match err {
        Error::Resolution { locator, message } => {
            assert_eq!(locator, "elsewhere");
            assert_eq!(message, "IO error: reset");
        }
        other => panic!("Expected Resolution, got {other:?}"),
    }
}

#[test]
fn test_cursor_size_hint() {
    let chain = PageChain::new(&[&["1", "2"], &["3"]]);
    let mut cursor = open(&chain);

    assert_eq!(cursor.size_hint(), (2, None));
    cursor.next();
    cursor.next();
    cursor.next();
    assert_eq!(cursor.size_hint(), (0, Some(0)));

    let single = PageChain::new(&[&["1", "2"]]);
    assert_eq!(open(&single).size_hint(), (2, Some(2)));
}

#[test]
fn test_cursor_ignores_later_totals() {
    let chain = PageChain::builder(&[&["1"], &["2"]])
        .first_meta(PageMeta::new(2, 1))
        .meta_at(1, PageMeta::new(50, 1))
        .build();
    let traversal = SizedTraversal::new(open(&chain), SizeClaim::from_first_page(&chain.first));

    assert_eq!(traversal.exact_size_if_known(), Some(2));
    let mut traversal = traversal;
    traversal.next();
    traversal.next();
    assert_eq!(traversal.exact_size_if_known(), Some(0));
}

#[test]
fn test_cursor_independent_enumerations() {
    let chain = PageChain::new(&[&["1"], &["2"], &["3"]]);

    let first = drain(open(&chain));
    let second = drain(open(&chain));

    assert_eq!(first, second);
    assert_eq!(chain.resolver.calls_for("page 2"), 2);
    assert_eq!(chain.resolver.calls_for("page 3"), 2);
}

#[test]
fn test_cursor_over_memory_resolver_unknown_locator() {
    let first = Page::new(ids(&["1"])).with_next("gone");
    let resolver = MemoryResolver::new();
    let decoder = crate::test_support::ChainDecoder::default();
    let results: Vec<_> = PageCursor::new(&first, &resolver, &decoder).collect();

    assert_eq!(results.len(), 2);
    assert!(results[1].as_ref().unwrap_err().is_traversal_failure());
    assert_eq!(decoder.calls(), 0);
}

// ============================================================================
// Characteristics Tests
// ============================================================================

#[test]
fn test_characteristics_flags() {
    let flags = Characteristics::ORDERED | Characteristics::NONNULL;

    assert!(flags.contains(Characteristics::ORDERED));
    assert!(flags.contains(Characteristics::NONNULL));
    assert!(!flags.contains(Characteristics::SIZED));
    assert!(!flags.contains(Characteristics::ORDERED | Characteristics::SUBSIZED));
    assert!(Characteristics::empty().is_empty());

    let mut more = flags;
    more |= Characteristics::SIZED;
    assert_eq!(more.bits(), flags.bits() | Characteristics::SIZED.bits());
}

#[test]
fn test_characteristics_debug() {
    let flags = Characteristics::ORDERED | Characteristics::SIZED;
    assert_eq!(format!("{flags:?}"), "Characteristics(ORDERED | SIZED)");
}

// ============================================================================
// SizedTraversal Tests
// ============================================================================

#[test]
fn test_size_claim_from_first_page() {
    assert_eq!(
        SizeClaim::from_first_page(&Page::<u8>::empty().with_total(1)),
        SizeClaim::Exact(1)
    );
    assert_eq!(
        SizeClaim::from_first_page(&Page::<u8>::empty()),
        SizeClaim::Unknown
    );
    assert!(SizeClaim::Exact(0).is_exact());
    assert!(!SizeClaim::Unknown.is_exact());
}

#[test]
fn test_traversal_known_size() {
    let chain = PageChain::builder(&[&["1"]])
        .first_meta(PageMeta::new(1, 10))
        .build();
    let traversal = SizedTraversal::new(open(&chain), SizeClaim::from_first_page(&chain.first));

    assert_eq!(
        traversal.characteristics(),
        Characteristics::ORDERED
            | Characteristics::NONNULL
            | Characteristics::SUBSIZED
            | Characteristics::SIZED
    );
    assert_eq!(traversal.exact_size_if_known(), Some(1));
    assert_eq!(traversal.estimate_size(), Some(1));
}

#[test]
fn test_traversal_unknown_size() {
    let chain = PageChain::new(&[&["1"], &["2"]]);
    let traversal = SizedTraversal::new(open(&chain), SizeClaim::from_first_page(&chain.first));

    assert_eq!(
        traversal.characteristics(),
        Characteristics::ORDERED | Characteristics::NONNULL
    );
    assert_eq!(traversal.exact_size_if_known(), None);
    assert_eq!(traversal.estimate_size(), None);
    assert_eq!(traversal.size_claim(), SizeClaim::Unknown);
}

#[test]
fn test_traversal_claim_is_not_upgraded() {
    let chain = PageChain::builder(&[&["1"], &["2"]])
        .meta_at(1, PageMeta::new(2, 1))
        .build();
    let mut traversal =
        SizedTraversal::new(open(&chain), SizeClaim::from_first_page(&chain.first));

    while traversal.next().is_some() {}
    assert_eq!(traversal.size_claim(), SizeClaim::Unknown);
    assert!(!traversal.characteristics().contains(Characteristics::SIZED));
}

#[test]
fn test_traversal_never_splits_or_runs_parallel() {
    let chain = PageChain::builder(&[&["1", "2"], &["3"]])
        .first_meta(PageMeta::new(3, 2))
        .build();
    let mut traversal =
        SizedTraversal::new(open(&chain), SizeClaim::from_first_page(&chain.first));

    assert!(traversal.try_split().is_none());
    assert!(!traversal.is_parallel());

    let elements: Vec<String> = traversal.map(Result::unwrap).collect();
    assert_eq!(elements, ids(&["1", "2", "3"]));
}

#[test]
fn test_traversal_into_cursor() {
    let chain = PageChain::new(&[&["1"], &["2"]]);
    let mut traversal =
        SizedTraversal::new(open(&chain), SizeClaim::from_first_page(&chain.first));
    traversal.next();

    let cursor = traversal.into_cursor();
    assert_eq!(cursor.position(), 1);
    assert_eq!(drain(cursor), ids(&["2"]));
}
