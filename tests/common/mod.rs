//! Shared test utilities and fixtures.

#![allow(dead_code)]

use heapmatch::{validate_heap_order, BinaryHeap, Comparator};

// Re-export canonical oracles from heapmatch::testing
pub use heapmatch::testing::{drain_heap, heap_from, naive_find_all, naive_search};

/// Haystack used by several search tests.
pub const PANGRAM: &[u8] = b"the quick brown fox jumps over the lazy dog";

/// Assert the heap property holds and the root is the minimum.
pub fn assert_heap_well_formed<T, C, A>(heap: &BinaryHeap<T, C, A>)
where
    C: Comparator<T>,
    A: heapmatch::Allocator,
{
    if let Err(e) = validate_heap_order(heap.as_slice(), heap.comparator()) {
        panic!("heap invariant broken: {}", e);
    }
    if let Ok(top) = heap.peek() {
        for item in heap.iter() {
            assert_ne!(
                heap.comparator().compare(item, top),
                std::cmp::Ordering::Less,
                "an element orders before the root"
            );
        }
    }
}

/// Assert a sequence is non-decreasing under `cmp`.
pub fn assert_sorted_by<T, C: Comparator<T>>(items: &[T], cmp: &C) {
    for i in 1..items.len() {
        assert_ne!(
            cmp.compare(&items[i], &items[i - 1]),
            std::cmp::Ordering::Less,
            "extraction order decreased at position {}",
            i
        );
    }
}
