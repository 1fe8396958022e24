//! Test utilities shared across unit, property and fuzz tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides the canonical reference oracles so tests don't each grow
//! their own slightly different copy.

#![doc(hidden)]

use crate::heap::{BinaryHeap, Comparator};

/// First occurrence of `needle` by checking every window. O(n·k).
///
/// Follows the same conventions as [`crate::kmp::search`]: an empty needle
/// matches at 0, no match returns `haystack.len()`.
pub fn naive_search<T: PartialEq>(needle: &[T], haystack: &[T]) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
        .unwrap_or(haystack.len())
}

/// Every occurrence of `needle`, overlapping ones included. O(n·k).
pub fn naive_find_all<T: PartialEq>(needle: &[T], haystack: &[T]) -> Vec<usize> {
    if needle.is_empty() {
        return vec![0];
    }
    haystack
        .windows(needle.len())
        .enumerate()
        .filter(|(_, window)| *window == needle)
        .map(|(offset, _)| offset)
        .collect()
}

/// Pop everything off a heap, in extraction order.
pub fn drain_heap<T, C: Comparator<T>, A: crate::alloc::Allocator>(
    heap: &mut BinaryHeap<T, C, A>,
) -> Vec<T> {
    let mut out = Vec::with_capacity(heap.len());
    while let Ok(min) = heap.pop() {
        out.push(min);
    }
    out
}

/// Build a natural-order heap from a slice.
pub fn heap_from<T: Ord + Clone>(items: &[T]) -> BinaryHeap<T> {
    let mut heap = BinaryHeap::with_capacity(items.len()).expect("test heap allocation");
    for item in items {
        heap.push(item.clone()).expect("test heap push");
    }
    heap
}
