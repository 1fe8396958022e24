//! Differential tests against the brute-force oracles in `heapmatch::testing`.
//!
//! The oracles are slow but obviously correct. Any disagreement is a bug in
//! the optimized implementation.

use super::common::{naive_find_all, naive_search};
use heapmatch::kmp::{backtrack_table, find_all, search};
use heapmatch::BinaryHeap;
use proptest::prelude::*;

fn bytes(alphabet: Vec<u8>, max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(alphabet), 0..max_len)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    /// KMP and the window scan agree on the first match.
    #[test]
    fn prop_search_matches_oracle(
        needle in bytes(vec![b'x', b'y'], 6),
        haystack in bytes(vec![b'x', b'y'], 60),
    ) {
        let expected = naive_search(&needle, &haystack);
        let actual = if needle.is_empty() {
            search(&needle, &[], &haystack)
        } else {
            search(&needle, &backtrack_table(&needle), &haystack)
        };
        prop_assert_eq!(actual, expected);
    }

    /// find_all and the window scan agree on every match.
    #[test]
    fn prop_find_all_matches_oracle(
        needle in bytes(vec![b'0', b'1'], 5),
        haystack in bytes(vec![b'0', b'1'], 60),
    ) {
        prop_assert_eq!(find_all(&needle, &haystack), naive_find_all(&needle, &haystack));
    }

    /// Heap extraction and a stable sort agree on the multiset order.
    #[test]
    fn prop_heap_matches_sort(values in prop::collection::vec(-50i16..50, 0..150)) {
        let mut heap = BinaryHeap::with_capacity(0).unwrap();
        for &v in &values {
            heap.push(v).unwrap();
        }
        let mut sorted = values;
        sorted.sort();
        prop_assert_eq!(heap.into_sorted_vec(), sorted);
    }
}
