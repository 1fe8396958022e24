// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for heapmatch primitives.
//!
//! This standalone crate extracts the KMP table builder, the scanner and the
//! heap sift routines, and checks them exhaustively over small symbolic
//! inputs using Kani.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: build_table, search, sift_up and sift_down never index
//!    out of bounds
//! 2. **Table bounds**: every entry after the first points strictly backwards
//! 3. **Search soundness**: a reported offset is a real match, and no earlier
//!    offset matches
//! 4. **Heap order**: push then pop on a valid heap keeps every parent at or
//!    below its children

/// Largest needle/heap the proofs unroll over.
pub const MAX_LEN: usize = 5;

// ============================================================================
// KMP (copied from src/kmp.rs, contracts removed)
// ============================================================================

pub type Backtrack = Option<usize>;

pub fn build_table(needle: &[u8], table: &mut [Backtrack]) {
    let len = needle.len();
    match len {
        0 => return,
        1 => {
            table[0] = None;
            return;
        }
        2 => {
            table[0] = None;
            table[1] = Some(0);
            return;
        }
        _ => {
            table[0] = None;
            table[1] = Some(0);
        }
    }

    let mut pos = 2;
    let mut cnd = 0;
    while pos < len {
        if needle[pos - 1] == needle[cnd] {
            cnd += 1;
            table[pos] = Some(cnd);
            pos += 1;
        } else if cnd > 0 {
            cnd = table[cnd].unwrap_or(0);
        } else {
            table[pos] = Some(0);
            pos += 1;
        }
    }
}

pub fn search(needle: &[u8], table: &[Backtrack], haystack: &[u8]) -> usize {
    if needle.is_empty() {
        return 0;
    }

    let last = needle.len() - 1;
    let mut start = 0;
    let mut cur = 0;

    while start + cur < haystack.len() {
        if needle[cur] == haystack[start + cur] {
            if cur == last {
                return start;
            }
            cur += 1;
        } else {
            match table[cur] {
                Some(fallback) => {
                    start += cur - fallback;
                    cur = fallback;
                }
                None => {
                    start += 1;
                    cur = 0;
                }
            }
        }
    }

    haystack.len()
}

fn matches_at(needle: &[u8], haystack: &[u8], at: usize) -> bool {
    haystack
        .get(at..at + needle.len())
        .is_some_and(|window| window == needle)
}

// ============================================================================
// HEAP SIFTING (copied from src/heap.rs, specialised to a min-heap of u8)
// ============================================================================

pub fn sift_up(items: &mut [u8], mut pos: usize) {
    while pos > 0 {
        let parent = (pos - 1) / 2;
        if items[pos] >= items[parent] {
            break;
        }
        items.swap(pos, parent);
        pos = parent;
    }
}

pub fn sift_down(items: &mut [u8], mut pos: usize) {
    let len = items.len();
    loop {
        let left = 2 * pos + 1;
        if left >= len {
            break;
        }
        let right = left + 1;
        let child = if right < len && items[right] < items[left] {
            right
        } else {
            left
        };
        if items[child] >= items[pos] {
            break;
        }
        items.swap(pos, child);
        pos = child;
    }
}

pub fn is_heap(items: &[u8]) -> bool {
    (1..items.len()).all(|i| items[(i - 1) / 2] <= items[i])
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    /// Symbolic byte array of symbolic length in `1..=MAX_LEN`, over a
    /// two-letter alphabet so borders actually occur.
    fn any_word() -> ([u8; MAX_LEN], usize) {
        let len: usize = kani::any_where(|&n| n >= 1 && n <= MAX_LEN);
        let mut bytes = [0u8; MAX_LEN];
        for b in bytes.iter_mut() {
            *b = kani::any_where(|&c: &u8| c < 2);
        }
        (bytes, len)
    }

    /// build_table never panics and every entry points strictly backwards.
    #[kani::proof]
    #[kani::unwind(12)]
    fn verify_build_table_bounds() {
        let (bytes, len) = any_word();
        let needle = &bytes[..len];
        let mut table = [None; MAX_LEN];
        build_table(needle, &mut table[..len]);

        kani::assert(table[0].is_none(), "first entry must restart");
        for i in 1..len {
            match table[i] {
                Some(k) => kani::assert(k < i, "entry must point strictly backwards"),
                None => kani::assert(false, "only the first entry may be None"),
            }
        }
    }

    /// Entry i is the longest proper border of needle[..i].
    #[kani::proof]
    #[kani::unwind(12)]
    fn verify_build_table_longest_border() {
        let (bytes, len) = any_word();
        let needle = &bytes[..len];
        let mut table = [None; MAX_LEN];
        build_table(needle, &mut table[..len]);

        let i: usize = kani::any_where(|&i| i >= 1 && i < len);
        if let Some(k) = table[i] {
            kani::assert(
                needle[..k] == needle[i - k..i],
                "entry must be a border of the prefix",
            );
            for longer in (k + 1)..i {
                kani::assert(
                    needle[..longer] != needle[i - longer..i],
                    "no longer proper border may exist",
                );
            }
        }
    }

    /// search never panics, and its answer is the first match offset.
    #[kani::proof]
    #[kani::unwind(12)]
    fn verify_search_first_match() {
        let (nbytes, nlen) = any_word();
        let needle = &nbytes[..nlen];
        let (hbytes, hlen) = any_word();
        let haystack = &hbytes[..hlen];

        let mut table = [None; MAX_LEN];
        build_table(needle, &mut table[..nlen]);
        let got = search(needle, &table[..nlen], haystack);

        kani::assert(got <= haystack.len(), "offset never exceeds haystack");
        if got < haystack.len() {
            kani::assert(matches_at(needle, haystack, got), "reported offset must match");
        }
        for earlier in 0..got.min(haystack.len()) {
            kani::assert(
                !matches_at(needle, haystack, earlier),
                "no earlier offset may match",
            );
        }
    }

    /// Pushing onto a valid heap and sifting up restores heap order.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_push_keeps_heap_order() {
        let len: usize = kani::any_where(|&n| n < MAX_LEN);
        let mut items = [0u8; MAX_LEN];
        for b in items.iter_mut() {
            *b = kani::any();
        }
        kani::assume(is_heap(&items[..len]));

        sift_up(&mut items[..=len], len);
        kani::assert(is_heap(&items[..=len]), "push must keep heap order");
    }

    /// Popping the root of a valid heap returns its minimum and keeps order.
    #[kani::proof]
    #[kani::unwind(8)]
    fn verify_pop_keeps_heap_order() {
        let len: usize = kani::any_where(|&n| n >= 1 && n <= MAX_LEN);
        let mut items = [0u8; MAX_LEN];
        for b in items.iter_mut() {
            *b = kani::any();
        }
        kani::assume(is_heap(&items[..len]));

        let root = items[0];
        for i in 0..len {
            kani::assert(root <= items[i], "root must be the minimum");
        }

        items.swap(0, len - 1);
        sift_down(&mut items[..len - 1], 0);
        kani::assert(is_heap(&items[..len - 1]), "pop must keep heap order");
    }
}
