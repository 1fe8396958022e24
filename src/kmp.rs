// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Knuth-Morris-Pratt substring search.
//!
//! Two phases, two free functions. [`build_table`] computes the backtrack
//! table for a needle into memory the caller owns; [`search`] scans a
//! haystack with that table. Neither allocates, so one table can be built
//! once and reused across any number of haystacks.
//!
//! # Backtrack table
//!
//! `table[i]` tells the scanner where to resume in the needle after a
//! mismatch at needle position `i`: the length of the longest proper prefix
//! of `needle[..i]` that is also a suffix of it. Position 0 has nothing to
//! fall back to and holds `None`, which restarts the needle one position
//! further along the haystack.
//!
//! ```text
//! needle:  a  b  a  b  c
//! table:   -  0  0  1  2
//! ```
//!
//! # Complexity
//!
//! - `build_table`: O(k) time, O(1) extra space
//! - `search`: O(n + k) time, O(1) extra space
//!
//! where `k` is the needle length and `n` the haystack length.
//!
//! # Example
//!
//! ```
//! use heapmatch::kmp::{build_table, search};
//!
//! let needle = b"123";
//! let mut table = [None; 3];
//! build_table(needle, &mut table);
//! assert_eq!(search(needle, &table, b"12123121212"), 2);
//! assert_eq!(search(needle, &table, b"999"), 3); // not found: haystack length
//! ```

use crate::verify::contracts;

/// One backtrack table entry. `None` means "restart the needle".
pub type Backtrack = Option<usize>;

/// Compute the backtrack table for `needle` into `table`.
///
/// `needle` must be non-empty and `table` exactly as long as `needle`.
/// Both are checked in debug builds only.
pub fn build_table<T: PartialEq>(needle: &[T], table: &mut [Backtrack]) {
    contracts::check_table_len(needle.len(), table.len());

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
            contracts::check_fallback(table[cnd], cnd);
            cnd = table[cnd].unwrap_or(0);
        } else {
            table[pos] = Some(0);
            pos += 1;
        }
    }
}

/// Find the first occurrence of `needle` in `haystack` using a prebuilt table.
///
/// Returns the match offset, or `haystack.len()` if there is none. An empty
/// needle matches at offset 0 without reading `table`.
pub fn search<T: PartialEq>(needle: &[T], table: &[Backtrack], haystack: &[T]) -> usize {
    if needle.is_empty() {
        return 0;
    }
    contracts::check_table_len(needle.len(), table.len());

    let last = needle.len() - 1;
    let mut start = 0;
    let mut cur = 0;

    while start + cur < haystack.len() {
        if needle[cur] == haystack[start + cur] {
            if cur == last {
                contracts::check_match_at(needle, haystack, start);
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

/// Allocate and fill a backtrack table for `needle`.
pub fn backtrack_table<T: PartialEq>(needle: &[T]) -> Vec<Backtrack> {
    let mut table = vec![None; needle.len()];
    build_table(needle, &mut table);
    table
}

/// First match offset, or `None`. An empty needle matches at 0.
///
/// Allocates the table internally; use [`build_table`] and [`search`] to
/// reuse one across haystacks.
pub fn find<T: PartialEq>(needle: &[T], haystack: &[T]) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }
    let table = backtrack_table(needle);
    let offset = search(needle, &table, haystack);
    (offset < haystack.len()).then_some(offset)
}

/// Length of the longest proper border of the whole needle.
///
/// Extends `table[last]` by one more step of the prefix function, which is
/// where the scanner resumes after a full match.
fn full_border<T: PartialEq>(needle: &[T], table: &[Backtrack]) -> usize {
    let last = needle.len() - 1;
    let mut cnd = match table[last] {
        Some(k) => k,
        None => return 0,
    };
    loop {
        if needle[last] == needle[cnd] {
            return cnd + 1;
        }
        if cnd == 0 {
            return 0;
        }
        contracts::check_fallback(table[cnd], cnd);
        cnd = table[cnd].unwrap_or(0);
    }
}

/// Every match offset, overlapping matches included, in increasing order.
///
/// One pass over the haystack: after a full match the scanner keeps the
/// longest border of the needle instead of starting over, so the whole scan
/// stays O(n + k). An empty needle yields `[0]`.
pub fn find_all<T: PartialEq>(needle: &[T], haystack: &[T]) -> Vec<usize> {
    if needle.is_empty() {
        return vec![0];
    }
    let table = backtrack_table(needle);
    let border = full_border(needle, &table);
    let last = needle.len() - 1;

    let mut matches = Vec::new();
    let mut start = 0;
    let mut cur = 0;

    while start + cur < haystack.len() {
        if needle[cur] == haystack[start + cur] {
            if cur == last {
                matches.push(start);
                start += needle.len() - border;
                cur = border;
            } else {
                cur += 1;
            }
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

    matches
}
