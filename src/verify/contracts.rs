// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the heap and the substring search.
//!
//! Debug-mode assertions that verify the invariants the algorithms rely on.
//! These contracts:
//!
//! 1. Are **zero-cost in release builds** (use `debug_assert!`)
//! 2. Provide **early failure detection** during development
//! 3. Turn caller precondition mistakes into a clear panic message
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function      | Checked at                     |
//! |------------------------|--------------------------------|
//! | `check_heap_property`  | after every push / pop         |
//! | `check_table_len`      | entry of `build_table`/`search`|
//! | `check_fallback`       | every backtrack step in a table|
//! | `check_match_at`       | before `search` returns a match|

use std::cmp::Ordering;

use crate::heap::Comparator;

// ============================================================================
// HEAP CONTRACTS
// ============================================================================

/// Check that every child orders at or after its parent.
///
/// # Panics (debug builds only)
/// Panics on the first slot that orders strictly before its parent.
#[inline]
pub fn check_heap_property<T, C: Comparator<T>>(items: &[T], cmp: &C) {
    if !cfg!(debug_assertions) {
        return;
    }
    for i in 1..items.len() {
        let parent = (i - 1) / 2;
        debug_assert!(
            cmp.compare(&items[i], &items[parent]) != Ordering::Less,
            "Contract violation: heap order - slot {} orders before parent {}",
            i,
            parent
        );
    }
}

// ============================================================================
// SEARCH CONTRACTS
// ============================================================================

/// Check the needle is non-empty and the table was sized for it.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_table_len(needle_len: usize, table_len: usize) {
    debug_assert!(
        needle_len > 0,
        "Contract violation: backtrack table requested for an empty needle"
    );
    debug_assert_eq!(
        needle_len, table_len,
        "Contract violation: table.len() {} != needle.len() {}",
        table_len, needle_len
    );
}

/// Check that a table entry the scanner is about to follow is filled in.
///
/// Only slot 0 restarts the needle; every later slot holds a fallback.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_fallback(entry: Option<usize>, index: usize) {
    debug_assert!(
        entry.is_some_and(|k| k < index),
        "Contract violation: table[{}] is {:?}, expected a fallback below {}",
        index,
        entry,
        index
    );
}

/// Check that `needle` really occurs at `start` in `haystack`.
///
/// # Panics (debug builds only)
#[inline]
pub fn check_match_at<T: PartialEq>(needle: &[T], haystack: &[T], start: usize) {
    debug_assert!(
        haystack
            .get(start..start + needle.len())
            .is_some_and(|window| window == needle),
        "Contract violation: reported match at {} is not an occurrence",
        start
    );
}
