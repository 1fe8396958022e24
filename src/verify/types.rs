// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Invariant validators for heaps and backtrack tables.
//!
//! | Validator                  | What's checked                                   |
//! |----------------------------|--------------------------------------------------|
//! | `validate_heap_order`      | `cmp(a[i], a[(i-1)/2]) != Less` for every `i > 0` |
//! | `validate_backtrack_table` | length matches, every entry equals the reference  |
//!
//! The reference table is computed the slow, obvious way by
//! [`reference_backtrack`]: try every prefix length and compare.

use std::cmp::Ordering;
use std::fmt;

use crate::heap::Comparator;
use crate::kmp::Backtrack;

/// Error type for invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// A child orders strictly before its parent.
    HeapOrder { index: usize, parent: usize },
    /// Table and needle lengths differ.
    TableLength { needle_len: usize, table_len: usize },
    /// A table entry differs from the longest prefix-suffix overlap.
    TableEntry {
        index: usize,
        expected: Backtrack,
        actual: Backtrack,
    },
}

impl fmt::Display for InvariantError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantError::HeapOrder { index, parent } => {
                write!(
                    f,
                    "heap order violated: slot {} orders before its parent {}",
                    index, parent
                )
            }
            InvariantError::TableLength {
                needle_len,
                table_len,
            } => {
                write!(
                    f,
                    "table.len() {} != needle.len() {}",
                    table_len, needle_len
                )
            }
            InvariantError::TableEntry {
                index,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "table[{}] is {:?}, expected {:?}",
                    index, actual, expected
                )
            }
        }
    }
}

impl std::error::Error for InvariantError {}

/// Check the heap property over a slice in heap (level) order.
pub fn validate_heap_order<T, C: Comparator<T>>(items: &[T], cmp: &C) -> Result<(), InvariantError> {
    for index in 1..items.len() {
        let parent = (index - 1) / 2;
        if cmp.compare(&items[index], &items[parent]) == Ordering::Less {
            return Err(InvariantError::HeapOrder { index, parent });
        }
    }
    Ok(())
}

/// Backtrack entry for position `i`, computed by brute force.
///
/// O(i²). Only meant as ground truth.
pub fn reference_backtrack<T: PartialEq>(needle: &[T], i: usize) -> Backtrack {
    if i == 0 {
        return None;
    }
    let prefix = &needle[..i];
    let overlap = (0..i)
        .rev()
        .find(|&k| prefix[..k] == prefix[i - k..])
        .unwrap_or(0);
    Some(overlap)
}

/// Check that `table` is the backtrack table of `needle`.
pub fn validate_backtrack_table<T: PartialEq>(
    needle: &[T],
    table: &[Backtrack],
) -> Result<(), InvariantError> {
    if needle.len() != table.len() {
        return Err(InvariantError::TableLength {
            needle_len: needle.len(),
            table_len: table.len(),
        });
    }
    for (index, &actual) in table.iter().enumerate() {
        let expected = reference_backtrack(needle, index);
        if actual != expected {
            return Err(InvariantError::TableEntry {
                index,
                expected,
                actual,
            });
        }
    }
    Ok(())
}
