// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Operations behind the `heapmatch` command line.
//!
//! Each command reads its input, runs the library, and returns a report
//! struct. Rendering is left to the binary so these stay testable and the
//! same report can be printed for humans or serialized as JSON.

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::Serialize;

use crate::heap::{BinaryHeap, Comparator, MaxOrder, MinOrder};
use crate::kmp::{self, Backtrack};

// ============================================================================
// INPUT
// ============================================================================

/// Read a file, or stdin when `path` is `None` or `-`.
pub fn read_input(path: Option<&Path>) -> Result<Vec<u8>> {
    match path {
        Some(p) if p != Path::new("-") => {
            fs::read(p).with_context(|| format!("Failed to read {}", p.display()))
        }
        _ => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            Ok(buf)
        }
    }
}

fn source_name(path: Option<&Path>) -> String {
    match path {
        Some(p) if p != Path::new("-") => p.display().to_string(),
        _ => "<stdin>".to_string(),
    }
}

// ============================================================================
// FIND
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindReport {
    pub needle: String,
    pub source: String,
    pub haystack_len: usize,
    pub matches: Vec<usize>,
}

/// Search `haystack` for `needle`: first match only, or every match with `all`.
pub fn find_in(needle: &str, haystack: &[u8], all: bool) -> Vec<usize> {
    let needle = needle.as_bytes();
    if all {
        return kmp::find_all(needle, haystack);
    }
    kmp::find(needle, haystack).into_iter().collect()
}

pub fn run_find(needle: &str, path: Option<&Path>, all: bool) -> Result<FindReport> {
    let haystack = read_input(path)?;
    Ok(FindReport {
        needle: needle.to_string(),
        source: source_name(path),
        haystack_len: haystack.len(),
        matches: find_in(needle, &haystack, all),
    })
}

// ============================================================================
// TABLE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableReport {
    pub needle: String,
    /// `null` marks a restart position.
    pub table: Vec<Backtrack>,
}

pub fn run_table(needle: &str) -> Result<TableReport> {
    if needle.is_empty() {
        bail!("Needle must not be empty");
    }
    Ok(TableReport {
        needle: needle.to_string(),
        table: kmp::backtrack_table(needle.as_bytes()),
    })
}

// ============================================================================
// SORT
// ============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOptions {
    /// Largest first instead of smallest first.
    pub descending: bool,
    /// Stop after this many values.
    pub limit: Option<usize>,
    /// Initial heap capacity; `0` picks the default.
    pub capacity: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SortReport {
    pub order: &'static str,
    pub count: usize,
    pub heap_capacity: usize,
    pub values: Vec<i64>,
}

/// Parse whitespace-separated integers.
pub fn parse_integers(text: &str) -> Result<Vec<i64>> {
    text.split_whitespace()
        .enumerate()
        .map(|(i, token)| {
            token
                .parse::<i64>()
                .with_context(|| format!("Invalid integer '{}' at token {}", token, i + 1))
        })
        .collect()
}

fn extract_with<C: Comparator<i64>>(
    cmp: C,
    values: &[i64],
    opts: SortOptions,
) -> Result<(Vec<i64>, usize)> {
    let mut heap = BinaryHeap::with_comparator(cmp, opts.capacity)
        .context("Failed to allocate heap")?;
    for &v in values {
        heap.push(v)?;
    }
    let capacity = heap.capacity();

    let limit = opts.limit.unwrap_or(values.len());
    let mut out = Vec::with_capacity(limit.min(values.len()));
    while out.len() < limit {
        match heap.non_empty() {
            Some(top) => out.push(top.pop()),
            None => break,
        }
    }
    Ok((out, capacity))
}

pub fn sort_values(values: &[i64], opts: SortOptions) -> Result<SortReport> {
    let (values_out, heap_capacity) = if opts.descending {
        extract_with(MaxOrder, values, opts)?
    } else {
        extract_with(MinOrder, values, opts)?
    };
    Ok(SortReport {
        order: if opts.descending { "max" } else { "min" },
        count: values.len(),
        heap_capacity,
        values: values_out,
    })
}

pub fn run_sort(path: Option<&Path>, opts: SortOptions) -> Result<SortReport> {
    let raw = read_input(path)?;
    let text = String::from_utf8(raw).context("Input is not valid UTF-8")?;
    let values = parse_integers(&text)?;
    sort_values(&values, opts)
}
