// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for KMP scanning.
//!
//! Differential against the naive window scan: for any needle and haystack
//! the first match offset and the full overlapping match list must agree.

#![no_main]

use arbitrary::Arbitrary;
use heapmatch::kmp::{backtrack_table, find_all, search};
use heapmatch::testing::{naive_find_all, naive_search};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input {
    needle: Vec<u8>,
    haystack: Vec<u8>,
    /// Squash bytes into a tiny alphabet so partial matches are common
    small_alphabet: bool,
}

fuzz_target!(|input: Input| {
    let Input {
        mut needle,
        mut haystack,
        small_alphabet,
    } = input;

    if needle.is_empty() || needle.len() > 64 || haystack.len() > 4096 {
        return;
    }
    if small_alphabet {
        needle.iter_mut().for_each(|b| *b %= 3);
        haystack.iter_mut().for_each(|b| *b %= 3);
    }

    let table = backtrack_table(&needle);

    // INVARIANT 1: first match agrees with the naive scan
    let got = search(&needle, &table, &haystack);
    let expected = naive_search(&needle, &haystack);
    assert_eq!(
        got, expected,
        "search disagrees with naive scan for needle {:?}",
        needle
    );

    // INVARIANT 2: a reported match really is a match
    if got < haystack.len() {
        assert_eq!(&haystack[got..got + needle.len()], &needle[..]);
    }

    // INVARIANT 3: every overlapping match is found, in order
    assert_eq!(find_all(&needle, &haystack), naive_find_all(&needle, &haystack));
});
