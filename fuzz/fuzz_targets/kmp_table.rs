// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for backtrack table construction.
//!
//! Every entry must equal the brute-force longest proper border, and no entry
//! may point at or past its own index.

#![no_main]

use heapmatch::kmp::backtrack_table;
use heapmatch::verify::validate_backtrack_table;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|needle: &[u8]| {
    if needle.is_empty() || needle.len() > 256 {
        return;
    }

    let table = backtrack_table(needle);
    assert_eq!(table.len(), needle.len());
    assert_eq!(table[0], None, "first entry must restart the needle");

    for (i, entry) in table.iter().enumerate().skip(1) {
        match entry {
            Some(k) => assert!(*k < i, "entry {} points forward to {}", i, k),
            None => panic!("entry {} is None but only index 0 may restart", i),
        }
    }

    if let Err(e) = validate_backtrack_table(needle, &table) {
        panic!("{} (needle {:?})", e, needle);
    }
});
