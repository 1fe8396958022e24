//! KMP scenarios: table shapes, match offsets, not-found convention.

use super::common::{naive_find_all, PANGRAM};
use std::cell::Cell;
use heapmatch::kmp::{backtrack_table, build_table, find, find_all, search};
use heapmatch::validate_backtrack_table;

#[test]
fn test_backtrack_case() {
    let mut table = [None; 3];
    build_table(b"123", &mut table);
    assert_eq!(search(b"123", &table, b"12123121212"), 2);
}

#[test]
fn test_length_two_needle() {
    let mut table = [None; 2];
    build_table(b"12", &mut table);
    assert_eq!(table, [None, Some(0)]);
    assert_eq!(search(b"12", &table, b"11111111121111"), 8);
}

#[test]
fn test_not_found_returns_haystack_len() {
    let table = backtrack_table(b"???");
    assert_eq!(search(b"???", &table, b"this is a test"), 14);
}

#[test]
fn test_empty_needle_matches_at_zero() {
    assert_eq!(search(b"", &[], b"this is a test"), 0);
    assert_eq!(search(b"", &[], b""), 0);
    assert_eq!(find(b"", b"abc"), Some(0));
}

#[test]
fn test_empty_haystack() {
    let table = backtrack_table(b"abc");
    assert_eq!(search(b"abc", &table, b""), 0);
    assert_eq!(find(b"abc", b""), None);
}

#[test]
fn test_match_at_start_and_end() {
    assert_eq!(find(b"the", PANGRAM), Some(0));
    assert_eq!(find(b"dog", PANGRAM), Some(PANGRAM.len() - 3));
    assert_eq!(find(PANGRAM, PANGRAM), Some(0));
}

#[test]
fn test_first_of_several_matches() {
    assert_eq!(find(b"the", &PANGRAM[1..]), Some(30));
    assert_eq!(find_all(b"the", PANGRAM), vec![0, 31]);
}

#[test]
fn test_periodic_needle_backtracking() {
    // Partial matches of "aab" force repeated backtracking.
    assert_eq!(find(b"aab", b"aaaaaab"), Some(4));
    assert_eq!(find(b"abab", b"abaabababab"), Some(3));
    assert_eq!(find_all(b"abab", b"abaabababab"), vec![3, 5, 7]);
}

#[test]
fn test_tables_match_reference() {
    for needle in [
        &b"a"[..],
        b"ab",
        b"aaaa",
        b"abcabd",
        b"aabaabaaa",
        b"participate in parachute",
    ] {
        let table = backtrack_table(needle);
        assert!(
            validate_backtrack_table(needle, &table).is_ok(),
            "bad table for {:?}",
            std::str::from_utf8(needle)
        );
    }
}

#[test]
fn test_utf8_text_as_bytes() {
    let haystack = "naïve café résumé";
    let offset = find("café".as_bytes(), haystack.as_bytes()).unwrap();
    assert_eq!(&haystack[offset..offset + "café".len()], "café");
}

// ============================================================================
// COMPARISON COST
// ============================================================================

thread_local! {
    static EQ_CALLS: Cell<usize> = const { Cell::new(0) };
}

/// A byte that counts how often it is compared.
#[derive(Debug, Clone, Copy)]
struct Counted(u8);

impl PartialEq for Counted {
    fn eq(&self, other: &Self) -> bool {
        EQ_CALLS.with(|c| c.set(c.get() + 1));
        self.0 == other.0
    }
}

fn counted(bytes: &[u8]) -> Vec<Counted> {
    bytes.iter().copied().map(Counted).collect()
}

/// Run `f` and return its result with the number of element comparisons.
fn count_eq<R>(f: impl FnOnce() -> R) -> (R, usize) {
    EQ_CALLS.with(|c| c.set(0));
    let result = f();
    (result, EQ_CALLS.with(Cell::get))
}

/// Table build is at most 2k, the border step at most k, the scan at most 2n.
fn linear_budget(needle_len: usize, haystack_len: usize) -> usize {
    2 * haystack_len + 3 * needle_len
}

#[test]
fn test_find_all_is_linear_on_periodic_input() {
    let needle = counted(&[b'a'; 256]);
    let haystack = counted(&[b'a'; 4096]);

    let (matches, cmps) = count_eq(|| find_all(&needle, &haystack));
    assert_eq!(matches.len(), 4096 - 256 + 1);
    assert_eq!(matches.last(), Some(&(4096 - 256)));

    let budget = linear_budget(needle.len(), haystack.len());
    assert!(
        cmps <= budget,
        "find_all made {} comparisons, linear budget is {}",
        cmps,
        budget
    );
}

#[test]
fn test_find_all_is_linear_with_partial_overlaps() {
    let raw_needle: Vec<u8> = b"ab".iter().copied().cycle().take(64).collect();
    let mut raw_haystack: Vec<u8> = b"ab".iter().copied().cycle().take(3000).collect();
    // Break the period now and then so the scanner has to fall back.
    for i in (100..raw_haystack.len()).step_by(317) {
        raw_haystack[i] = b'a';
    }

    let needle = counted(&raw_needle);
    let haystack = counted(&raw_haystack);
    let (matches, cmps) = count_eq(|| find_all(&needle, &haystack));

    assert_eq!(matches, naive_find_all(&raw_needle, &raw_haystack));
    let budget = linear_budget(needle.len(), haystack.len());
    assert!(
        cmps <= budget,
        "find_all made {} comparisons, linear budget is {}",
        cmps,
        budget
    );
}
