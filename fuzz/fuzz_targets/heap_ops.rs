// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for heap operation sequences.
//!
//! Replays arbitrary push/pop/peek sequences against a plain `Vec` model,
//! under a byte budget so allocation failure paths get exercised too.

#![no_main]

use arbitrary::Arbitrary;
use heapmatch::verify::validate_heap_order;
use heapmatch::{BinaryHeap, Bounded, MinOrder};
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Op {
    Push(i16),
    Pop,
    Peek,
    Clear,
}

#[derive(Debug, Arbitrary)]
struct Input {
    initial_capacity: u8,
    budget_bytes: u16,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let alloc = Bounded::new(usize::from(input.budget_bytes));
    let Ok(mut heap) =
        BinaryHeap::with_comparator_in(MinOrder, usize::from(input.initial_capacity), alloc)
    else {
        // Budget too small for the first buffer
        return;
    };
    let mut model: Vec<i16> = Vec::new();

    for op in input.ops.into_iter().take(1024) {
        match op {
            Op::Push(v) => match heap.push(v) {
                Ok(()) => model.push(v),
                Err(rejected) => {
                    // All-or-nothing: the element comes back and nothing changed
                    assert_eq!(rejected.into_inner(), v);
                    assert_eq!(heap.len(), model.len());
                }
            },
            Op::Pop => {
                model.sort_unstable();
                let expected = (!model.is_empty()).then(|| model.remove(0));
                assert_eq!(heap.pop().ok(), expected);
            }
            Op::Peek => {
                let min = model.iter().min();
                assert_eq!(heap.peek().ok(), min);
            }
            Op::Clear => {
                heap.clear();
                model.clear();
            }
        }

        assert_eq!(heap.len(), model.len());
        assert!(heap.len() <= heap.capacity());
        if let Err(e) = validate_heap_order(heap.as_slice(), heap.comparator()) {
            panic!("{}", e);
        }
    }
});
