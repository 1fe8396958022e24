//! Heap invariants under random operation sequences.

use super::common::{assert_heap_well_formed, assert_sorted_by, drain_heap};
use heapmatch::{validate_heap_order, BinaryHeap, Bounded, MaxOrder, MinOrder};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

#[derive(Debug, Clone)]
enum Op {
    Push(i32),
    Pop,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<i32>().prop_map(Op::Push),
        2 => Just(Op::Pop),
    ]
}

fn ops_strategy() -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(op_strategy(), 0..200)
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    /// Property: the heap property holds after every push and pop.
    #[test]
    fn prop_heap_order_after_every_op(ops in ops_strategy()) {
        let mut heap = BinaryHeap::with_capacity(0).unwrap();
        for op in ops {
            match op {
                Op::Push(x) => heap.push(x).unwrap(),
                Op::Pop => { let _ = heap.pop(); }
            }
            prop_assert!(validate_heap_order(heap.as_slice(), &MinOrder).is_ok());
        }
    }

    /// Property: N pushes then N pops yields a non-decreasing sequence.
    #[test]
    fn prop_extraction_is_sorted(values in prop::collection::vec(any::<i64>(), 0..300)) {
        let mut heap = BinaryHeap::with_capacity(0).unwrap();
        for &v in &values {
            heap.push(v).unwrap();
        }
        let drained = drain_heap(&mut heap);

        let mut expected = values.clone();
        expected.sort_unstable();
        prop_assert_eq!(drained, expected);
    }

    /// Property: max-heap extraction is non-increasing.
    #[test]
    fn prop_max_order_extraction(values in prop::collection::vec(any::<u16>(), 0..200)) {
        let mut heap = BinaryHeap::with_comparator(MaxOrder, 4).unwrap();
        for &v in &values {
            heap.push(v).unwrap();
        }
        assert_heap_well_formed(&heap);
        let drained = heap.into_sorted_vec();
        assert_sorted_by(&drained, &MaxOrder);
        prop_assert_eq!(drained.len(), values.len());
    }

    /// Property: len == pushes - successful pops; is_empty iff len == 0.
    #[test]
    fn prop_size_accounting(ops in ops_strategy()) {
        let mut heap = BinaryHeap::with_capacity(1).unwrap();
        let mut expected = 0usize;
        for op in ops {
            match op {
                Op::Push(x) => {
                    heap.push(x).unwrap();
                    expected += 1;
                }
                Op::Pop => {
                    if heap.pop().is_ok() {
                        expected -= 1;
                    }
                }
            }
            prop_assert_eq!(heap.len(), expected);
            prop_assert_eq!(heap.is_empty(), expected == 0);
        }
    }

    /// Property: capacity never decreases.
    #[test]
    fn prop_capacity_monotone(ops in ops_strategy()) {
        let mut heap = BinaryHeap::with_capacity(1).unwrap();
        let mut last = heap.capacity();
        for op in ops {
            match op {
                Op::Push(x) => heap.push(x).unwrap(),
                Op::Pop => { let _ = heap.pop(); }
            }
            prop_assert!(heap.capacity() >= last);
            last = heap.capacity();
        }
    }

    /// Property: a failed push under a byte budget changes nothing.
    #[test]
    fn prop_bounded_push_all_or_nothing(
        budget in 1usize..32,
        values in prop::collection::vec(any::<u32>(), 1..64),
    ) {
        let alloc = Bounded::for_elements::<u32>(budget);
        let mut heap = BinaryHeap::with_comparator_in(MinOrder, 1, alloc).unwrap();
        for v in values {
            let before = heap.as_slice().to_vec();
            let capacity = heap.capacity();
            match heap.push(v) {
                Ok(()) => {
                    prop_assert!(heap.len() <= budget);
                }
                Err(err) => {
                    prop_assert_eq!(err.element, v);
                    prop_assert_eq!(heap.as_slice(), before.as_slice());
                    prop_assert_eq!(heap.capacity(), capacity);
                }
            }
            prop_assert!(validate_heap_order(heap.as_slice(), &MinOrder).is_ok());
        }
    }
}
