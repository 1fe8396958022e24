//! Growable buffer behavior through the public API.

use heapmatch::{Bounded, GrowableBuffer, DEFAULT_CAPACITY};

#[test]
fn test_growth_doubles_capacity() {
    let mut buf = GrowableBuffer::with_capacity(1).unwrap();
    let mut capacities = vec![buf.capacity()];
    for i in 0..8 {
        buf.push(i).unwrap();
        if *capacities.last().unwrap() != buf.capacity() {
            capacities.push(buf.capacity());
        }
    }
    assert_eq!(capacities, vec![1, 2, 4, 8]);
}

#[test]
fn test_default_capacity() {
    let buf: GrowableBuffer<String> = GrowableBuffer::with_capacity(0).unwrap();
    assert_eq!(buf.capacity(), DEFAULT_CAPACITY);
}

#[test]
fn test_bounded_budget_caps_growth() {
    let mut buf = GrowableBuffer::with_capacity_in(1, Bounded::for_elements::<u32>(4)).unwrap();
    for i in 0..4u32 {
        buf.push(i).unwrap();
    }
    assert_eq!(buf.allocator().in_use_bytes(), 16);

    let err = buf.push(4).unwrap_err();
    assert_eq!(err.into_inner(), 4);
    assert_eq!(buf.as_slice(), &[0, 1, 2, 3]);
}

#[test]
fn test_pop_returns_last() {
    let mut buf = GrowableBuffer::with_capacity(2).unwrap();
    buf.push('a').unwrap();
    buf.push('b').unwrap();
    assert_eq!(buf.pop(), Some('b'));
    assert_eq!(buf.pop(), Some('a'));
    assert_eq!(buf.pop(), None);
}
