// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary min-heap over a growable buffer.
//!
//! The heap is a complete binary tree stored level by level in a
//! [`GrowableBuffer`]: the children of slot `i` live at `2i + 1` and `2i + 2`,
//! its parent at `(i - 1) / 2`. Every node orders at or before both of its
//! children under the heap's [`Comparator`], so the minimum is always at
//! slot 0.
//!
//! ```text
//!            1                 slot:  0  1  2  3  4  5
//!          /   \               value: 1  3  2  7  4  5
//!         3     2
//!        / \   /
//!       7   4 5
//! ```
//!
//! For a max-heap, use [`MaxOrder`] or any comparator that reverses the order.
//!
//! # Example
//!
//! ```
//! use heapmatch::BinaryHeap;
//!
//! let mut heap = BinaryHeap::with_capacity(0)?;
//! for x in [3, 2, 1] {
//!     heap.push(x)?;
//! }
//! assert_eq!(heap.peek(), Ok(&1));
//! assert_eq!(heap.pop(), Ok(1));
//! assert_eq!(heap.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::cmp::Ordering;
use std::fmt;

use crate::alloc::{Allocator, Global};
use crate::buffer::GrowableBuffer;
use crate::error::{AllocError, EmptyHeap, PushError};
use crate::verify::contracts;

// ============================================================================
// COMPARATORS
// ============================================================================

/// Total order used to arrange heap elements.
///
/// Must be consistent for the whole lifetime of the heap.
pub trait Comparator<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Natural `Ord` order: smallest element on top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinOrder;

impl<T: Ord + ?Sized> Comparator<T> for MinOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Reversed `Ord` order: largest element on top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxOrder;

impl<T: Ord + ?Sized> Comparator<T> for MaxOrder {
    #[inline]
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

// ============================================================================
// HEAP
// ============================================================================

/// A binary heap ordered by `C`, storing its elements through allocator `A`.
pub struct BinaryHeap<T, C = MinOrder, A: Allocator = Global> {
    buf: GrowableBuffer<T, A>,
    cmp: C,
}

impl<T: Ord> BinaryHeap<T> {
    /// Min-heap in natural order on the global heap. `0` picks the default capacity.
    pub fn with_capacity(capacity: usize) -> Result<Self, AllocError> {
        Self::with_comparator_in(MinOrder, capacity, Global)
    }
}

impl<T, C: Comparator<T>> BinaryHeap<T, C> {
    pub fn with_comparator(cmp: C, capacity: usize) -> Result<Self, AllocError> {
        Self::with_comparator_in(cmp, capacity, Global)
    }
}

impl<T, C: Comparator<T>, A: Allocator> BinaryHeap<T, C, A> {
    /// Build an empty heap with `capacity` slots allocated through `alloc`.
    ///
    /// A capacity of `0` selects [`DEFAULT_CAPACITY`](crate::DEFAULT_CAPACITY).
    /// Fails only if `alloc` refuses the initial request.
    pub fn with_comparator_in(cmp: C, capacity: usize, alloc: A) -> Result<Self, AllocError> {
        let buf = GrowableBuffer::with_capacity_in(capacity, alloc)?;
        Ok(Self { buf, cmp })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Insert an element, growing the buffer if it is full.
    ///
    /// All-or-nothing: if growth fails the heap is unchanged and the element
    /// comes back inside the error.
    pub fn push(&mut self, element: T) -> Result<(), PushError<T>> {
        self.buf.push(element)?;
        self.sift_up(self.buf.len() - 1);
        contracts::check_heap_property(self.buf.as_slice(), &self.cmp);
        Ok(())
    }

    /// The minimum element, without removing it.
    pub fn peek(&self) -> Result<&T, EmptyHeap> {
        self.buf.get(0).ok_or(EmptyHeap)
    }

    /// Remove and return the minimum element.
    pub fn pop(&mut self) -> Result<T, EmptyHeap> {
        let last = self.buf.len().checked_sub(1).ok_or(EmptyHeap)?;
        self.buf.swap(0, last);
        let min = self.buf.pop().ok_or(EmptyHeap)?;
        self.sift_down(0);
        contracts::check_heap_property(self.buf.as_slice(), &self.cmp);
        Ok(min)
    }

    /// A handle that proves the heap holds at least one element.
    pub fn non_empty(&mut self) -> Option<NonEmpty<'_, T, C, A>> {
        if self.is_empty() {
            None
        } else {
            Some(NonEmpty { heap: self })
        }
    }

    /// Make room for `additional` more elements. All-or-nothing.
    pub fn reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        self.buf.reserve(additional)
    }

    /// Elements in heap (level) order.
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// Iterate in heap order, not sorted order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.buf.as_slice().iter()
    }

    pub fn clear(&mut self) {
        self.buf.clear();
    }

    /// Drain the heap in extraction order.
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len());
        while let Ok(min) = self.pop() {
            out.push(min);
        }
        out
    }

    /// Drop every element and return the buffer through the allocator.
    ///
    /// Dropping the heap does the same. Lend the allocator as `&mut A` to
    /// inspect it afterwards.
    pub fn release(self) {
        self.buf.release();
    }

    // ========================================================================
    // SIFTING
    // ========================================================================

    /// Move the element at `pos` up while it orders strictly before its parent.
    fn sift_up(&mut self, mut pos: usize) {
        while pos > 0 {
            let parent = (pos - 1) / 2;
            if !self.less(pos, parent) {
                break;
            }
            self.buf.swap(pos, parent);
            pos = parent;
        }
    }

    /// Move the element at `pos` down while a child orders strictly before it.
    fn sift_down(&mut self, mut pos: usize) {
        let len = self.buf.len();
        loop {
            let left = 2 * pos + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let child = if right < len && self.less(right, left) {
                right
            } else {
                left
            };
            if !self.less(child, pos) {
                break;
            }
            self.buf.swap(pos, child);
            pos = child;
        }
    }

    #[inline]
    fn less(&self, a: usize, b: usize) -> bool {
        let items = self.buf.as_slice();
        self.cmp.compare(&items[a], &items[b]) == Ordering::Less
    }
}

impl<T: fmt::Debug, C, A: Allocator> fmt::Debug for BinaryHeap<T, C, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryHeap")
            .field("len", &self.buf.len())
            .field("capacity", &self.buf.capacity())
            .field("items", &self.buf.as_slice())
            .finish()
    }
}

impl<'a, T, C: Comparator<T>, A: Allocator> IntoIterator for &'a BinaryHeap<T, C, A> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// NON-EMPTY WITNESS
// ============================================================================

/// Borrow of a heap that is known to hold at least one element.
///
/// `peek` and `pop` cannot fail here. `pop` consumes the witness because
/// the heap may be empty afterwards.
pub struct NonEmpty<'a, T, C: Comparator<T>, A: Allocator> {
    heap: &'a mut BinaryHeap<T, C, A>,
}

impl<T, C: Comparator<T>, A: Allocator> NonEmpty<'_, T, C, A> {
    pub fn peek(&self) -> &T {
        &self.heap.as_slice()[0]
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn pop(self) -> T {
        match self.heap.pop() {
            Ok(min) => min,
            Err(EmptyHeap) => unreachable!("NonEmpty witness over an empty heap"),
        }
    }
}
