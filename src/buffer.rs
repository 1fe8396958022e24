// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Growable contiguous storage with a pluggable allocator.
//!
//! A thin layer over `Vec<T>` that routes every capacity change through an
//! [`Allocator`]. Growth doubles the capacity; nothing ever shrinks it. A
//! push that cannot grow hands its element back in [`PushError`] and leaves
//! the buffer as it was. The storage goes back through the allocator when
//! the buffer is dropped.

use std::mem;

use crate::alloc::{Allocator, Global};
use crate::error::{AllocError, PushError};

/// Capacity used when a caller asks for zero.
pub const DEFAULT_CAPACITY: usize = 16;

/// Contiguous, index-addressable storage backed by an [`Allocator`].
#[derive(Debug)]
pub struct GrowableBuffer<T, A: Allocator = Global> {
    items: Vec<T>,
    alloc: A,
}

impl<T> GrowableBuffer<T> {
    /// Allocate on the global heap. `0` means [`DEFAULT_CAPACITY`].
    pub fn with_capacity(capacity: usize) -> Result<Self, AllocError> {
        Self::with_capacity_in(capacity, Global)
    }
}

impl<T, A: Allocator> GrowableBuffer<T, A> {
    /// Allocate `capacity` slots through `alloc`. `0` means [`DEFAULT_CAPACITY`].
    pub fn with_capacity_in(capacity: usize, mut alloc: A) -> Result<Self, AllocError> {
        let capacity = if capacity == 0 {
            DEFAULT_CAPACITY
        } else {
            capacity
        };
        let mut items = Vec::new();
        alloc.grow(&mut items, capacity)?;
        Ok(Self { items, alloc })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Append one element, doubling the capacity first if full.
    pub fn push(&mut self, item: T) -> Result<(), PushError<T>> {
        if self.items.len() == self.items.capacity() {
            let target = self.items.capacity().saturating_mul(2).max(1);
            if let Err(error) = self.alloc.grow(&mut self.items, target) {
                return Err(PushError {
                    element: item,
                    error,
                });
            }
        }
        self.items.push(item);
        Ok(())
    }

    /// Remove and return the last element.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Swap two occupied slots. Panics if either index is out of bounds.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.items.swap(a, b);
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Ensure room for `additional` more elements without further growth.
    pub fn reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        let needed = self
            .items
            .len()
            .checked_add(additional)
            .ok_or(AllocError::new(usize::MAX))?;
        if needed <= self.items.capacity() {
            return Ok(());
        }
        self.alloc.grow(&mut self.items, needed)
    }

    /// Drop every element. Capacity is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn allocator(&self) -> &A {
        &self.alloc
    }

    /// Drop every element and return the storage through the allocator.
    ///
    /// Same as letting the buffer go out of scope.
    pub fn release(self) {
        drop(self);
    }
}

impl<T, A: Allocator> Drop for GrowableBuffer<T, A> {
    fn drop(&mut self) {
        let items = mem::take(&mut self.items);
        self.alloc.release(items);
    }
}
