// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Allocation strategies for [`GrowableBuffer`](crate::GrowableBuffer).
//!
//! The buffer never talks to the system allocator directly. Every initial
//! allocation and every growth step goes through an [`Allocator`], and so
//! does the final release. A strategy may refuse a request; the buffer then
//! reports [`AllocError`] and keeps its previous contents and capacity.
//!
//! | Strategy  | Behavior                                              |
//! |-----------|-------------------------------------------------------|
//! | `Global`  | Fallible reservation on the process heap              |
//! | `Bounded` | `Global` with a hard byte budget (tests, sandboxes)   |
//!
//! Any `&mut A` is itself an allocator. Lending one keeps the strategy with
//! the caller, who can inspect it once the buffer is gone.

use crate::error::AllocError;
use std::mem;

/// Injected allocation strategy.
///
/// Implementations must leave `buf` untouched when they return `Err`.
pub trait Allocator {
    /// Make room for at least `capacity` elements in `buf`.
    fn grow<T>(&mut self, buf: &mut Vec<T>, capacity: usize) -> Result<(), AllocError>;

    /// Give the storage back. Elements still in `buf` are dropped.
    fn release<T>(&mut self, buf: Vec<T>) {
        drop(buf);
    }
}

impl<A: Allocator> Allocator for &mut A {
    #[inline]
    fn grow<T>(&mut self, buf: &mut Vec<T>, capacity: usize) -> Result<(), AllocError> {
        (**self).grow(buf, capacity)
    }

    #[inline]
    fn release<T>(&mut self, buf: Vec<T>) {
        (**self).release(buf);
    }
}

/// Byte size of `capacity` elements of `T`, saturating on overflow.
fn byte_size<T>(capacity: usize) -> usize {
    capacity.saturating_mul(mem::size_of::<T>())
}

/// The process-wide heap, reserved fallibly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Global;

impl Allocator for Global {
    fn grow<T>(&mut self, buf: &mut Vec<T>, capacity: usize) -> Result<(), AllocError> {
        if capacity <= buf.capacity() {
            return Ok(());
        }
        buf.try_reserve_exact(capacity - buf.len())
            .map_err(|_| AllocError::new(byte_size::<T>(capacity)))
    }
}

/// Global allocation with a fixed byte budget.
///
/// Requests that would take the buffer past `limit_bytes` are refused. The
/// budget covers a single buffer: `in_use_bytes` tracks the capacity it
/// currently holds and drops back to zero on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounded {
    limit_bytes: usize,
    in_use_bytes: usize,
}

impl Bounded {
    pub fn new(limit_bytes: usize) -> Self {
        Self {
            limit_bytes,
            in_use_bytes: 0,
        }
    }

    /// Budget for a buffer of `capacity` elements of `T`.
    pub fn for_elements<T>(capacity: usize) -> Self {
        Self::new(byte_size::<T>(capacity))
    }

    pub fn limit_bytes(&self) -> usize {
        self.limit_bytes
    }

    pub fn in_use_bytes(&self) -> usize {
        self.in_use_bytes
    }
}

impl Allocator for Bounded {
    fn grow<T>(&mut self, buf: &mut Vec<T>, capacity: usize) -> Result<(), AllocError> {
        let requested = capacity
            .checked_mul(mem::size_of::<T>())
            .ok_or(AllocError::new(usize::MAX))?;
        if requested > self.limit_bytes {
            return Err(AllocError::new(requested));
        }
        Global.grow(buf, capacity)?;
        self.in_use_bytes = byte_size::<T>(buf.capacity()).min(self.limit_bytes);
        Ok(())
    }

    fn release<T>(&mut self, buf: Vec<T>) {
        self.in_use_bytes = 0;
        drop(buf);
    }
}
