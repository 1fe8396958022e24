// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the heap and its backing storage.
//!
//! Running out of memory is the only thing that can go wrong at runtime. It
//! is always reported, never fatal, and the structure that failed to grow is
//! left exactly as it was. Asking an empty heap for its minimum surfaces as
//! [`EmptyHeap`].

use std::fmt;

/// The allocator could not satisfy a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocError {
    requested_bytes: usize,
}

impl AllocError {
    pub fn new(requested_bytes: usize) -> Self {
        Self { requested_bytes }
    }

    /// Size of the buffer that was asked for, in bytes.
    ///
    /// Saturates at `usize::MAX` when the request itself overflowed.
    pub fn requested_bytes(&self) -> usize {
        self.requested_bytes
    }
}

impl fmt::Display for AllocError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "allocation of {} bytes failed", self.requested_bytes)
    }
}

impl std::error::Error for AllocError {}

/// A push that could not grow the buffer.
///
/// Carries the rejected element back to the caller so nothing is lost.
#[derive(Clone, PartialEq, Eq)]
pub struct PushError<T> {
    pub element: T,
    pub error: AllocError,
}

impl<T> PushError<T> {
    /// Take back the element that was not inserted.
    pub fn into_inner(self) -> T {
        self.element
    }
}

// Manual impl so `T` does not need to be `Debug`.
impl<T> fmt::Debug for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PushError")
            .field("error", &self.error)
            .finish_non_exhaustive()
    }
}

impl<T> fmt::Display for PushError<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "push rejected: {}", self.error)
    }
}

impl<T> std::error::Error for PushError<T> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

impl<T> From<PushError<T>> for AllocError {
    fn from(err: PushError<T>) -> Self {
        err.error
    }
}

/// `peek` or `pop` was called on a heap with no elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmptyHeap;

impl fmt::Display for EmptyHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("heap is empty")
    }
}

impl std::error::Error for EmptyHeap {}
