//! Allocation-aware binary heap and Knuth-Morris-Pratt substring search.
//!
//! Two independent building blocks with no shared state:
//!
//! - [`BinaryHeap`]: a min-heap (priority queue) generic over element type and
//!   [`Comparator`], stored in a [`GrowableBuffer`] whose memory comes from an
//!   injected [`Allocator`]. Growth failure is reported, never fatal, and
//!   leaves the heap untouched.
//! - [`kmp`]: table construction and scanning as two free functions over
//!   caller-owned memory, so one table serves any number of haystacks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  alloc.rs   │────▶│  buffer.rs   │────▶│   heap.rs    │
//! │ (Allocator, │     │(GrowableBuf- │     │ (BinaryHeap, │
//! │  Global,    │     │  fer, push,  │     │  sift_up,    │
//! │  Bounded)   │     │  grow)       │     │  sift_down)  │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                                                 │
//! ┌─────────────┐                                 │
//! │   kmp.rs    │                                 │
//! │(build_table,│                                 │
//! │  search)    │                                 │
//! └─────────────┘                                 │
//!        │                                        │
//!        ▼                                        ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                      verify/                        │
//! │  (validate_heap_order, validate_backtrack_table,    │
//! │   debug-build contracts)                            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use heapmatch::{kmp, BinaryHeap};
//!
//! let mut heap = BinaryHeap::with_capacity(5)?;
//! assert_eq!(heap.capacity(), 5);
//! heap.push(42)?;
//! assert_eq!(heap.pop(), Ok(42));
//!
//! assert_eq!(kmp::find(b"12", b"11111111121111"), Some(8));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Threading
//!
//! Everything here is synchronous and single-threaded. Sharing a heap
//! across threads needs external synchronization; `&mut self` on every
//! mutating method makes the compiler enforce that.

pub mod alloc;
pub mod buffer;
pub mod commands;
mod error;
pub mod heap;
pub mod kmp;
pub mod testing;
pub mod verify;

pub use alloc::{Allocator, Bounded, Global};
pub use buffer::{GrowableBuffer, DEFAULT_CAPACITY};
pub use error::{AllocError, EmptyHeap, PushError};
pub use heap::{BinaryHeap, Comparator, MaxOrder, MinOrder, NonEmpty};
pub use kmp::{backtrack_table, build_table, find, find_all, search, Backtrack};
pub use verify::{validate_backtrack_table, validate_heap_order, InvariantError};
