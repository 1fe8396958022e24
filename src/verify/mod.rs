// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: invariant validators and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Validators** (`validate_heap_order`, `validate_backtrack_table`) that
//!    check a structure from scratch and report the first violation as an
//!    [`InvariantError`]. Tests, fuzz targets and callers holding untrusted
//!    tables use these.
//!
//! 2. **Runtime contracts** that panic in debug builds when an invariant or
//!    precondition is broken. Zero-cost in release, but catch bugs during
//!    development.

mod types;
pub mod contracts;

pub use types::*;
