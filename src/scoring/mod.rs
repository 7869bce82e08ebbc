// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring: how each backend turns matches into numbers.
//!
//! The two backends live on opposite scales. BM25 grows with relevance,
//! the fuzzy distance score shrinks toward zero for better matches.

mod core;

pub use core::*;
