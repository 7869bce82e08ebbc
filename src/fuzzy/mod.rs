// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Typo tolerance via edit distance.
//!
//! Two measures: whole-term distance for expanding a query term against the
//! index vocabulary, and best-substring distance for scoring a pattern
//! anywhere inside a longer field.

mod levenshtein;

pub use levenshtein::*;
