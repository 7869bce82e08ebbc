// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks shared by the index, the backends, and the controllers.
//!
//! | Type             | Purpose                                            |
//! |------------------|----------------------------------------------------|
//! | `SearchDocument` | One indexable page, addressed by position          |
//! | `Score`          | Backend-native relevance plus its display rule     |
//! | `RawHit`         | What a backend returns: position and score         |
//! | `SearchHit`      | A hit resolved against the document index          |
//!
//! # Invariants
//!
//! - **RawHit**: `doc < index.len()`. Backends only emit positions they
//!   enumerated from the same index they were handed.
//! - **Score**: values from different backends are never comparable. The
//!   inverted-index backend is "higher is better", the fuzzy backend is
//!   "lower is better". Nothing in this crate converts between them.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One page of the documentation site.
///
/// `brief` is often empty; pages without a summary fall back to `content`
/// for their digest.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchDocument {
    pub title: String,
    #[serde(default)]
    pub brief: String,
    #[serde(default)]
    pub content: String,
    pub url: String,
}

impl SearchDocument {
    pub fn new(
        title: impl Into<String>,
        brief: impl Into<String>,
        content: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            brief: brief.into(),
            content: content.into(),
            url: url.into(),
        }
    }
}

/// How a score is printed next to its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorePrecision {
    /// Fixed number of decimals (`0.4` with 3 decimals prints `0.400`).
    Fixed(usize),
    /// Shortest round-trip digits, laid out the way a page script prints a
    /// number (`2.5e-16`, not `0.00000000000000025`).
    Native,
}

/// Backend-reported relevance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Score {
    pub value: f64,
    pub precision: ScorePrecision,
}

impl Score {
    pub fn fixed(value: f64, decimals: usize) -> Self {
        Self {
            value,
            precision: ScorePrecision::Fixed(decimals),
        }
    }

    pub fn native(value: f64) -> Self {
        Self {
            value,
            precision: ScorePrecision::Native,
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.precision {
            ScorePrecision::Fixed(decimals) => write!(f, "{:.*}", decimals, self.value),
            ScorePrecision::Native => {
                let mut buffer = ryu_js::Buffer::new();
                f.write_str(buffer.format(self.value))
            }
        }
    }
}

/// Unresolved backend output: a document position and its score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawHit {
    pub doc: usize,
    pub score: Score,
}

/// A backend hit with its document resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchHit<'a> {
    pub document: &'a SearchDocument,
    pub score: Score,
}
