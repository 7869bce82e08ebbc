// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Interchangeable search engines behind one trait.
//!
//! The page's selector names the engine per query, so nothing here is
//! cached: each call builds whatever it needs from the document index it is
//! handed and returns hits already normalized to `(position, score)`. The
//! renderer never has to know which engine produced a hit.
//!
//! | Selector value | Engine                  | Score direction | Display   |
//! |----------------|-------------------------|-----------------|-----------|
//! | `lunr`         | [`InvertedIndexBackend`] | higher = better | 3 decimals |
//! | `fuse`         | [`FuzzyDistanceBackend`] | lower = better  | native    |

mod fuzzy;
mod inverted;

pub use fuzzy::FuzzyDistanceBackend;
pub use inverted::InvertedIndexBackend;

use std::fmt;
use std::str::FromStr;

use crate::error::SearchError;
use crate::index::DocumentIndex;
use crate::types::{RawHit, SearchHit};

/// A full-text engine over a document index.
pub trait SearchBackend {
    fn kind(&self) -> BackendKind;

    /// Run `query` as-is against `index`, best hits first.
    fn search(&self, index: &DocumentIndex, query: &str) -> Vec<RawHit>;
}

/// Which engine the selector control picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendKind {
    InvertedIndex,
    FuzzyDistance,
}

impl BackendKind {
    pub const ALL: [BackendKind; 2] = [BackendKind::InvertedIndex, BackendKind::FuzzyDistance];

    /// Value the page's selector uses for this engine.
    pub fn id(self) -> &'static str {
        match self {
            Self::InvertedIndex => "lunr",
            Self::FuzzyDistance => "fuse",
        }
    }

    /// Instantiate the engine.
    pub fn backend(self) -> Box<dyn SearchBackend> {
        match self {
            Self::InvertedIndex => Box::new(InvertedIndexBackend::default()),
            Self::FuzzyDistance => Box::new(FuzzyDistanceBackend::default()),
        }
    }
}

impl fmt::Display for BackendKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for BackendKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "lunr" | "inverted" => Ok(Self::InvertedIndex),
            "fuse" | "fuzzy" => Ok(Self::FuzzyDistance),
            other => Err(SearchError::UnknownBackend(other.to_string())),
        }
    }
}

/// Attach documents to raw hits, dropping positions outside the index.
pub fn resolve<'a>(index: &'a DocumentIndex, hits: &[RawHit]) -> Vec<SearchHit<'a>> {
    hits.iter()
        .filter_map(|hit| {
            index.get(hit.doc).map(|document| SearchHit {
                document,
                score: hit.score,
            })
        })
        .collect()
}
