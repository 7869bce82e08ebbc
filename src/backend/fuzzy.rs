// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzzy-distance engine: approximate substring matching across fields.
//!
//! The query is one pattern, never split into words. For each field the
//! engine finds the fewest edits that turn the pattern into some substring
//! of the field, anywhere in it (location is ignored), and divides by the
//! pattern length. Fields scoring above the threshold do not match; blank
//! fields are skipped. Comparison is case-insensitive.
//!
//! A document's score is the product of its matched fields' scores, each
//! raised to the field weight (equal weights summing to 1). Lower is better
//! and 0 would be perfect, which is why exact fields use `EPSILON` (see
//! `scoring`). Scores are returned unmodified.

use tracing::debug;

use super::{BackendKind, SearchBackend};
use crate::fuzzy::substring_distance;
use crate::index::DocumentIndex;
use crate::scoring::{combine_field_score, distance_ratio, FUZZY_THRESHOLD};
use crate::types::{RawHit, Score, SearchDocument};

/// The "fuse" engine.
pub struct FuzzyDistanceBackend {
    threshold: f64,
}

impl Default for FuzzyDistanceBackend {
    fn default() -> Self {
        Self {
            threshold: FUZZY_THRESHOLD,
        }
    }
}

impl SearchBackend for FuzzyDistanceBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::FuzzyDistance
    }

    fn search(&self, index: &DocumentIndex, query: &str) -> Vec<RawHit> {
        if query.trim().is_empty() {
            return Vec::new();
        }
        let pattern: Vec<char> = query.to_lowercase().chars().collect();

        let mut hits: Vec<RawHit> = index
            .iter()
            .enumerate()
            .filter_map(|(doc, document)| {
                self.score_document(&pattern, document).map(|value| RawHit {
                    doc,
                    score: Score::native(value),
                })
            })
            .collect();

        hits.sort_by(|a, b| {
            a.score
                .value
                .total_cmp(&b.score.value)
                .then(a.doc.cmp(&b.doc))
        });

        debug!(query, hits = hits.len(), "fuzzy-distance search");
        hits
    }
}

impl FuzzyDistanceBackend {
    /// Combined score, or `None` when no field matches.
    fn score_document(&self, pattern: &[char], doc: &SearchDocument) -> Option<f64> {
        let fields = [&doc.title, &doc.brief, &doc.content];
        let weight = 1.0 / fields.len() as f64;

        let mut total = 1.0;
        let mut matched = false;
        for text in fields {
            if text.trim().is_empty() {
                continue;
            }
            if let Some(score) = self.score_field(pattern, text) {
                total = combine_field_score(total, score, weight);
                matched = true;
            }
        }

        matched.then_some(total)
    }

    /// Distance ratio of the best match in one field, if within threshold.
    fn score_field(&self, pattern: &[char], text: &str) -> Option<f64> {
        let text: Vec<char> = text.to_lowercase().chars().collect();
        let edits = substring_distance(pattern, &text);
        let score = distance_ratio(edits, pattern.len());
        (score <= self.threshold).then_some(score)
    }
}
