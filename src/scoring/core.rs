// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind both rankings.
//!
//! # Inverted index (BM25)
//!
//! ```text
//! idf    = ln(1 + |(N - df + 0.5) / (df + 0.5)|)
//! weight = idf * ((k1 + 1) * tf) / (k1 * (1 - b + b * len / avg_len) + tf)
//! ```
//!
//! The weight is multiplied by the field boost, then rounded to three
//! decimals.
//!
//! # Fuzzy distance
//!
//! Each matched field contributes `s^w` where `s` is the field's distance
//! ratio and `w` its normalized weight. A perfect field match (`s = 0`)
//! contributes `EPSILON^w` instead, so one exact field never zeroes the
//! product and documents stay distinguishable.

/// BM25 term frequency saturation.
pub const BM25_K1: f64 = 1.2;

/// BM25 length normalization.
pub const BM25_B: f64 = 0.75;

/// Field boosts of the inverted index.
pub const TITLE_BOOST: f64 = 10.0;
pub const BRIEF_BOOST: f64 = 2.0;
pub const CONTENT_BOOST: f64 = 1.0;

/// Decimals shown for inverted-index scores.
pub const INVERTED_SCORE_DECIMALS: usize = 3;

/// Fuzzy matches with a distance ratio above this are discarded.
pub const FUZZY_THRESHOLD: f64 = 0.6;

/// Inverse document frequency of a term found in `df` of `doc_count` documents.
pub fn idf(df: usize, doc_count: usize) -> f64 {
    let df = df as f64;
    let n = doc_count as f64;
    (1.0 + ((n - df + 0.5) / (df + 0.5)).abs()).ln()
}

/// Unboosted BM25 weight of one term in one field.
pub fn bm25_weight(idf: f64, tf: f64, field_len: f64, avg_field_len: f64) -> f64 {
    let avg = if avg_field_len > 0.0 { avg_field_len } else { 1.0 };
    let norm = BM25_K1 * (1.0 - BM25_B + BM25_B * (field_len / avg)) + tf;
    idf * ((BM25_K1 + 1.0) * tf) / norm
}

/// Apply a field boost to a BM25 weight and round to three decimals.
pub fn boosted_weight(weight: f64, boost: f64) -> f64 {
    (weight * boost * 1000.0).round() / 1000.0
}

/// Distance ratio of a best-substring match: edits per pattern character.
pub fn distance_ratio(edits: usize, pattern_len: usize) -> f64 {
    if pattern_len == 0 {
        return 1.0;
    }
    edits as f64 / pattern_len as f64
}

/// Fold one matched field into the running fuzzy product.
pub fn combine_field_score(total: f64, field_score: f64, weight: f64) -> f64 {
    let base = if field_score == 0.0 {
        f64::EPSILON
    } else {
        field_score
    };
    total * base.powf(weight)
}
