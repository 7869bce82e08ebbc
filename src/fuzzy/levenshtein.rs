// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Edit distance with early exits.
//!
//! `|len(a) - len(b)|` is a lower bound on edit distance, so term expansion
//! skips the O(nm) table for most of the vocabulary. Both functions count
//! characters, not bytes. Only term expansion treats an adjacent swap as a
//! single edit; the substring distance does not.

/// Are these terms within `max` edits of each other?
///
/// Insertions, deletions, substitutions and swaps of two adjacent characters
/// each cost one edit (optimal string alignment). A length difference above
/// `max` rejects before any table is built.
pub fn edits_within(a: &str, b: &str, max: usize) -> bool {
    let a_len = a.chars().count();
    let b_len = b.chars().count();

    if a_len.abs_diff(b_len) > max {
        return false;
    }

    strsim::osa_distance(a, b) <= max
}

/// Fewest edits turning `pattern` into some substring of `text`.
///
/// Sellers' variant of the Levenshtein table: the first row is all zeros so
/// a match may start anywhere, and the answer is the minimum of the last
/// row so it may end anywhere. An empty pattern matches with zero edits.
pub fn substring_distance(pattern: &[char], text: &[char]) -> usize {
    if pattern.is_empty() {
        return 0;
    }
    if text.is_empty() {
        return pattern.len();
    }

    // Column-major over the pattern so each text position is one pass.
    let mut col: Vec<usize> = (0..=pattern.len()).collect();
    let mut best = col[pattern.len()];

    for &tc in text {
        let mut diag = col[0];
        col[0] = 0;
        for (i, &pc) in pattern.iter().enumerate() {
            let up = col[i + 1];
            let cost = usize::from(pc != tc);
            col[i + 1] = (up + 1).min(col[i] + 1).min(diag + cost);
            diag = up;
        }
        best = best.min(col[pattern.len()]);
        if best == 0 {
            break;
        }
    }

    best
}
