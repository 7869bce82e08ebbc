// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokenization pipeline for the inverted index.
//!
//! Text and queries go through the same steps so that a query term lands on
//! the same token the document produced:
//!
//! 1. Split on whitespace and hyphens
//! 2. Trim non-alphanumeric characters at both ends
//! 3. Lowercase
//! 4. Drop English stop words
//! 5. Snowball English stemming
//!
//! Query words skip step 4 (see [`Tokenizer::query_term`]).

use rust_stemmers::{Algorithm, Stemmer};

/// High-frequency English words that carry no ranking signal.
pub const STOP_WORDS: &[&str] = &[
    "a", "able", "about", "across", "after", "all", "almost", "also", "am", "among", "an", "and",
    "any", "are", "as", "at", "be", "because", "been", "but", "by", "can", "cannot", "could",
    "dear", "did", "do", "does", "either", "else", "ever", "every", "for", "from", "get", "got",
    "had", "has", "have", "he", "her", "hers", "him", "his", "how", "however", "i", "if", "in",
    "into", "is", "it", "its", "just", "least", "let", "like", "likely", "may", "me", "might",
    "most", "must", "my", "neither", "no", "nor", "not", "of", "off", "often", "on", "only", "or",
    "other", "our", "own", "rather", "said", "say", "says", "she", "should", "since", "so",
    "some", "than", "that", "the", "their", "them", "then", "there", "these", "they", "this",
    "tis", "to", "too", "twas", "us", "wants", "was", "we", "were", "what", "when", "where",
    "which", "while", "who", "whom", "why", "will", "with", "would", "yet", "you", "your",
];

/// Reusable tokenizer holding its stemmer.
pub struct Tokenizer {
    stemmer: Stemmer,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::English),
        }
    }
}

impl Tokenizer {
    /// Full pipeline over free text.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        split_words(text)
            .filter_map(|word| self.term(word))
            .collect()
    }

    /// Run one already-split word through trim, lowercase, stop words, stem.
    ///
    /// Returns `None` when nothing indexable is left.
    pub fn term(&self, word: &str) -> Option<String> {
        let trimmed = word.trim_matches(|c: char| !c.is_alphanumeric());
        if trimmed.is_empty() {
            return None;
        }
        let lower = trimmed.to_lowercase();
        if is_stop_word(&lower) {
            return None;
        }
        Some(self.stemmer.stem(&lower).into_owned())
    }

    /// Trim, lowercase and stem one query word, keeping stop words.
    pub fn query_term(&self, word: &str) -> Option<String> {
        let trimmed = word.trim_matches(|c: char| !c.is_alphanumeric());
        if trimmed.is_empty() {
            return None;
        }
        Some(self.stemmer.stem(&trimmed.to_lowercase()).into_owned())
    }
}

/// Split on whitespace and hyphens, skipping empty pieces.
pub fn split_words(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| c.is_whitespace() || c == '-')
        .filter(|piece| !piece.is_empty())
}

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.binary_search(&word).is_ok()
}
