// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted-index engine: BM25 over boosted fields with fuzzy term expansion.
//!
//! Built from scratch on every query. Three fields are indexed, `title`
//! (boost 10), `brief` (boost 2) and `content` (boost 1). Each field keeps
//! its own postings and length statistics, document frequency is counted
//! across all fields.
//!
//! # Query model
//!
//! Whitespace separates terms. Query terms are trimmed, lowercased and
//! stemmed like document text, but stop words are kept: a stop word never
//! matches exactly, yet as the last term it still expands to nearby index
//! terms. The last term is expanded to every vocabulary term within one
//! edit, an adjacent swap counting as one; earlier terms must match
//! exactly. A document matching any term is a hit.
//!
//! Per field, the query is a vector with weight 1 per expanded term, the
//! document a vector of boosted BM25 weights. The field contributes
//! `dot(query, doc) / |query|`; a document's score is the sum over fields.

use std::collections::{BTreeMap, HashMap};

use tracing::debug;

use super::{BackendKind, SearchBackend};
use crate::fuzzy::edits_within;
use crate::index::DocumentIndex;
use crate::scoring::{
    bm25_weight, boosted_weight, idf, BRIEF_BOOST, CONTENT_BOOST, INVERTED_SCORE_DECIMALS,
    TITLE_BOOST,
};
use crate::types::{RawHit, Score, SearchDocument};
use crate::util::normalize::{split_words, Tokenizer};

/// An indexed field: how to read it and how much it counts.
struct IndexedField {
    name: &'static str,
    boost: f64,
    read: fn(&SearchDocument) -> &str,
}

const FIELDS: [IndexedField; 3] = [
    IndexedField {
        name: "title",
        boost: TITLE_BOOST,
        read: title_of,
    },
    IndexedField {
        name: "brief",
        boost: BRIEF_BOOST,
        read: brief_of,
    },
    IndexedField {
        name: "content",
        boost: CONTENT_BOOST,
        read: content_of,
    },
];

fn title_of(doc: &SearchDocument) -> &str {
    &doc.title
}

fn brief_of(doc: &SearchDocument) -> &str {
    &doc.brief
}

fn content_of(doc: &SearchDocument) -> &str {
    &doc.content
}

/// The "lunr" engine.
pub struct InvertedIndexBackend {
    tokenizer: Tokenizer,
    /// Edit distance allowed for the last query term.
    edit_distance: usize,
}

impl Default for InvertedIndexBackend {
    fn default() -> Self {
        Self {
            tokenizer: Tokenizer::default(),
            edit_distance: 1,
        }
    }
}

impl SearchBackend for InvertedIndexBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::InvertedIndex
    }

    fn search(&self, index: &DocumentIndex, query: &str) -> Vec<RawHit> {
        let built = BuiltIndex::build(index, &self.tokenizer);
        let terms = self.expand_query(&built, query);
        if terms.is_empty() {
            return Vec::new();
        }
        built.score(&terms)
    }
}

impl InvertedIndexBackend {
    /// Resolve query text to weighted vocabulary terms.
    fn expand_query<'i>(&self, built: &'i BuiltIndex, query: &str) -> HashMap<&'i str, f64> {
        let words: Vec<&str> = split_words(query).collect();
        let mut weights: HashMap<&'i str, f64> = HashMap::new();

        for (i, word) in words.iter().enumerate() {
            let Some(term) = self.tokenizer.query_term(word) else {
                continue;
            };
            let is_last = i + 1 == words.len();

            if is_last && self.edit_distance > 0 {
                for vocab_term in built.vocabulary.keys() {
                    if edits_within(&term, vocab_term, self.edit_distance) {
                        *weights.entry(vocab_term.as_str()).or_insert(0.0) += 1.0;
                    }
                }
            } else if let Some((vocab_term, _)) = built.vocabulary.get_key_value(&term) {
                *weights.entry(vocab_term.as_str()).or_insert(0.0) += 1.0;
            }
        }

        debug!(query, expanded = weights.len(), "expanded inverted-index query");
        weights
    }
}

/// Postings and length statistics of one field.
struct FieldIndex {
    boost: f64,
    /// term → (doc position, term frequency)
    postings: HashMap<String, Vec<(usize, u32)>>,
    lengths: Vec<usize>,
    avg_length: f64,
}

/// Per-query index over all fields.
struct BuiltIndex {
    doc_count: usize,
    fields: Vec<FieldIndex>,
    /// term → number of documents containing it in any field
    vocabulary: BTreeMap<String, usize>,
}

impl BuiltIndex {
    fn build(index: &DocumentIndex, tokenizer: &Tokenizer) -> Self {
        let doc_count = index.len();
        let mut fields = Vec::with_capacity(FIELDS.len());
        let mut doc_terms: Vec<Vec<String>> = vec![Vec::new(); doc_count];

        for field in &FIELDS {
            let mut postings: HashMap<String, Vec<(usize, u32)>> = HashMap::new();
            let mut lengths = Vec::with_capacity(doc_count);

            for (position, doc) in index.iter().enumerate() {
                let tokens = tokenizer.tokenize((field.read)(doc));
                lengths.push(tokens.len());

                let mut counts: HashMap<String, u32> = HashMap::new();
                for token in tokens {
                    *counts.entry(token).or_insert(0) += 1;
                }
                for (term, tf) in counts {
                    doc_terms[position].push(term.clone());
                    postings.entry(term).or_default().push((position, tf));
                }
            }

            let total: usize = lengths.iter().sum();
            let avg_length = if doc_count > 0 {
                total as f64 / doc_count as f64
            } else {
                0.0
            };

            debug!(field = field.name, terms = postings.len(), avg_length, "indexed field");
            fields.push(FieldIndex {
                boost: field.boost,
                postings,
                lengths,
                avg_length,
            });
        }

        let mut vocabulary: BTreeMap<String, usize> = BTreeMap::new();
        for mut terms in doc_terms {
            terms.sort_unstable();
            terms.dedup();
            for term in terms {
                *vocabulary.entry(term).or_insert(0) += 1;
            }
        }

        Self {
            doc_count,
            fields,
            vocabulary,
        }
    }

    fn score(&self, query: &HashMap<&str, f64>) -> Vec<RawHit> {
        let magnitude = query.values().map(|w| w * w).sum::<f64>().sqrt();
        if magnitude == 0.0 {
            return Vec::new();
        }

        let mut totals: HashMap<usize, f64> = HashMap::new();
        for field in &self.fields {
            let mut dots: HashMap<usize, f64> = HashMap::new();
            for (&term, &query_weight) in query {
                let Some(postings) = field.postings.get(term) else {
                    continue;
                };
                let df = self.vocabulary.get(term).copied().unwrap_or(0);
                let term_idf = idf(df, self.doc_count);
                for &(doc, tf) in postings {
                    let weight = boosted_weight(
                        bm25_weight(
                            term_idf,
                            f64::from(tf),
                            field.lengths[doc] as f64,
                            field.avg_length,
                        ),
                        field.boost,
                    );
                    *dots.entry(doc).or_insert(0.0) += query_weight * weight;
                }
            }
            for (doc, dot) in dots {
                *totals.entry(doc).or_insert(0.0) += dot / magnitude;
            }
        }

        let mut hits: Vec<RawHit> = totals
            .into_iter()
            .map(|(doc, value)| RawHit {
                doc,
                score: Score::fixed(value, INVERTED_SCORE_DECIMALS),
            })
            .collect();
        hits.sort_by(|a, b| {
            b.score
                .value
                .total_cmp(&a.score.value)
                .then(a.doc.cmp(&b.doc))
        });
        hits
    }
}
