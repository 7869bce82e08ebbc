// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The document index: every searchable page, in generator order.
//!
//! The site generator writes the index either as a bare JSON array or as a
//! script that assigns the array to `searchIndex`. Both load into the same
//! immutable `DocumentIndex`, which controllers share through an `Rc`.

mod encoding;

pub use encoding::{clean_text, encode_index, IndexEncoding, JS_PREFIX};

use std::fs;
use std::ops::Index;
use std::path::Path;

use tracing::debug;

use crate::error::IndexError;
use crate::types::SearchDocument;

/// Ordered, immutable set of searchable pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentIndex {
    docs: Vec<SearchDocument>,
}

impl DocumentIndex {
    pub fn new(docs: Vec<SearchDocument>) -> Self {
        Self { docs }
    }

    /// Parse the bare JSON array encoding.
    pub fn from_json(json: &str) -> Result<Self, IndexError> {
        let docs: Vec<SearchDocument> = serde_json::from_str(json)?;
        Ok(Self::new(docs))
    }

    /// Parse the script encoding (`const searchIndex = [...];`).
    ///
    /// Anything before the first `[` and after the last `]` is ignored, so
    /// `var`/`let` declarations and a missing semicolon load as well.
    pub fn from_js(script: &str) -> Result<Self, IndexError> {
        let start = script.find('[').ok_or(IndexError::MissingArray)?;
        let end = script.rfind(']').ok_or(IndexError::MissingArray)?;
        if end < start {
            return Err(IndexError::MissingArray);
        }
        Self::from_json(&script[start..=end])
    }

    /// Parse either encoding, detected from the first non-blank character.
    pub fn parse(text: &str) -> Result<Self, IndexError> {
        match IndexEncoding::detect(text) {
            IndexEncoding::Json => Self::from_json(text),
            IndexEncoding::Js => Self::from_js(text),
        }
    }

    /// Read and parse an index file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, IndexError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let index = Self::parse(&text)?;
        debug!(path = %path.display(), docs = index.len(), "loaded document index");
        Ok(index)
    }

    pub fn len(&self) -> usize {
        self.docs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.docs.is_empty()
    }

    pub fn get(&self, position: usize) -> Option<&SearchDocument> {
        self.docs.get(position)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SearchDocument> {
        self.docs.iter()
    }

    pub fn documents(&self) -> &[SearchDocument] {
        &self.docs
    }
}

impl Index<usize> for DocumentIndex {
    type Output = SearchDocument;

    fn index(&self, position: usize) -> &SearchDocument {
        &self.docs[position]
    }
}

impl<'a> IntoIterator for &'a DocumentIndex {
    type Item = &'a SearchDocument;
    type IntoIter = std::slice::Iter<'a, SearchDocument>;

    fn into_iter(self) -> Self::IntoIter {
        self.docs.iter()
    }
}

impl From<Vec<SearchDocument>> for DocumentIndex {
    fn from(docs: Vec<SearchDocument>) -> Self {
        Self::new(docs)
    }
}
