// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Writing the search-index file the pages load.
//!
//! Layout is one object per page, four fields per object, in the order the
//! generated pages have always used (`title`, `brief`, `url`, `content`).
//! The script encoding wraps the array in a `searchIndex` constant so pages
//! can include it with a plain `<script>` tag instead of fetching JSON.

use std::fmt::Write;

use crate::types::SearchDocument;

/// Statement prefix of the script encoding.
pub const JS_PREFIX: &str = "const searchIndex = ";

/// On-disk flavor of the search index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IndexEncoding {
    #[default]
    Json,
    Js,
}

impl IndexEncoding {
    /// JSON starts with `[`; anything else is treated as a script.
    pub fn detect(text: &str) -> Self {
        match text.trim_start().chars().next() {
            Some('[') => Self::Json,
            _ => Self::Js,
        }
    }

    /// Conventional file extension.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Js => "js",
        }
    }
}

/// Flatten line breaks and tabs to single spaces.
///
/// A CRLF pair collapses to one space, not two.
pub fn clean_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                result.push(' ');
            }
            '\n' | '\t' => result.push(' '),
            c => result.push(c),
        }
    }
    result
}

/// Serialize documents into a search-index file body.
///
/// `brief` and `content` are cleaned with [`clean_text`]; titles and urls are
/// written as given. Every value is JSON-escaped.
pub fn encode_index(docs: &[SearchDocument], encoding: IndexEncoding) -> String {
    let mut out = String::new();
    if encoding == IndexEncoding::Js {
        out.push_str(JS_PREFIX);
    }
    out.push_str("[\n");

    for (i, doc) in docs.iter().enumerate() {
        out.push_str("   {\n");
        // Writing to a String cannot fail.
        let _ = writeln!(out, "      \"title\":{},", json_string(&doc.title));
        let _ = writeln!(out, "      \"brief\":{},", json_string(&clean_text(&doc.brief)));
        let _ = writeln!(out, "      \"url\":{},", json_string(&doc.url));
        let _ = writeln!(out, "      \"content\":{}", json_string(&clean_text(&doc.content)));
        if i + 1 == docs.len() {
            out.push_str("   }\n");
        } else {
            out.push_str("   },\n");
        }
    }

    out.push(']');
    if encoding == IndexEncoding::Js {
        out.push(';');
    }
    out
}

fn json_string(s: &str) -> String {
    // Serializing a &str into JSON is infallible.
    serde_json::to_string(s).unwrap_or_default()
}
