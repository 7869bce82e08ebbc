// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result list markup.
//!
//! One `<li>` per hit: score label, linked title, digest paragraph. Every
//! document field is escaped before it is interpolated, so page content can
//! never inject markup into the panel.

use std::borrow::Cow;
use std::fmt::Write;

use crate::types::{SearchDocument, SearchHit};
use crate::util::escape_html;

/// Longest digest shown before truncation, in characters.
pub const DIGEST_LIMIT: usize = 160;

/// Appended to truncated digests.
pub const ELLIPSIS: char = '…';

/// Placeholder rendered when a search finds nothing.
pub const NO_RESULTS_ITEM: &str = "<li>No search result found</li>";

/// Preview text: the brief when there is one, the content otherwise.
///
/// Text longer than [`DIGEST_LIMIT`] characters keeps its first
/// `DIGEST_LIMIT` characters followed by [`ELLIPSIS`].
pub fn digest(doc: &SearchDocument) -> Cow<'_, str> {
    let source = if doc.brief.is_empty() {
        &doc.content
    } else {
        &doc.brief
    };

    match source.char_indices().nth(DIGEST_LIMIT) {
        Some((cut, _)) => {
            let mut truncated = String::with_capacity(cut + ELLIPSIS.len_utf8());
            truncated.push_str(&source[..cut]);
            truncated.push(ELLIPSIS);
            Cow::Owned(truncated)
        }
        None => Cow::Borrowed(source),
    }
}

/// Markup of a single hit.
pub fn render_item(hit: &SearchHit<'_>) -> String {
    let doc = hit.document;
    format!(
        "<li><span class='score'>Score: {}</span><a href='{}'><h2>{}</h2></a><p>{}</p></li>",
        hit.score,
        escape_html(&doc.url),
        escape_html(&doc.title),
        escape_html(&digest(doc)),
    )
}

/// Markup of the whole list, or the placeholder when `hits` is empty.
pub fn render_results(hits: &[SearchHit<'_>]) -> String {
    if hits.is_empty() {
        return NO_RESULTS_ITEM.to_string();
    }
    hits.iter().fold(String::new(), |mut out, hit| {
        // Writing to a String cannot fail.
        let _ = write!(out, "{}", render_item(hit));
        out
    })
}
