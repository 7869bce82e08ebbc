// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Search box and results panel.
//!
//! A submission reads the selected engine, runs it against the document
//! index, renders the hits, echoes the query, and opens the panel. Closing
//! clears the input and hides the panel. Those are the only two
//! transitions:
//!
//! ```text
//!            search()
//!  hidden ────────────▶ visible
//!    ▲                     │
//!    └──── close_search() ─┘
//! ```
//!
//! Every call is independent: the engine is instantiated per query and the
//! document index is never mutated.

pub mod render;

use std::rc::Rc;

use tracing::{info, warn};

use crate::backend::{resolve, BackendKind};
use crate::error::SearchError;
use crate::index::DocumentIndex;
use crate::types::SearchHit;

pub use render::{digest, render_item, render_results, DIGEST_LIMIT, NO_RESULTS_ITEM};

/// The page elements a search reads and writes.
pub trait SearchView {
    /// Current value of the engine selector.
    fn selected_backend(&self) -> String;

    /// Show the query text. Implementations must insert it as text, not markup.
    fn set_query_echo(&self, text: &str);

    /// Replace the result list with already-escaped markup.
    fn set_results_html(&self, html: &str);

    fn set_panel_visible(&self, visible: bool);

    fn clear_query_input(&self);
}

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub backend: BackendKind,
    /// Items rendered, not counting the no-result placeholder.
    pub hits: usize,
}

/// Drives one search box over a shared document index.
pub struct SearchController<V: SearchView> {
    index: Rc<DocumentIndex>,
    view: V,
}

impl<V: SearchView> SearchController<V> {
    pub fn new(index: Rc<DocumentIndex>, view: V) -> Self {
        Self { index, view }
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn index(&self) -> &DocumentIndex {
        &self.index
    }

    /// Run `query` with the selected engine and show the results.
    ///
    /// The query is passed to the engine untouched, blank or not. An unknown
    /// selector value still opens the panel with the no-result placeholder,
    /// then reports [`SearchError::UnknownBackend`].
    pub fn search(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        let selected = self.view.selected_backend();

        let (html, outcome) = match selected.parse::<BackendKind>() {
            Ok(backend) => {
                let hits = run_backend(&self.index, backend, query);
                let outcome = SearchOutcome {
                    backend,
                    hits: hits.len(),
                };
                (render_results(&hits), Ok(outcome))
            }
            Err(err) => {
                warn!(backend = %selected, "search requested with unknown backend");
                (NO_RESULTS_ITEM.to_string(), Err(err))
            }
        };

        self.view.set_query_echo(query);
        self.view.set_results_html(&html);
        self.view.set_panel_visible(true);

        if let Ok(outcome) = &outcome {
            info!(backend = %outcome.backend, hits = outcome.hits, "search completed");
        }
        outcome
    }

    /// Clear the input and hide the panel.
    pub fn close_search(&self) {
        self.view.clear_query_input();
        self.view.set_panel_visible(false);
    }
}

/// Run one engine and resolve its hits, best first.
pub fn run_backend<'a>(
    index: &'a DocumentIndex,
    backend: BackendKind,
    query: &str,
) -> Vec<SearchHit<'a>> {
    let raw = backend.backend().search(index, query);
    resolve(index, &raw)
}
