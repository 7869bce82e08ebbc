//! Shared test fixtures.

#![allow(dead_code)]

use std::rc::Rc;

use docsite::testing::{MemoryDom, MemoryView, NodeId};
use docsite::{DocumentIndex, SearchController, SearchDocument};

pub use docsite::testing::make_doc;

// ============================================================================
// DOCUMENTS
// ============================================================================

/// The single-page site used throughout the docs.
pub fn intro_doc() -> SearchDocument {
    SearchDocument::new("Intro", "", "Getting started guide for widgets", "/intro")
}

/// A small manual: a guide, two reference pages, and a page without a brief.
pub fn manual() -> DocumentIndex {
    DocumentIndex::new(vec![
        make_doc(
            "Getting Started",
            "Install the toolkit and build your first widget",
            "Download the archive, unpack it, then run the installer.",
        ),
        make_doc(
            "Widget Reference",
            "Every widget property",
            "Widgets expose size, color and layout properties.",
        ),
        make_doc(
            "Layout Engine",
            "",
            "The layout engine positions widgets inside containers using constraints.",
        ),
        make_doc(
            "Release Notes",
            "Changes per version",
            "Version 2 renamed the parser module.",
        ),
    ])
}

pub fn controller(index: DocumentIndex, backend: &str) -> SearchController<MemoryView> {
    SearchController::new(Rc::new(index), MemoryView::with_backend(backend))
}

// ============================================================================
// NAVIGATION TREES
// ============================================================================

/// One top-level branch in a generated navigation tree.
pub struct Branch {
    pub item: NodeId,
    pub header: NodeId,
    pub list: NodeId,
}

/// `<nav><ul>` with `count` branches, each `<li><h2/><ul><li/></ul></li>`.
///
/// The branch at `active` (if any) carries the active-page marker on its
/// item and on its leaf.
pub fn nav_tree(count: usize, active: Option<usize>) -> (MemoryDom, NodeId, Vec<Branch>) {
    let dom = MemoryDom::new();
    let nav = dom.element(None, "nav", &[]);
    let root = dom.element(Some(nav), "ul", &[]);

    let branches = (0..count)
        .map(|i| {
            let marker: &[&str] = if active == Some(i) {
                &["activepage"]
            } else {
                &[]
            };
            let item = dom.element(Some(root), "li", marker);
            let header = dom.element(Some(item), "h2", &[]);
            let list = dom.element(Some(item), "ul", &[]);
            dom.element(Some(list), "li", marker);
            Branch { item, header, list }
        })
        .collect();

    (dom, nav, branches)
}
