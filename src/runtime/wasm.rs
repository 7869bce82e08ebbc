// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! WebAssembly bindings for the documentation pages.
//!
//! Page integration, replacing the old inline scripts:
//!
//! ```js
//! import init, { initNav, SiteSearch } from "./docsite.js";
//!
//! await init();
//! window.addEventListener("load", () => initNav());
//!
//! const site = new SiteSearch(searchIndex);
//! searchButton.onclick = () => site.search(searchInput.value);
//! closeButton.onclick = () => site.closeSearch();
//! ```
//!
//! Everything runs synchronously inside the calling event handler.

use std::rc::Rc;

use serde_wasm_bindgen::from_value;
use tracing::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, HtmlInputElement, HtmlSelectElement};

use crate::config::{SearchElements, SiteConfig};
use crate::error::Error;
use crate::index::DocumentIndex;
use crate::nav::{ClickHandler, NavController, NavDom};
use crate::search::{SearchController, SearchView};
use crate::types::SearchDocument;

fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("No document available"))
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn parse_config(config: JsValue) -> Result<SiteConfig, JsValue> {
    if config.is_undefined() || config.is_null() {
        return Ok(SiteConfig::default());
    }
    from_value(config).map_err(|e| to_js(Error::Config(e.to_string())))
}

// ============================================================================
// NAVIGATION
// ============================================================================

/// `NavDom` over the live page.
#[derive(Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    pub fn new(document: Document) -> Self {
        Self { document }
    }
}

fn collect_elements(collection: &web_sys::HtmlCollection) -> Vec<Element> {
    (0..collection.length())
        .filter_map(|i| collection.item(i))
        .collect()
}

impl NavDom for WebDom {
    type Node = Element;

    fn nav_landmarks(&self) -> Vec<Element> {
        collect_elements(&self.document.get_elements_by_tag_name("nav"))
    }

    fn list_items(&self, nav: &Element) -> Vec<Element> {
        collect_elements(&nav.get_elements_by_tag_name("li"))
    }

    fn section_headers(&self, nav: &Element) -> Vec<Element> {
        let Ok(list) = nav.query_selector_all("h2,h3,h4,h5") else {
            return Vec::new();
        };
        (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect()
    }

    fn parent(&self, node: &Element) -> Option<Element> {
        node.parent_element()
    }

    fn child_list(&self, node: &Element) -> Option<Element> {
        node.query_selector("ul").ok().flatten()
    }

    fn has_class(&self, node: &Element, class: &str) -> bool {
        node.class_list().contains(class)
    }

    fn add_class(&self, node: &Element, class: &str) {
        if let Err(e) = node.class_list().add_1(class) {
            warn!(class, error = ?e, "failed to add class");
        }
    }

    fn toggle_class(&self, node: &Element, class: &str) {
        if let Err(e) = node.class_list().toggle(class) {
            warn!(class, error = ?e, "failed to toggle class");
        }
    }

    fn listen_click(&self, node: &Element, handler: ClickHandler<Self>) {
        let dom = self.clone();
        let target = node.clone();
        let callback = Closure::<dyn FnMut()>::new(move || handler(&dom, &target));
        if let Err(e) =
            node.add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
        {
            warn!(error = ?e, "failed to bind section toggle");
        }
        // Listeners live as long as the page.
        callback.forget();
    }
}

/// Fold the navigation tree of the current page.
///
/// Throws when no `<nav>` holds the active-page marker.
#[wasm_bindgen(js_name = "initNav")]
pub fn init_nav(config: JsValue) -> Result<(), JsValue> {
    let config = parse_config(config)?;
    let dom = WebDom::new(document()?);
    NavController::new(config.nav).init(&dom).map_err(to_js)?;
    Ok(())
}

// ============================================================================
// SEARCH
// ============================================================================

/// `SearchView` over the search box and results panel.
pub struct WebView {
    selector: HtmlSelectElement,
    echo: Element,
    list: Element,
    panel: HtmlElement,
    input: HtmlInputElement,
}

impl WebView {
    /// Look up every element the panel needs, failing on the first missing id.
    pub fn from_document(document: &Document, ids: &SearchElements) -> Result<Self, Error> {
        let find = |id: &str| {
            document
                .get_element_by_id(id)
                .ok_or_else(|| Error::MissingElement(id.to_string()))
        };
        let cast_err = |id: &str| Error::Config(format!("element '{}' has the wrong type", id));

        Ok(Self {
            selector: find(&ids.backend_selector)?
                .dyn_into()
                .map_err(|_| cast_err(&ids.backend_selector))?,
            echo: find(&ids.query_echo)?,
            list: find(&ids.result_list)?,
            panel: find(&ids.result_panel)?
                .dyn_into()
                .map_err(|_| cast_err(&ids.result_panel))?,
            input: find(&ids.query_input)?
                .dyn_into()
                .map_err(|_| cast_err(&ids.query_input))?,
        })
    }
}

impl SearchView for WebView {
    fn selected_backend(&self) -> String {
        self.selector.value()
    }

    fn set_query_echo(&self, text: &str) {
        self.echo.set_text_content(Some(text));
    }

    fn set_results_html(&self, html: &str) {
        self.list.set_inner_html(html);
    }

    fn set_panel_visible(&self, visible: bool) {
        let display = if visible { "block" } else { "none" };
        if let Err(e) = self.panel.style().set_property("display", display) {
            warn!(error = ?e, "failed to change panel visibility");
        }
    }

    fn clear_query_input(&self) {
        self.input.set_value("");
    }
}

/// Global the script encoding assigns the document array to.
const GLOBAL_INDEX: &str = "searchIndex";

/// Search box bound to the page, holding the document index.
#[wasm_bindgen]
pub struct SiteSearch {
    controller: SearchController<WebView>,
}

#[wasm_bindgen]
impl SiteSearch {
    /// Bind to the page with the given documents.
    ///
    /// Without documents, `globalThis.searchIndex` is used. A top-level
    /// `const` is not a global property, so such pages pass it explicitly.
    #[wasm_bindgen(constructor)]
    pub fn new(documents: JsValue, config: JsValue) -> Result<SiteSearch, JsValue> {
        let documents = if documents.is_undefined() || documents.is_null() {
            js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str(GLOBAL_INDEX))?
        } else {
            documents
        };
        let docs: Vec<SearchDocument> = from_value(documents)
            .map_err(|e| JsValue::from_str(&format!("Invalid search index: {}", e)))?;
        let config = parse_config(config)?;
        let view = WebView::from_document(&document()?, &config.search).map_err(to_js)?;

        Ok(SiteSearch {
            controller: SearchController::new(Rc::new(DocumentIndex::new(docs)), view),
        })
    }

    /// Number of indexed documents.
    #[wasm_bindgen(js_name = "docCount")]
    pub fn doc_count(&self) -> usize {
        self.controller.index().len()
    }

    /// Run a query and open the results panel. Returns the number of hits.
    #[wasm_bindgen]
    pub fn search(&self, text: &str) -> Result<usize, JsValue> {
        self.controller
            .search(text)
            .map(|outcome| outcome.hits)
            .map_err(to_js)
    }

    /// Clear the search box and hide the results panel.
    #[wasm_bindgen(js_name = "closeSearch")]
    pub fn close_search(&self) {
        self.controller.close_search();
    }
}
