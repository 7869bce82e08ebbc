//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. It holds an
//! in-memory DOM for the navigation controller, a recording view for the
//! search controller, and document constructors.

#![doc(hidden)]

use std::cell::RefCell;

use crate::nav::{ClickHandler, NavDom};
use crate::search::SearchView;
use crate::types::SearchDocument;

/// Create a document whose url is derived from its title.
pub fn make_doc(title: &str, brief: &str, content: &str) -> SearchDocument {
    SearchDocument {
        title: title.to_string(),
        brief: brief.to_string(),
        content: content.to_string(),
        url: format!("{}.html", title.to_lowercase().replace(' ', "-")),
    }
}

/// Handle to an element of a [`MemoryDom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

struct NodeData {
    tag: String,
    classes: Vec<String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// Minimal element tree with classes and click listeners.
///
/// Document order is creation order within each parent, roots first to last.
#[derive(Default)]
pub struct MemoryDom {
    nodes: RefCell<Vec<NodeData>>,
    handlers: RefCell<Vec<(NodeId, ClickHandler<MemoryDom>)>>,
}

impl MemoryDom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element under `parent` (or as a new root).
    pub fn element(&self, parent: Option<NodeId>, tag: &str, classes: &[&str]) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        let id = NodeId(nodes.len());
        nodes.push(NodeData {
            tag: tag.to_ascii_lowercase(),
            classes: classes.iter().map(|c| (*c).to_string()).collect(),
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            nodes[parent.0].children.push(id);
        }
        id
    }

    pub fn tag(&self, node: NodeId) -> String {
        self.nodes.borrow()[node.0].tag.clone()
    }

    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.nodes.borrow()[node.0].classes.clone()
    }

    /// Fire every click listener bound to `node`.
    pub fn click(&self, node: NodeId) {
        let bound: Vec<ClickHandler<MemoryDom>> = self
            .handlers
            .borrow()
            .iter()
            .filter(|(target, _)| *target == node)
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in bound {
            handler(self, &node);
        }
    }

    /// Number of listeners bound to `node`.
    pub fn listener_count(&self, node: NodeId) -> usize {
        self.handlers
            .borrow()
            .iter()
            .filter(|(target, _)| *target == node)
            .count()
    }

    fn roots(&self) -> Vec<NodeId> {
        self.nodes
            .borrow()
            .iter()
            .enumerate()
            .filter(|(_, n)| n.parent.is_none())
            .map(|(i, _)| NodeId(i))
            .collect()
    }

    /// Strict descendants of `node` in document order.
    fn descendants(&self, node: NodeId) -> Vec<NodeId> {
        let nodes = self.nodes.borrow();
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = nodes[node.0].children.iter().rev().copied().collect();
        while let Some(id) = stack.pop() {
            out.push(id);
            stack.extend(nodes[id.0].children.iter().rev().copied());
        }
        out
    }

    fn descendants_tagged(&self, node: NodeId, tags: &[&str]) -> Vec<NodeId> {
        self.descendants(node)
            .into_iter()
            .filter(|id| tags.contains(&self.tag(*id).as_str()))
            .collect()
    }
}

impl NavDom for MemoryDom {
    type Node = NodeId;

    fn nav_landmarks(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        for root in self.roots() {
            if self.tag(root) == "nav" {
                out.push(root);
            }
            out.extend(self.descendants_tagged(root, &["nav"]));
        }
        out
    }

    fn list_items(&self, nav: &NodeId) -> Vec<NodeId> {
        self.descendants_tagged(*nav, &["li"])
    }

    fn section_headers(&self, nav: &NodeId) -> Vec<NodeId> {
        self.descendants_tagged(*nav, &["h2", "h3", "h4", "h5"])
    }

    fn parent(&self, node: &NodeId) -> Option<NodeId> {
        self.nodes.borrow()[node.0].parent
    }

    fn child_list(&self, node: &NodeId) -> Option<NodeId> {
        self.descendants_tagged(*node, &["ul"]).into_iter().next()
    }

    fn has_class(&self, node: &NodeId, class: &str) -> bool {
        self.nodes.borrow()[node.0].classes.iter().any(|c| c == class)
    }

    fn add_class(&self, node: &NodeId, class: &str) {
        if !self.has_class(node, class) {
            self.nodes.borrow_mut()[node.0].classes.push(class.to_string());
        }
    }

    fn toggle_class(&self, node: &NodeId, class: &str) {
        let mut nodes = self.nodes.borrow_mut();
        let classes = &mut nodes[node.0].classes;
        match classes.iter().position(|c| c == class) {
            Some(i) => {
                classes.remove(i);
            }
            None => classes.push(class.to_string()),
        }
    }

    fn listen_click(&self, node: &NodeId, handler: ClickHandler<Self>) {
        self.handlers.borrow_mut().push((*node, handler));
    }
}

#[derive(Default)]
struct ViewState {
    backend: String,
    query_input: String,
    query_echo: String,
    results_html: String,
    panel_visible: bool,
}

/// Search view that records what the controller wrote.
#[derive(Default)]
pub struct MemoryView {
    state: RefCell<ViewState>,
}

impl MemoryView {
    pub fn with_backend(backend: &str) -> Self {
        let view = Self::default();
        view.select_backend(backend);
        view
    }

    pub fn select_backend(&self, backend: &str) {
        self.state.borrow_mut().backend = backend.to_string();
    }

    pub fn type_query(&self, text: &str) {
        self.state.borrow_mut().query_input = text.to_string();
    }

    pub fn query_input(&self) -> String {
        self.state.borrow().query_input.clone()
    }

    pub fn query_echo(&self) -> String {
        self.state.borrow().query_echo.clone()
    }

    pub fn results_html(&self) -> String {
        self.state.borrow().results_html.clone()
    }

    /// Rendered `<li>` items, placeholder included.
    pub fn item_count(&self) -> usize {
        self.state.borrow().results_html.matches("<li>").count()
    }

    pub fn panel_visible(&self) -> bool {
        self.state.borrow().panel_visible
    }
}

impl SearchView for MemoryView {
    fn selected_backend(&self) -> String {
        self.state.borrow().backend.clone()
    }

    fn set_query_echo(&self, text: &str) {
        self.state.borrow_mut().query_echo = text.to_string();
    }

    fn set_results_html(&self, html: &str) {
        self.state.borrow_mut().results_html = html.to_string();
    }

    fn set_panel_visible(&self, visible: bool) {
        self.state.borrow_mut().panel_visible = visible;
    }

    fn clear_query_input(&self) {
        self.state.borrow_mut().query_input.clear();
    }
}
