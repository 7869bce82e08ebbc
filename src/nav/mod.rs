// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Collapsible navigation tree.
//!
//! The generated pages carry the whole site tree in a `<nav>` landmark. On
//! load only the branch leading to the displayed page stays open; every
//! other branch is folded, and each section header becomes a toggle.
//!
//! ```text
//! <nav>
//!   <ul>
//!     <li class="activepage">        ← branch stays open
//!       <h2>Guide</h2>               ← "expanded"
//!       <ul> ... </ul>
//!     </li>
//!     <li>
//!       <h2>Reference</h2>           ← "expanded contracted"
//!       <ul class="invisible"> ... </ul>
//!     </li>
//!   </ul>
//! </nav>
//! ```
//!
//! A header's initial state depends only on its own parent item. There is
//! no propagation up or down the tree, and the click handler keeps no state
//! of its own: it flips whatever the DOM currently says.

use std::rc::Rc;

use tracing::{debug, info};

use crate::config::NavClasses;
use crate::error::NavError;

/// Click callback: receives the DOM and the header that was clicked.
pub type ClickHandler<D> = Rc<dyn Fn(&D, &<D as NavDom>::Node)>;

/// The slice of the DOM the navigation controller touches.
///
/// Every query returns nodes in document order. Mutations go through
/// `&self` because DOM handles are shared references, in the browser and
/// in the in-memory test DOM alike.
pub trait NavDom: Sized + 'static {
    type Node: Clone + 'static;

    /// Every `<nav>` element of the page.
    fn nav_landmarks(&self) -> Vec<Self::Node>;

    /// Every `<li>` below `nav`, depth first.
    fn list_items(&self, nav: &Self::Node) -> Vec<Self::Node>;

    /// Every `h2`..`h5` below `nav`.
    fn section_headers(&self, nav: &Self::Node) -> Vec<Self::Node>;

    fn parent(&self, node: &Self::Node) -> Option<Self::Node>;

    /// First `<ul>` below `node`.
    fn child_list(&self, node: &Self::Node) -> Option<Self::Node>;

    fn has_class(&self, node: &Self::Node, class: &str) -> bool;

    fn add_class(&self, node: &Self::Node, class: &str);

    fn toggle_class(&self, node: &Self::Node, class: &str);

    fn listen_click(&self, node: &Self::Node, handler: ClickHandler<Self>);
}

/// What initialization did, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavSummary {
    /// Position of the main landmark among all `<nav>` elements.
    pub landmark: usize,
    /// Headers made toggleable.
    pub headers: usize,
    /// Headers folded at load.
    pub collapsed: usize,
}

/// Initializes and toggles the navigation tree.
#[derive(Debug, Clone, Default)]
pub struct NavController {
    classes: NavClasses,
}

impl NavController {
    pub fn new(classes: NavClasses) -> Self {
        Self { classes }
    }

    pub fn classes(&self) -> &NavClasses {
        &self.classes
    }

    /// Fold every branch but the active one and bind header toggles.
    ///
    /// Runs once per page. Fails when no landmark holds the active-page
    /// marker, since there is then no tree to anchor on.
    pub fn init<D: NavDom>(&self, dom: &D) -> Result<NavSummary, NavError> {
        let (landmark, nav) = self.find_main_nav(dom)?;
        let headers = dom.section_headers(&nav);
        let mut collapsed = 0;

        let toggle_classes = self.classes.clone();
        let handler: ClickHandler<D> =
            Rc::new(move |dom: &D, header: &D::Node| toggle_section(dom, header, &toggle_classes));

        for header in &headers {
            dom.add_class(header, &self.classes.expanded);

            let Some(item) = dom.parent(header) else {
                continue;
            };
            let Some(list) = dom.child_list(&item) else {
                debug!("section header without child list; left open");
                continue;
            };

            if !dom.has_class(&item, &self.classes.active_page) {
                dom.toggle_class(&list, &self.classes.invisible);
                dom.toggle_class(header, &self.classes.contracted);
                collapsed += 1;
            }

            dom.listen_click(header, Rc::clone(&handler));
        }

        let summary = NavSummary {
            landmark,
            headers: headers.len(),
            collapsed,
        };
        info!(
            landmark = summary.landmark,
            headers = summary.headers,
            collapsed = summary.collapsed,
            "navigation initialized"
        );
        Ok(summary)
    }

    /// First landmark, in document order, holding an active-page item.
    pub fn find_main_nav<D: NavDom>(&self, dom: &D) -> Result<(usize, D::Node), NavError> {
        dom.nav_landmarks()
            .into_iter()
            .enumerate()
            .find(|(_, nav)| {
                dom.list_items(nav)
                    .iter()
                    .any(|item| dom.has_class(item, &self.classes.active_page))
            })
            .ok_or_else(|| NavError::NoActivePage {
                class: self.classes.active_page.clone(),
            })
    }

    /// Flip one header's branch. Same as a click.
    pub fn toggle<D: NavDom>(&self, dom: &D, header: &D::Node) {
        toggle_section(dom, header, &self.classes);
    }
}

/// Initialize with the class names of the generated pages.
pub fn init_nav<D: NavDom>(dom: &D) -> Result<NavSummary, NavError> {
    NavController::default().init(dom)
}

fn toggle_section<D: NavDom>(dom: &D, header: &D::Node, classes: &NavClasses) {
    let Some(list) = dom.parent(header).and_then(|item| dom.child_list(&item)) else {
        return;
    };
    dom.toggle_class(&list, &classes.invisible);
    dom.toggle_class(header, &classes.contracted);
}
