// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Names of the classes and element ids the page templates use.
//!
//! The defaults match the generated HTML, so most callers never build one of
//! these by hand. Pages with custom templates pass a partial object and keep
//! the defaults for everything they leave out.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Full DOM contract for both controllers.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub nav: NavClasses,
    pub search: SearchElements,
}

/// CSS classes read and written by the navigation controller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavClasses {
    /// Marks the list item of the page being displayed.
    pub active_page: String,
    /// Added to every header that can be toggled.
    pub expanded: String,
    /// Toggled on a header whose branch is closed.
    pub contracted: String,
    /// Toggled on a branch's child list to hide it.
    pub invisible: String,
}

impl Default for NavClasses {
    fn default() -> Self {
        Self {
            active_page: "activepage".to_string(),
            expanded: "expanded".to_string(),
            contracted: "contracted".to_string(),
            invisible: "invisible".to_string(),
        }
    }
}

/// Element ids of the search box and results panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SearchElements {
    pub backend_selector: String,
    pub query_echo: String,
    pub result_list: String,
    pub result_panel: String,
    pub query_input: String,
}

impl Default for SearchElements {
    fn default() -> Self {
        Self {
            backend_selector: "searchlib".to_string(),
            query_echo: "searchText".to_string(),
            result_list: "searchItems".to_string(),
            result_panel: "searchResultBox".to_string(),
            query_input: "searchInput".to_string(),
        }
    }
}

impl SiteConfig {
    /// Parse a (possibly partial) JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::Config(e.to_string()))
    }
}
