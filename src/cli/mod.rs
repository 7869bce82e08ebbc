// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the docsite command-line interface.
//!
//! Three subcommands: `search` to query an index file the way the pages do,
//! `inspect` to summarize one, and `encode` to write one from a plain JSON
//! document array.

pub mod display;

use std::cell::RefCell;

use clap::{Parser, Subcommand, ValueEnum};
use docsite::{IndexEncoding, SearchView};

#[derive(Parser)]
#[command(
    name = "docsite",
    about = "Search and inspect static documentation site indexes",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search an index file and display results
    Search {
        /// Path to the search index (.json or .js)
        file: String,

        /// Search query, passed to the engine as typed
        query: String,

        /// Engine to use, as named by the page selector
        #[arg(short, long, default_value = "lunr")]
        backend: String,

        /// Print the result list markup the page would receive
        #[arg(long)]
        html: bool,
    },

    /// Summarize an index file
    Inspect {
        /// Path to the search index (.json or .js)
        file: String,
    },

    /// Write a search index from a JSON array of documents
    Encode {
        /// JSON array of {title, brief, content, url}
        #[arg(short, long)]
        input: String,

        /// Output file
        #[arg(short, long)]
        output: String,

        /// Output flavor
        #[arg(long, value_enum, default_value = "json")]
        encoding: EncodingArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
pub enum EncodingArg {
    Json,
    Js,
}

impl From<EncodingArg> for IndexEncoding {
    fn from(arg: EncodingArg) -> Self {
        match arg {
            EncodingArg::Json => IndexEncoding::Json,
            EncodingArg::Js => IndexEncoding::Js,
        }
    }
}

/// Search view that keeps what the controller renders, for `--html`.
pub struct CaptureView {
    backend: String,
    html: RefCell<String>,
}

impl CaptureView {
    pub fn new(backend: &str) -> Self {
        Self {
            backend: backend.to_string(),
            html: RefCell::new(String::new()),
        }
    }

    pub fn html(&self) -> String {
        self.html.borrow().clone()
    }
}

impl SearchView for CaptureView {
    fn selected_backend(&self) -> String {
        self.backend.clone()
    }

    fn set_query_echo(&self, _text: &str) {}

    fn set_results_html(&self, html: &str) {
        *self.html.borrow_mut() = html.to_string();
    }

    fn set_panel_visible(&self, _visible: bool) {}

    fn clear_query_input(&self) {}
}
