// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for navigation, search, and index loading.
//!
//! Everything here is local and synchronous, so nothing is retried. An error
//! is reported where it happens and the caller decides whether to show it.

use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Navigation tree initialization failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NavError {
    /// No `<nav>` landmark contains a list item with the active-page class.
    #[error("no navigation landmark contains an item marked '{class}'")]
    NoActivePage { class: String },
}

/// Search dispatch failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SearchError {
    /// The selector control names a backend this crate does not provide.
    #[error("unknown search backend '{0}' (expected 'lunr' or 'fuse')")]
    UnknownBackend(String),
}

/// Document index loading and encoding failures.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("failed to read index file: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid index JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The JS encoding did not contain an array literal.
    #[error("index script has no document array")]
    MissingArray,
}

/// Umbrella error for callers that deal with every module at once.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Nav(#[from] NavError),

    #[error(transparent)]
    Search(#[from] SearchError),

    #[error(transparent)]
    Index(#[from] IndexError),

    /// A DOM element the page contract requires is absent.
    #[error("page has no element with id '{0}'")]
    MissingElement(String),

    #[error("invalid configuration: {0}")]
    Config(String),
}
