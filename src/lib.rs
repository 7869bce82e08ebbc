//! Navigation tree and pluggable full-text search for static documentation sites.
//!
//! Two independent controllers run on every generated page:
//!
//! - **Navigation** folds the site tree down to the branch of the page being
//!   displayed and turns section headers into toggles.
//! - **Search** runs a query through the engine picked in the page's
//!   selector and renders the hits into a results panel.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌───────────────┐   ┌────────────────┐
//! │   index/     │──▶│   backend/    │──▶│   search/      │──▶ SearchView
//! │(DocumentIndex│   │ (lunr, fuse)  │   │ (controller,   │
//! │  encodings)  │   │               │   │  render)       │
//! └──────────────┘   └───────────────┘   └────────────────┘
//!                       │        │
//!                       ▼        ▼
//!                 ┌─────────┐ ┌─────────┐
//!                 │ scoring │ │  fuzzy  │
//!                 └─────────┘ └─────────┘
//!
//! ┌──────────────┐
//! │    nav/      │──▶ NavDom
//! └──────────────┘
//! ```
//!
//! Both controllers talk to the page through traits (`NavDom`,
//! `SearchView`). `runtime::wasm` implements them over `web-sys` for the
//! browser; `testing` implements them in memory.
//!
//! # Usage
//!
//! ```
//! use std::rc::Rc;
//! use docsite::testing::MemoryView;
//! use docsite::{DocumentIndex, SearchController, SearchDocument};
//!
//! let index = DocumentIndex::new(vec![SearchDocument::new(
//!     "Intro",
//!     "",
//!     "Getting started guide for widgets",
//!     "/intro",
//! )]);
//! let controller = SearchController::new(Rc::new(index), MemoryView::with_backend("lunr"));
//!
//! let outcome = controller.search("widget").unwrap();
//! assert_eq!(outcome.hits, 1);
//! ```

pub mod backend;
pub mod config;
pub mod error;
pub mod fuzzy;
pub mod index;
pub mod nav;
pub mod runtime;
pub mod scoring;
pub mod search;
pub mod testing;
pub mod types;
pub mod util;

pub use backend::{BackendKind, FuzzyDistanceBackend, InvertedIndexBackend, SearchBackend};
pub use config::{NavClasses, SearchElements, SiteConfig};
pub use error::{Error, IndexError, NavError, Result, SearchError};
pub use index::{encode_index, DocumentIndex, IndexEncoding};
pub use nav::{init_nav, NavController, NavDom, NavSummary};
pub use search::{SearchController, SearchOutcome, SearchView};
pub use types::{RawHit, Score, ScorePrecision, SearchDocument, SearchHit};
