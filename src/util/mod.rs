// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers: tokenization for the inverted index and HTML escaping for
//! the result renderer.

pub mod html;
pub mod normalize;

pub use html::escape_html;
pub use normalize::{Tokenizer, STOP_WORDS};
