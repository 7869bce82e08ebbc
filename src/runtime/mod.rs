// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Browser bindings.
//!
//! The controllers only know the `NavDom` and `SearchView` traits. This is
//! where those traits meet the real page through `web-sys`, and where the
//! JavaScript-facing entry points live.

#[cfg(feature = "wasm")]
pub mod wasm;
