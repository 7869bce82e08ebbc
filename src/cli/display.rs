// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal output for the docsite CLI.
//!
//! Colors only when stdout is a terminal and `NO_COLOR` is unset, so piping
//! results into other tools gives plain text.

use std::sync::OnceLock;

use docsite::search::digest;
use docsite::{BackendKind, DocumentIndex, IndexEncoding, SearchHit};

static COLOR: OnceLock<bool> = OnceLock::new();

fn use_color() -> bool {
    *COLOR.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
    })
}

fn paint(code: &str, text: &str) -> String {
    if use_color() {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

pub fn bold(text: &str) -> String {
    paint("1", text)
}

pub fn dim(text: &str) -> String {
    paint("2", text)
}

pub fn accent(text: &str) -> String {
    paint("36", text)
}

/// Print ranked hits with their digests.
pub fn print_hits(query: &str, backend: BackendKind, hits: &[SearchHit<'_>]) {
    println!(
        "{} {} {}",
        bold("Search:"),
        query,
        dim(&format!("({}, {} results)", backend, hits.len()))
    );

    if hits.is_empty() {
        println!("  No search result found");
        return;
    }

    for (rank, hit) in hits.iter().enumerate() {
        println!();
        println!(
            "{:>3}. {}  {}",
            rank + 1,
            bold(&hit.document.title),
            dim(&format!("score {}", hit.score))
        );
        println!("     {}", accent(&hit.document.url));
        println!("     {}", digest(hit.document));
    }
}

/// Print a one-screen summary of an index file.
pub fn print_inspect(path: &str, encoding: IndexEncoding, index: &DocumentIndex) {
    let (mut title, mut brief, mut content) = (0, 0, 0);
    for doc in index {
        title += doc.title.chars().count();
        brief += doc.brief.chars().count();
        content += doc.content.chars().count();
    }
    let without_brief = index.iter().filter(|doc| doc.brief.is_empty()).count();

    println!("{} {}", bold("Index:"), path);
    println!("  encoding   {}", encoding.extension());
    println!("  documents  {}", index.len());
    println!("  no brief   {}", without_brief);
    println!("  title      {} chars", title);
    println!("  brief      {} chars", brief);
    println!("  content    {} chars", content);
}
