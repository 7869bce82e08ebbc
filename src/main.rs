// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use std::fs;
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use docsite::search::run_backend;
use docsite::{
    encode_index, BackendKind, DocumentIndex, IndexEncoding, SearchController, SearchDocument,
};

mod cli;
use cli::display::{print_hits, print_inspect};
use cli::{CaptureView, Cli, Commands};

/// Environment variable holding the log filter, `warn` when unset.
const LOG_ENV: &str = "DOCSITE_LOG";

fn main() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            file,
            query,
            backend,
            html,
        } => run_search(&file, &query, &backend, html),
        Commands::Inspect { file } => run_inspect(&file),
        Commands::Encode {
            input,
            output,
            encoding,
        } => run_encode(&input, &output, encoding.into()),
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

fn run_search(file: &str, query: &str, backend: &str, html: bool) -> Result<()> {
    let index = DocumentIndex::load(file).with_context(|| format!("Failed to load {}", file))?;

    if html {
        let controller = SearchController::new(Rc::new(index), CaptureView::new(backend));
        let outcome = controller.search(query);
        println!("{}", controller.view().html());
        outcome?;
        return Ok(());
    }

    let kind: BackendKind = backend.parse()?;
    let hits = run_backend(&index, kind, query);
    print_hits(query, kind, &hits);
    Ok(())
}

fn run_inspect(file: &str) -> Result<()> {
    let text = fs::read_to_string(file).with_context(|| format!("Failed to read {}", file))?;
    let encoding = IndexEncoding::detect(&text);
    let index =
        DocumentIndex::parse(&text).with_context(|| format!("Failed to parse {}", file))?;
    print_inspect(file, encoding, &index);
    Ok(())
}

fn run_encode(input: &str, output: &str, encoding: IndexEncoding) -> Result<()> {
    let text = fs::read_to_string(input).with_context(|| format!("Failed to read {}", input))?;
    let docs: Vec<SearchDocument> = serde_json::from_str(&text)
        .with_context(|| format!("Invalid document array in {}", input))?;
    debug!(documents = docs.len(), "encoding index");

    fs::write(output, encode_index(&docs, encoding))
        .with_context(|| format!("Failed to write {}", output))?;
    eprintln!("✓ Wrote {} documents to {}", docs.len(), output);
    Ok(())
}
