//! Ranking through the fuzzy-distance engine.

use super::common::{make_doc, manual};
use docsite::search::run_backend;
use docsite::{BackendKind, DocumentIndex, ScorePrecision};

#[test]
fn test_typo_in_title_still_matches() {
    let index = DocumentIndex::new(vec![
        make_doc("Getting Started", "", ""),
        make_doc("Release Notes", "", ""),
    ]);
    let hits = run_backend(&index, BackendKind::FuzzyDistance, "relase notes");
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].document.title, "Release Notes");
}

#[test]
fn test_scores_ascend() {
    let index = manual();
    let hits = run_backend(&index, BackendKind::FuzzyDistance, "widget");
    assert!(!hits.is_empty());
    for pair in hits.windows(2) {
        assert!(pair[0].score.value <= pair[1].score.value);
    }
    assert!(hits
        .iter()
        .all(|hit| hit.score.precision == ScorePrecision::Native));
}

#[test]
fn test_ties_keep_document_order() {
    let index = DocumentIndex::new(vec![
        make_doc("Parser", "", ""),
        make_doc("Lexer", "", ""),
        make_doc("Parser", "", ""),
    ]);
    let hits = run_backend(&index, BackendKind::FuzzyDistance, "parser");
    assert_eq!(hits.len(), 2);
    assert!(std::ptr::eq(hits[0].document, &index[0]));
    assert!(std::ptr::eq(hits[1].document, &index[2]));
}

#[test]
fn test_unrelated_query_matches_nothing() {
    let index = manual();
    assert!(run_backend(&index, BackendKind::FuzzyDistance, "qqqqqqqqqqqq").is_empty());
}
