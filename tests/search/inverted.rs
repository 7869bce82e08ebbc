//! Ranking through the inverted-index engine.

use super::common::{make_doc, manual};
use docsite::search::run_backend;
use docsite::{BackendKind, DocumentIndex};

fn titles(index: &DocumentIndex, query: &str) -> Vec<String> {
    run_backend(index, BackendKind::InvertedIndex, query)
        .iter()
        .map(|hit| hit.document.title.clone())
        .collect()
}

#[test]
fn test_title_outranks_content() {
    let index = manual();
    let found = titles(&index, "layout");
    assert_eq!(found.first().map(String::as_str), Some("Layout Engine"));
    assert!(found.contains(&"Widget Reference".to_string()));
}

#[test]
fn test_stemming_matches_inflections() {
    let index = manual();
    // "installing" and "install" share a stem.
    assert_eq!(titles(&index, "installing"), vec!["Getting Started"]);
}

#[test]
fn test_stop_words_alone_match_nothing() {
    let index = manual();
    assert!(titles(&index, "the and of").is_empty());
}

#[test]
fn test_last_term_tolerates_a_typo() {
    let index = manual();
    assert_eq!(titles(&index, "parsr"), vec!["Release Notes"]);
}

#[test]
fn test_swapped_letters_in_last_term() {
    let index = manual();
    assert_eq!(titles(&index, "layuot")[0], "Layout Engine");
    assert!(titles(&index, "wigdet").contains(&"Widget Reference".to_string()));
}

#[test]
fn test_any_term_may_match() {
    let index = manual();
    let found = titles(&index, "installer constraints");
    assert_eq!(found.len(), 2);
}

#[test]
fn test_scores_descend_with_three_decimals() {
    let index = manual();
    let hits = run_backend(&index, BackendKind::InvertedIndex, "widget");
    assert!(hits.len() >= 2);
    for pair in hits.windows(2) {
        assert!(pair[0].score.value >= pair[1].score.value);
    }
    for hit in &hits {
        let text = hit.score.to_string();
        let decimals = text.split('.').nth(1).map_or(0, str::len);
        assert_eq!(decimals, 3, "score {}", text);
    }
}

#[test]
fn test_blank_query_matches_nothing() {
    let index = manual();
    assert!(titles(&index, "").is_empty());
    assert!(titles(&index, "   ").is_empty());
}

#[test]
fn test_brief_is_searchable() {
    let index = DocumentIndex::new(vec![
        make_doc("Alpha", "covers tokenization", "nothing here"),
        make_doc("Beta", "", "nothing either"),
    ]);
    assert_eq!(titles(&index, "tokenization"), vec!["Alpha"]);
}
