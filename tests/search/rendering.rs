//! Result list markup.

use super::common::{controller, make_doc};
use docsite::search::{digest, render_item, DIGEST_LIMIT};
use docsite::{DocumentIndex, Score, SearchDocument, SearchHit};

#[test]
fn test_item_layout() {
    let doc = SearchDocument::new("Intro", "", "Getting started guide for widgets", "/intro");
    let hit = SearchHit {
        document: &doc,
        score: Score::fixed(0.4, 3),
    };
    assert_eq!(
        render_item(&hit),
        "<li><span class='score'>Score: 0.400</span><a href='/intro'><h2>Intro</h2></a>\
         <p>Getting started guide for widgets</p></li>"
    );
}

#[test]
fn test_native_score_text() {
    let doc = make_doc("A", "", "b");
    let hit = SearchHit {
        document: &doc,
        score: Score::native(0.25),
    };
    assert!(render_item(&hit).contains("Score: 0.25<"));
}

#[test]
fn test_exact_match_in_every_field_prints_exponent() {
    let doc = SearchDocument::new("Widget", "widget brief", "widget guide", "w.html");
    let search = controller(DocumentIndex::new(vec![doc]), "fuse");
    search.search("widget").unwrap();

    let html = search.view().results_html();
    assert!(html.contains("Score: 2.22"), "{}", html);
    assert!(html.contains("e-16</span>"), "{}", html);
    assert!(!html.contains("Score: 0.0"));
}

#[test]
fn test_brief_preferred_over_content() {
    let doc = make_doc("A", "Short brief", "Long content body");
    assert_eq!(digest(&doc), "Short brief");
}

#[test]
fn test_long_content_truncated() {
    let content = "x".repeat(DIGEST_LIMIT + 40);
    let doc = make_doc("A", "", &content);
    let text = digest(&doc);
    assert_eq!(text.chars().count(), DIGEST_LIMIT + 1);
    assert!(text.ends_with('…'));
    assert!(text.starts_with(&"x".repeat(DIGEST_LIMIT)));
}

#[test]
fn test_exact_limit_not_truncated() {
    let content = "é".repeat(DIGEST_LIMIT);
    let doc = make_doc("A", "", &content);
    assert_eq!(digest(&doc), content);
}

#[test]
fn test_markup_in_documents_is_escaped() {
    let doc = SearchDocument::new(
        "<script>alert(1)</script>",
        "a & b",
        "",
        "x.html' onmouseover='y",
    );
    let search = controller(DocumentIndex::new(vec![doc]), "fuse");
    search.search("script").unwrap();

    let html = search.view().results_html();
    assert!(!html.contains("<script>"));
    assert!(html.contains("&lt;script&gt;"));
    assert!(html.contains("a &amp; b"));
    assert!(html.contains("x.html&#39; onmouseover=&#39;y"));
}
