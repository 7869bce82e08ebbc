//! Search box and panel transitions.

use super::common::{controller, intro_doc, manual};
use docsite::{BackendKind, DocumentIndex, SearchError, SearchView};

#[test]
fn test_widget_example_with_lunr() {
    let search = controller(DocumentIndex::new(vec![intro_doc()]), "lunr");
    let outcome = search.search("widget").unwrap();

    assert_eq!(outcome.backend, BackendKind::InvertedIndex);
    assert_eq!(outcome.hits, 1);

    let view = search.view();
    assert_eq!(view.item_count(), 1);
    assert_eq!(view.query_echo(), "widget");
    assert!(view.panel_visible());
    let html = view.results_html();
    assert!(html.contains("<a href='/intro'><h2>Intro</h2></a>"));
    assert!(html.contains("<p>Getting started guide for widgets</p>"));
}

#[test]
fn test_widget_example_with_fuse() {
    let search = controller(DocumentIndex::new(vec![intro_doc()]), "fuse");
    let outcome = search.search("widget").unwrap();

    assert_eq!(outcome.backend, BackendKind::FuzzyDistance);
    assert_eq!(outcome.hits, 1);
    assert!(search.view().results_html().contains("<h2>Intro</h2>"));
}

#[test]
fn test_no_match_renders_placeholder() {
    let search = controller(manual(), "lunr");
    let outcome = search.search("zzzzqqq").unwrap();

    assert_eq!(outcome.hits, 0);
    let view = search.view();
    assert_eq!(view.results_html(), "<li>No search result found</li>");
    assert_eq!(view.item_count(), 1);
    assert!(view.panel_visible());
}

#[test]
fn test_unknown_backend_still_opens_panel() {
    let search = controller(manual(), "elastic");
    let err = search.search("widget").unwrap_err();

    assert_eq!(err, SearchError::UnknownBackend("elastic".to_string()));
    let view = search.view();
    assert_eq!(view.results_html(), "<li>No search result found</li>");
    assert_eq!(view.query_echo(), "widget");
    assert!(view.panel_visible());
}

#[test]
fn test_selector_change_between_searches() {
    let search = controller(manual(), "lunr");
    let first = search.search("layout").unwrap();
    assert_eq!(first.backend, BackendKind::InvertedIndex);

    search.view().select_backend("fuse");
    let second = search.search("layout").unwrap();
    assert_eq!(second.backend, BackendKind::FuzzyDistance);
    assert!(second.hits >= 1);
}

#[test]
fn test_echo_is_raw_query() {
    let search = controller(manual(), "lunr");
    search.search("  <b>widget</b> ").unwrap();
    assert_eq!(search.view().query_echo(), "  <b>widget</b> ");
}

#[test]
fn test_close_search_resets_box() {
    let search = controller(manual(), "lunr");
    search.view().type_query("widget");
    search.search("widget").unwrap();

    search.close_search();
    let view = search.view();
    assert!(!view.panel_visible());
    assert_eq!(view.query_input(), "");
}

#[test]
fn test_close_without_search_is_harmless() {
    let search = controller(manual(), "fuse");
    search.close_search();
    search.close_search();
    assert!(!search.view().panel_visible());
    assert_eq!(search.view().selected_backend(), "fuse");
}

#[test]
fn test_repeated_search_is_stable() {
    let search = controller(manual(), "lunr");
    search.search("widget").unwrap();
    let first = search.view().results_html();
    search.search("widget").unwrap();
    assert_eq!(search.view().results_html(), first);
}

#[test]
fn test_empty_index() {
    for backend in ["lunr", "fuse"] {
        let search = controller(DocumentIndex::default(), backend);
        assert_eq!(search.search("anything").unwrap().hits, 0);
        assert_eq!(search.view().item_count(), 1);
    }
}
