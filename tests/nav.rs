//! Navigation tree folding and section toggles.

mod common;

use common::nav_tree;
use docsite::testing::MemoryDom;
use docsite::{init_nav, NavClasses, NavController, NavDom, NavError};

fn has(dom: &MemoryDom, node: docsite::testing::NodeId, class: &str) -> bool {
    dom.has_class(&node, class)
}

#[test]
fn test_active_branch_open_others_folded() {
    let (dom, _, branches) = nav_tree(3, Some(1));
    let summary = init_nav(&dom).unwrap();

    assert_eq!(summary.landmark, 0);
    assert_eq!(summary.headers, 3);
    assert_eq!(summary.collapsed, 2);

    for (i, branch) in branches.iter().enumerate() {
        assert!(has(&dom, branch.header, "expanded"));
        let folded = i != 1;
        assert_eq!(has(&dom, branch.list, "invisible"), folded);
        assert_eq!(has(&dom, branch.header, "contracted"), folded);
        assert_eq!(dom.listener_count(branch.header), 1);
    }
}

#[test]
fn test_click_opens_then_closes_folded_branch() {
    let (dom, _, branches) = nav_tree(2, Some(0));
    init_nav(&dom).unwrap();
    let folded = &branches[1];

    dom.click(folded.header);
    assert!(!has(&dom, folded.list, "invisible"));
    assert!(!has(&dom, folded.header, "contracted"));
    assert!(has(&dom, folded.header, "expanded"));

    dom.click(folded.header);
    assert!(has(&dom, folded.list, "invisible"));
    assert!(has(&dom, folded.header, "contracted"));
}

#[test]
fn test_click_folds_active_branch() {
    let (dom, _, branches) = nav_tree(2, Some(0));
    init_nav(&dom).unwrap();

    dom.click(branches[0].header);
    assert!(has(&dom, branches[0].list, "invisible"));
    // The other branch is untouched.
    assert!(has(&dom, branches[1].list, "invisible"));
    dom.click(branches[0].header);
    assert!(!has(&dom, branches[0].list, "invisible"));
}

#[test]
fn test_no_active_page_fails() {
    let (dom, _, branches) = nav_tree(2, None);
    let err = init_nav(&dom).unwrap_err();
    assert_eq!(
        err,
        NavError::NoActivePage {
            class: "activepage".to_string()
        }
    );
    // Nothing was touched.
    assert!(!has(&dom, branches[0].header, "expanded"));
    assert_eq!(dom.listener_count(branches[0].header), 0);
}

#[test]
fn test_landmark_without_marker_is_skipped() {
    let dom = MemoryDom::new();
    // Page header nav with links but no marker.
    let top = dom.element(None, "nav", &[]);
    let top_ul = dom.element(Some(top), "ul", &[]);
    let top_li = dom.element(Some(top_ul), "li", &[]);
    let top_h = dom.element(Some(top_li), "h2", &[]);

    let side = dom.element(None, "nav", &[]);
    let side_ul = dom.element(Some(side), "ul", &[]);
    let side_li = dom.element(Some(side_ul), "li", &["activepage"]);
    let side_h = dom.element(Some(side_li), "h3", &[]);
    dom.element(Some(side_li), "ul", &[]);

    let summary = init_nav(&dom).unwrap();
    assert_eq!(summary.landmark, 1);
    assert!(!has(&dom, top_h, "expanded"));
    assert!(has(&dom, side_h, "expanded"));
}

#[test]
fn test_header_without_sublist_left_open() {
    let dom = MemoryDom::new();
    let nav = dom.element(None, "nav", &[]);
    let ul = dom.element(Some(nav), "ul", &[]);
    let leaf = dom.element(Some(ul), "li", &[]);
    let leaf_h = dom.element(Some(leaf), "h4", &[]);
    dom.element(Some(ul), "li", &["activepage"]);

    let summary = init_nav(&dom).unwrap();
    assert_eq!(summary.headers, 1);
    assert_eq!(summary.collapsed, 0);
    assert!(has(&dom, leaf_h, "expanded"));
    assert!(!has(&dom, leaf_h, "contracted"));
    assert_eq!(dom.listener_count(leaf_h), 0);
}

#[test]
fn test_nested_headers_all_considered() {
    let (dom, _, branches) = nav_tree(1, Some(0));
    // A folded sub-branch inside the active branch.
    let sub = dom.element(Some(branches[0].list), "li", &[]);
    let sub_h = dom.element(Some(sub), "h3", &[]);
    let sub_ul = dom.element(Some(sub), "ul", &[]);

    let summary = init_nav(&dom).unwrap();
    assert_eq!(summary.headers, 2);
    assert!(has(&dom, sub_ul, "invisible"));
    assert!(has(&dom, sub_h, "contracted"));
}

#[test]
fn test_h1_and_h6_are_not_section_headers() {
    let (dom, _, branches) = nav_tree(1, Some(0));
    let title = dom.element(Some(branches[0].item), "h1", &[]);
    let minor = dom.element(Some(branches[0].item), "h6", &[]);

    init_nav(&dom).unwrap();
    assert!(!has(&dom, title, "expanded"));
    assert!(!has(&dom, minor, "expanded"));
}

#[test]
fn test_controller_toggle_matches_click() {
    let (dom, _, branches) = nav_tree(2, Some(0));
    let controller = NavController::default();
    controller.init(&dom).unwrap();

    controller.toggle(&dom, &branches[1].header);
    assert!(!has(&dom, branches[1].list, "invisible"));
    dom.click(branches[1].header);
    assert!(has(&dom, branches[1].list, "invisible"));
}

#[test]
fn test_custom_class_names() {
    let dom = MemoryDom::new();
    let nav = dom.element(None, "nav", &[]);
    let ul = dom.element(Some(nav), "ul", &[]);
    let other = dom.element(Some(ul), "li", &[]);
    let other_h = dom.element(Some(other), "h2", &[]);
    let other_ul = dom.element(Some(other), "ul", &[]);
    dom.element(Some(ul), "li", &["current"]);

    let classes = NavClasses {
        active_page: "current".to_string(),
        expanded: "open".to_string(),
        contracted: "shut".to_string(),
        invisible: "hidden".to_string(),
    };
    NavController::new(classes).init(&dom).unwrap();

    assert!(has(&dom, other_h, "open"));
    assert!(has(&dom, other_h, "shut"));
    assert!(has(&dom, other_ul, "hidden"));
    assert!(!has(&dom, other_ul, "invisible"));
}
