use super::*;
use crate::net::types::{Bug, BugPage};

fn bug(title: &str) -> Bug {
    serde_json::from_value(serde_json::json!({"title": title})).unwrap()
}

#[test]
fn page_summary_reports_total() {
    let listing = BugListing::Page(BugPage {
        content: vec![bug("a"), bug("b")],
        total_pages: 3,
        total_elements: 21,
        ..BugPage::default()
    });
    assert_eq!(listing_summary(&listing), "Showing 2 of 21 bugs");
}

#[test]
fn list_summary_counts_items() {
    assert_eq!(listing_summary(&BugListing::List(vec![bug("a")])), "1 bug");
    assert_eq!(listing_summary(&BugListing::List(Vec::new())), "0 bugs");
}

#[test]
fn status_labels_are_sentence_case() {
    assert_eq!(status_label("IN_PROGRESS"), "In progress");
    assert_eq!(status_label("OPEN"), "Open");
    assert_eq!(status_label(""), "");
}
