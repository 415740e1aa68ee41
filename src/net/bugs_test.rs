use super::*;
use std::rc::Rc;

use crate::net::transport::Method;
use crate::net::types::Role;
use crate::test_helpers::{self, MockTransport, RecordingNavigator};
use crate::util::storage::MemoryStorage;

fn bugs_api() -> (BugsApi, MockTransport) {
    let storage = MemoryStorage::new();
    let session = test_helpers::session_over(&storage);
    session.set_session("tok".to_owned(), test_helpers::dummy_user(Role::Developer));
    let transport = MockTransport::new();
    let api = ApiClient::new(
        &test_helpers::config(),
        session,
        Rc::new(transport.clone()),
        Rc::new(RecordingNavigator::default()),
    );
    (BugsApi::new(api), transport)
}

// =============================================================
// BugQuery
// =============================================================

#[test]
fn default_query_uses_backend_defaults() {
    assert_eq!(
        BugQuery::default().to_path(),
        "/bugs?page=0&size=10&sortBy=createdDate&direction=desc"
    );
}

#[test]
fn custom_query_encodes_sort_field() {
    let query = BugQuery {
        page: 2,
        size: 25,
        sort_by: "priority desc".to_owned(),
        direction: SortDirection::Asc,
        status: None,
    };
    assert_eq!(query.to_path(), "/bugs?page=2&size=25&sortBy=priority%20desc&direction=asc");
}

#[test]
fn zero_page_size_is_clamped() {
    let query = BugQuery { size: 0, ..BugQuery::default() };
    assert!(query.to_path().contains("size=1&"));
}

#[test]
fn status_filter_replaces_pagination() {
    let query = BugQuery::default().with_status("IN_PROGRESS");
    assert_eq!(query.to_path(), "/bugs?status=IN_PROGRESS");
}

#[test]
fn all_and_blank_status_mean_no_filter() {
    assert_eq!(BugQuery::default().with_status("all").status_filter(), None);
    assert_eq!(BugQuery::default().with_status("ALL").status_filter(), None);
    assert_eq!(BugQuery::default().with_status("  ").status_filter(), None);
    assert!(BugQuery::default().with_status("all").to_path().contains("page=0"));
}

// =============================================================
// BugsApi
// =============================================================

#[tokio::test]
async fn list_bugs_returns_page() {
    let (bugs, transport) = bugs_api();
    transport.push_json(
        200,
        serde_json::json!({"content": [{"bugId": 1, "title": "A"}], "totalPages": 2, "totalElements": 11}),
    );
    let listing = bugs.list_bugs(&BugQuery::default()).await.unwrap();
    assert_eq!(listing.total_pages(), 2);
    assert_eq!(listing.bugs()[0].title, "A");

    let sent = transport.last_request();
    assert_eq!(sent.url, "http://api.test/bugs?page=0&size=10&sortBy=createdDate&direction=desc");
    assert_eq!(sent.header("Authorization"), Some("Bearer tok"));
}

#[tokio::test]
async fn list_bugs_with_status_returns_list() {
    let (bugs, transport) = bugs_api();
    transport.push_json(200, serde_json::json!([{"bugId": 3, "title": "C", "status": "FIXED"}]));
    let listing = bugs.list_bugs(&BugQuery::default().with_status("FIXED")).await.unwrap();
    assert!(matches!(listing, BugListing::List(_)));
    assert_eq!(listing.into_bugs()[0].bug_id, Some(3));
}

#[tokio::test]
async fn bugs_by_status_hits_status_endpoint() {
    let (bugs, transport) = bugs_api();
    transport.push_json(200, serde_json::json!([]));
    let list = bugs.bugs_by_status("AWAITING_TESTING").await.unwrap();
    assert!(list.is_empty());
    assert_eq!(transport.last_request().url, "http://api.test/bugs/status/AWAITING_TESTING");
}

#[tokio::test]
async fn get_bug_surfaces_backend_message() {
    let (bugs, transport) = bugs_api();
    transport.push_json(500, serde_json::json!({"message": "Bug not found"}));
    let err = bugs.get_bug(77).await.unwrap_err();
    assert_eq!(err.to_string(), "Bug not found");
    assert_eq!(transport.last_request().url, "http://api.test/bugs/77");
}

#[tokio::test]
async fn delete_bug_accepts_empty_body() {
    let (bugs, transport) = bugs_api();
    transport.push(204, None, "");
    bugs.delete_bug(5).await.unwrap();
    let sent = transport.last_request();
    assert_eq!(sent.method, Method::Delete);
    assert_eq!(sent.url, "http://api.test/bugs/5");
}

#[tokio::test]
async fn delete_attachment_encodes_filename_and_kind() {
    let (bugs, transport) = bugs_api();
    transport.push(204, None, "");
    bugs.delete_attachment(5, "screen shot.png", AttachmentKind::Image).await.unwrap();
    assert_eq!(
        transport.last_request().url,
        "http://api.test/bugs/5/attachments/screen%20shot.png?type=image"
    );
}
