use super::*;
use std::rc::Rc;

use crate::net::request::ApiClient;
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

fn ids(bugs: &[Bug]) -> Vec<i64> {
    bugs.iter().filter_map(|b| b.bug_id).collect()
}

#[tokio::test]
async fn developer_sections_come_from_status_endpoints() {
    let (bugs, transport) = bugs_api();
    transport.push_json(200, serde_json::json!([{"bugId": 1, "status": "ASSIGNED"}]));
    transport.push_json(200, serde_json::json!([{"bugId": 3, "status": "IN_PROGRESS"}]));
    transport.push_json(200, serde_json::json!([{"bugId": 2, "status": "FIXED"}]));

    let [open, done] = load_sections(&bugs, DashboardKind::Developer).await.unwrap();
    assert_eq!(ids(&open), vec![1, 3]);
    assert_eq!(ids(&done), vec![2]);

    let urls: Vec<String> = transport.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(
        urls,
        vec![
            "http://api.test/bugs/status/ASSIGNED",
            "http://api.test/bugs/status/IN_PROGRESS",
            "http://api.test/bugs/status/FIXED",
        ]
    );
}

#[tokio::test]
async fn tester_sections_cover_pending_and_results() {
    let (bugs, transport) = bugs_api();
    transport.push_json(200, serde_json::json!([{"bugId": 2}]));
    transport.push_json(200, serde_json::json!([]));
    transport.push_json(200, serde_json::json!([{"bugId": 1}]));
    transport.push_json(200, serde_json::json!([{"bugId": 3}]));

    let [open, done] = load_sections(&bugs, DashboardKind::Tester).await.unwrap();
    assert_eq!(ids(&open), vec![2]);
    assert_eq!(ids(&done), vec![1, 3]);
    assert_eq!(transport.last_request().url, "http://api.test/bugs/status/FAILED");
}

#[tokio::test]
async fn failed_status_request_fails_dashboard() {
    let (bugs, transport) = bugs_api();
    transport.push_json(200, serde_json::json!([]));
    transport.push_json(500, serde_json::json!({"message": "boom"}));

    let err = load_sections(&bugs, DashboardKind::Developer).await.unwrap_err();
    assert_eq!(err.to_string(), "boom");
    assert_eq!(transport.requests().len(), 2);
}
