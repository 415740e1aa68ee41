use super::*;
use crate::net::types::{Bug, Role};
use crate::test_helpers::{self, MockTransport, RecordingNavigator};
use crate::util::storage::{MemoryStorage, SessionStorage};

// =============================================================
// Helpers
// =============================================================

struct Harness {
    storage: MemoryStorage,
    session: SessionStore,
    transport: MockTransport,
    navigator: RecordingNavigator,
    api: ApiClient,
}

fn harness() -> Harness {
    let storage = MemoryStorage::new();
    let session = test_helpers::session_over(&storage);
    let transport = MockTransport::new();
    let navigator = RecordingNavigator::default();
    let api = ApiClient::new(
        &test_helpers::config(),
        session.clone(),
        Rc::new(transport.clone()),
        Rc::new(navigator.clone()),
    );
    Harness { storage, session, transport, navigator, api }
}

fn logged_in() -> Harness {
    let h = harness();
    h.session.set_session("tok-1".to_owned(), test_helpers::dummy_user(Role::User));
    h
}

fn response(status: u16, content_type: Option<&str>, body: &str) -> HttpResponse {
    HttpResponse { status, content_type: content_type.map(str::to_owned), body: body.to_owned() }
}

// =============================================================
// Request construction
// =============================================================

#[test]
fn anonymous_request_has_json_default_and_no_bearer() {
    let h = harness();
    let req = h.api.build_request("/bugs", RequestOptions::get());
    assert_eq!(req.url, "http://api.test/bugs");
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.header("content-type"), Some("application/json"));
    assert_eq!(req.header("Authorization"), None);
}

#[test]
fn authenticated_request_carries_bearer_token() {
    let h = logged_in();
    let req = h.api.build_request("/bugs/1", RequestOptions::delete());
    assert_eq!(req.method, Method::Delete);
    assert_eq!(req.header("Authorization"), Some("Bearer tok-1"));
}

#[test]
fn caller_headers_override_content_type_case_insensitively() {
    let h = harness();
    let options = RequestOptions::get().with_header("content-type", "text/plain").with_header("X-Trace", "1");
    let req = h.api.build_request("/bugs", options);
    assert_eq!(req.headers.len(), 2);
    assert_eq!(req.header("Content-Type"), Some("text/plain"));
    assert_eq!(req.header("x-trace"), Some("1"));
}

#[test]
fn session_token_wins_over_caller_authorization() {
    let h = logged_in();
    let options = RequestOptions::get().with_header("Authorization", "Bearer stale");
    let req = h.api.build_request("/bugs", options);
    assert_eq!(req.header("Authorization"), Some("Bearer tok-1"));
}

#[test]
fn missing_method_defaults_to_get() {
    let h = harness();
    let req = h.api.build_request("/bugs", RequestOptions::default());
    assert_eq!(req.method, Method::Get);
    assert_eq!(req.body, None);
}

// =============================================================
// Success decoding
// =============================================================

#[tokio::test]
async fn json_response_is_parsed() {
    let h = logged_in();
    h.transport.push_json(200, serde_json::json!({"bugId": 5, "title": "Crash"}));
    let body = h.api.request("/bugs/5", RequestOptions::get()).await.unwrap();
    assert_eq!(body, ResponseBody::Json(serde_json::json!({"bugId": 5, "title": "Crash"})));
}

#[tokio::test]
async fn non_json_response_is_returned_as_text() {
    let h = logged_in();
    h.transport.push(200, Some("text/plain; charset=utf-8"), "deleted");
    let body = h.api.request("/bugs/5", RequestOptions::delete()).await.unwrap();
    assert_eq!(body, ResponseBody::Text("deleted".to_owned()));
}

#[tokio::test]
async fn get_json_decodes_typed_body() {
    let h = logged_in();
    h.transport.push_json(200, serde_json::json!({"bugId": 9, "title": "Slow", "status": "OPEN"}));
    let bug: Bug = h.api.get_json("/bugs/9").await.unwrap();
    assert_eq!(bug.bug_id, Some(9));
    assert_eq!(bug.status.as_deref(), Some("OPEN"));
}

#[tokio::test]
async fn malformed_json_success_is_network_error() {
    let h = logged_in();
    h.transport.push(200, Some("application/json"), "{oops");
    let err = h.api.request("/bugs", RequestOptions::get()).await.unwrap_err();
    assert_eq!(err, ApiError::Network);
}

#[tokio::test]
async fn unauthorized_clears_session_and_redirects() {
    let h = logged_in();
    h.transport.push_json(401, serde_json::json!({"message": "expired"}));

    let err = h.api.request("/bugs", RequestOptions::get()).await.unwrap_err();
    assert_eq!(err, ApiError::Unauthorized);
    assert_eq!(err.to_string(), "Authentication failed");
    assert_eq!(h.navigator.redirects(), 1);
    assert!(!h.session.is_authenticated());
    assert!(h.storage.get_item("token").is_none());
    assert!(h.storage.get_item("userData").is_none());
}

#[tokio::test]
async fn calls_after_unauthorized_carry_no_bearer() {
    let h = logged_in();
    h.transport.push(401, None, "");
    h.transport.push_json(200, serde_json::json!([]));

    let _ = h.api.request("/bugs", RequestOptions::get()).await;
    h.api.request("/bugs", RequestOptions::get()).await.unwrap();

    let requests = h.transport.requests();
    assert_eq!(requests[0].header("Authorization"), Some("Bearer tok-1"));
    assert_eq!(requests[1].header("Authorization"), None);
}

#[tokio::test]
async fn server_error_message_is_surfaced_verbatim() {
    let h = logged_in();
    h.transport.push_json(500, serde_json::json!({"message": "Bug not found"}));
    let err = h.api.request("/bugs/404", RequestOptions::get()).await.unwrap_err();
    assert_eq!(err.to_string(), "Bug not found");
    assert_eq!(err.status(), Some(500));
    assert_eq!(h.navigator.redirects(), 0);
    assert!(h.session.is_authenticated());
}

#[tokio::test]
async fn transport_failure_is_network_error() {
    let h = logged_in();
    h.transport.push_failure();
    let err = h.api.request("/bugs", RequestOptions::get()).await.unwrap_err();
    assert_eq!(err, ApiError::Network);
    assert_eq!(err.to_string(), "Network error");
    assert!(h.session.is_authenticated());
}

// =============================================================
// error_message
// =============================================================

#[test]
fn error_message_reads_json_message_without_content_type() {
    let resp = response(400, None, r#"{"message":"Title is required"}"#);
    assert_eq!(error_message(&resp), "Title is required");
}

#[test]
fn error_message_ignores_empty_json_message() {
    let resp = response(422, Some("application/json"), r#"{"message":""}"#);
    assert_eq!(error_message(&resp), "HTTP error! status: 422");
}

#[test]
fn error_message_prefers_html_title() {
    let resp = response(502, Some("text/html"), "<html><TITLE> Bad Gateway </TITLE><h1>Oops</h1></html>");
    assert_eq!(error_message(&resp), "Bad Gateway");
}

#[test]
fn error_message_falls_back_to_h1() {
    let resp = response(503, Some("text/html"), "<body><h1>Service Unavailable</h1></body>");
    assert_eq!(error_message(&resp), "Service Unavailable");
}

#[test]
fn error_message_falls_back_to_status_line() {
    let resp = response(500, Some("text/plain"), "boom");
    assert_eq!(error_message(&resp), "HTTP error! status: 500");
    let empty = response(404, None, "");
    assert_eq!(error_message(&empty), "HTTP error! status: 404");
}

#[test]
fn error_message_json_without_message_uses_status_line() {
    let resp = response(409, Some("application/json"), r#"{"error":"conflict"}"#);
    assert_eq!(error_message(&resp), "HTTP error! status: 409");
}
