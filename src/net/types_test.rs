use super::*;
use serde_json::json;

// =============================================================
// SaveChatRequest
// =============================================================

#[test]
fn save_chat_request_user_serializes_expected_body() {
    let body = serde_json::to_value(SaveChatRequest::user("Hello")).expect("request should serialize");
    assert_eq!(body, json!({ "content": "Hello", "is_user_message": true }));
}

// =============================================================
// SaveChatResponse::outcome
// =============================================================

fn response(value: serde_json::Value) -> SaveChatResponse {
    serde_json::from_value(value).expect("response should deserialize")
}

#[test]
fn success_with_answer_yields_answered() {
    let resp = response(json!({ "status": "success", "answer": "Hi!" }));
    assert_eq!(resp.outcome(), SaveOutcome::Answered("Hi!".to_owned()));
}

#[test]
fn success_without_answer_yields_saved() {
    let resp = response(json!({ "status": "success" }));
    assert_eq!(resp.outcome(), SaveOutcome::Saved);
}

#[test]
fn success_with_empty_or_null_answer_yields_saved() {
    assert_eq!(response(json!({ "status": "success", "answer": "" })).outcome(), SaveOutcome::Saved);
    assert_eq!(response(json!({ "status": "success", "answer": null })).outcome(), SaveOutcome::Saved);
}

#[test]
fn non_success_status_yields_rejected_with_message() {
    let resp = response(json!({ "status": "error", "message": "No data content found" }));
    assert_eq!(resp.outcome(), SaveOutcome::Rejected(Some("No data content found".to_owned())));
}

#[test]
fn non_success_status_ignores_answer() {
    let resp = response(json!({ "status": "pending", "answer": "Hi!" }));
    assert_eq!(resp.outcome(), SaveOutcome::Rejected(None));
}

#[test]
fn response_without_status_fails_to_deserialize() {
    let parsed = serde_json::from_value::<SaveChatResponse>(json!({ "answer": "Hi!" }));
    assert!(parsed.is_err());
}

// =============================================================
// UploadReply
// =============================================================

#[test]
fn upload_reply_accepts_only_2xx() {
    let reply = |status| UploadReply {
        status,
        body: json!({ "message": "ok" }),
    };
    assert!(reply(200).accepted());
    assert!(reply(201).accepted());
    assert!(!reply(199).accepted());
    assert!(!reply(413).accepted());
    assert!(!reply(500).accepted());
}
