use super::*;

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_value(Role::User).unwrap(), serde_json::json!("user"));
    assert_eq!(serde_json::to_value(Role::Assistant).unwrap(), serde_json::json!("assistant"));
}

#[test]
fn message_wire_shape() {
    let msg = Message::user("hi there");
    let json = serde_json::to_value(&msg).unwrap();
    assert_eq!(json, serde_json::json!({ "role": "user", "content": "hi there" }));
}

#[test]
fn model_descriptor_ignores_extra_fields() {
    let json = r#"{"name":"llama3:8b","size":4661224676,"digest":"abc","details":{"family":"llama"}}"#;
    let model: ModelDescriptor = serde_json::from_str(json).unwrap();
    assert_eq!(model.name, "llama3:8b");
}

#[test]
fn api_response_error_display_includes_status() {
    let err = LlmError::ApiResponse { status: 404, body: "model not found".into() };
    assert_eq!(err.to_string(), "API response error: status 404");
}

#[test]
fn chat_reply_default_has_no_content() {
    assert_eq!(ChatReply::default().content, None);
}
