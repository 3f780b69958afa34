use super::*;

#[test]
fn build_messages_prepends_single_system_message() {
    let history = vec![Message::user("first"), Message::assistant("reply"), Message::user("second")];
    let msgs = build_messages("be brief", &history);

    assert_eq!(msgs.len(), 4);
    assert_eq!(msgs[0], WireMessage { role: Role::System, content: "be brief" });
    assert_eq!(msgs[1], WireMessage { role: Role::User, content: "first" });
    assert_eq!(msgs[2], WireMessage { role: Role::Assistant, content: "reply" });
    assert_eq!(msgs[3], WireMessage { role: Role::User, content: "second" });
}

#[test]
fn build_messages_with_empty_history_is_system_only() {
    let msgs = build_messages("prompt", &[]);
    assert_eq!(msgs, vec![WireMessage { role: Role::System, content: "prompt" }]);
}

#[test]
fn stream_request_serializes_upstream_shape() {
    let history = vec![Message::user("Explain osmosis")];
    let msgs = build_messages("sys", &history);
    let body = StreamRequest { model: "google/gemini-2.5-flash", messages: &msgs, stream: true };

    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        serde_json::json!({
            "model": "google/gemini-2.5-flash",
            "messages": [
                { "role": "system", "content": "sys" },
                { "role": "user", "content": "Explain osmosis" }
            ],
            "stream": true
        })
    );
}

#[test]
fn new_trims_trailing_slash() {
    let client = OpenAiClient::new("k".into(), "http://127.0.0.1:9/v1/".into(), Duration::from_secs(1)).unwrap();
    assert_eq!(client.base_url, "http://127.0.0.1:9/v1");
}
