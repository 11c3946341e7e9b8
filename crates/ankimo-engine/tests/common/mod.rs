//! Common test utilities for ankimo-engine workflow tests.

use ankimo_engine::Engine;
use serde::Serialize;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate, Times};

/// Start a new mock server for testing.
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Create an Engine connected to the mock server.
pub fn engine_for_mock(server: &MockServer) -> Engine {
    let client = ankimo_engine::ClientBuilder::new()
        .url(server.uri())
        .build()
        .unwrap();
    Engine::from_client(client)
}

/// Create a successful AnkiConnect response.
pub fn mock_anki_response<T: Serialize>(result: T) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "result": result,
        "error": null
    }))
}

/// Create an error AnkiConnect response.
#[allow(dead_code)]
pub fn mock_anki_error(error: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(serde_json::json!({
        "result": null,
        "error": error
    }))
}

/// Mount a mock for a specific action (expect exactly 1 call).
#[allow(dead_code)]
pub async fn mock_action(server: &MockServer, action: &str, response: ResponseTemplate) {
    mock_action_times(server, action, response, 1).await;
}

/// Mount a mock for a specific action with expected call count.
#[allow(dead_code)]
pub async fn mock_action_times(
    server: &MockServer,
    action: &str,
    response: ResponseTemplate,
    times: u64,
) {
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "action": action,
            "version": 6
        })))
        .respond_with(response)
        .expect(Times::from(times))
        .mount(server)
        .await;
}

/// Mount a mock for one note's `updateNoteFields` call with the exact
/// front and back it must carry.
#[allow(dead_code)]
pub async fn mock_update(
    server: &MockServer,
    note_id: i64,
    front: &str,
    back: &str,
    response: ResponseTemplate,
) {
    Mock::given(method("POST"))
        .and(body_partial_json(serde_json::json!({
            "action": "updateNoteFields",
            "version": 6,
            "params": {
                "note": {
                    "id": note_id,
                    "fields": {"Front": front, "Back": back}
                }
            }
        })))
        .respond_with(response)
        .expect(1)
        .with_priority(1)
        .mount(server)
        .await;
}

/// A `cardsInfo` entry for a Basic card.
#[allow(dead_code)]
pub fn card_json(card_id: i64, note_id: i64, front: &str, back: &str) -> serde_json::Value {
    serde_json::json!({
        "cardId": card_id,
        "note": note_id,
        "deckName": "English",
        "modelName": "Basic",
        "question": front,
        "answer": back,
        "fieldOrder": 0,
        "css": ".card { font-family: arial; }",
        "interval": 3,
        "fields": {
            "Front": {"value": front, "order": 0},
            "Back": {"value": back, "order": 1}
        }
    })
}
