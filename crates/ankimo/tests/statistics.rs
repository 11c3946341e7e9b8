//! Tests for statistics and miscellaneous AnkiConnect actions.

mod common;

use ankimo::TodayStats;
use common::{client_for_mock, mock_action, mock_anki_response, setup_mock_server};

#[tokio::test]
async fn test_today_stats() {
    let server = setup_mock_server().await;
    mock_action(
        &server,
        "todayStats",
        mock_anki_response(serde_json::json!({"cards": 250, "time": 1830})),
    )
    .await;

    let client = client_for_mock(&server);
    let stats = client.statistics().today().await.unwrap();

    assert_eq!(stats, TodayStats { cards: 250, time: 1830 });
    assert_eq!(stats.minutes(), 30);
}

#[tokio::test]
async fn test_sync() {
    let server = setup_mock_server().await;
    mock_action(&server, "sync", mock_anki_response(serde_json::Value::Null)).await;

    let client = client_for_mock(&server);
    client.misc().sync().await.unwrap();
}

#[tokio::test]
async fn test_version() {
    let server = setup_mock_server().await;
    mock_action(&server, "version", mock_anki_response(6)).await;

    let client = client_for_mock(&server);
    assert_eq!(client.misc().version().await.unwrap(), 6);
}
