//! Fetch client tests against a mock characters API.

mod common;

use common::mock_api::{MockApi, MockResponse};
use hogdex::api::{ApiClient, ApiError};
use hogdex::config::ApiConfig;

fn client_for(base_url: &str) -> ApiClient {
    ApiClient::new(&ApiConfig {
        base_url: base_url.to_string(),
        connect_timeout_seconds: 1,
        request_timeout_seconds: 2,
    })
}

#[tokio::test]
async fn test_fetch_parses_character_array() {
    let mock = MockApi::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"[
            {"actor": "Daniel Radcliffe", "image": "https://x/harry.jpg", "name": "Harry Potter"},
            {"actor": "Rupert Grint", "image": "https://x/ron.jpg", "name": "Ron Weasley"}
        ]"#,
    ))
    .await;

    let characters = client_for(&mock.base_url())
        .fetch_all_characters()
        .await
        .unwrap();

    assert_eq!(characters.len(), 2);
    assert_eq!(characters[0].name, "Harry Potter");
    assert_eq!(characters[0].actor, "Daniel Radcliffe");
    assert_eq!(characters[1].image, "https://x/ron.jpg");
}

#[tokio::test]
async fn test_fetch_ignores_extra_fields() {
    let mock = MockApi::start().await;
    mock.enqueue_response(MockResponse::json(
        r#"[
            {
                "actor": "Daniel Radcliffe",
                "image": "https://x/harry.jpg",
                "name": "Harry Potter",
                "house": "Gryffindor",
                "wand": {"wood": "holly", "core": "phoenix feather", "length": 11},
                "alive": true
            }
        ]"#,
    ))
    .await;

    let characters = client_for(&mock.base_url())
        .fetch_all_characters()
        .await
        .unwrap();

    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0].name, "Harry Potter");
}

#[tokio::test]
async fn test_fetch_empty_array_is_ok() {
    let mock = MockApi::start().await;
    mock.enqueue_response(MockResponse::json("[]")).await;

    let characters = client_for(&mock.base_url())
        .fetch_all_characters()
        .await
        .unwrap();
    assert!(characters.is_empty());
}

#[tokio::test]
async fn test_non_success_status_maps_to_unexpected_status() {
    let mock = MockApi::start().await;
    mock.enqueue_response(MockResponse::error(503, "maintenance")).await;

    let err = client_for(&mock.base_url())
        .fetch_all_characters()
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::UnexpectedStatus { status: 503 }));
}

#[tokio::test]
async fn test_malformed_json_maps_to_decode() {
    let mock = MockApi::start().await;
    mock.enqueue_response(MockResponse::json("not json at all")).await;

    let err = client_for(&mock.base_url())
        .fetch_all_characters()
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Decode { .. }));
}

#[tokio::test]
async fn test_connection_refused_maps_to_connection() {
    let base_url = format!("http://127.0.0.1:{}", common::free_port());

    let err = client_for(&base_url).fetch_all_characters().await.unwrap_err();

    assert!(matches!(err, ApiError::Connection { .. }));
}
