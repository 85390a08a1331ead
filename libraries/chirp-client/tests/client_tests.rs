//! Tests for the bootstrap client against a mock backend.

use chirp_client::{BootstrapClient, BootstrapError, ClientConfig};
use std::time::Duration;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mock_auth(server: &MockServer, user_id: i64) {
    Mock::given(method("POST"))
        .and(path("/auth"))
        .and(body_json(serde_json::json!({"tgWebAppData": "init=data"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"user_id": user_id})),
        )
        .mount(server)
        .await;
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn auth_resolves_user_id() {
    let server = MockServer::start().await;
    mock_auth(&server, 42).await;

    let client = BootstrapClient::new(ClientConfig::new(server.uri())).unwrap();
    let auth = client.authenticate("init=data").await.unwrap();
    assert_eq!(auth.user_id, 42);
}

#[tokio::test]
async fn auth_rejection_maps_to_auth_failed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(401).set_body_string("bad signature"))
        .mount(&server)
        .await;

    let client = BootstrapClient::new(ClientConfig::new(server.uri())).unwrap();
    let result = client.authenticate("tampered").await;

    match result.unwrap_err() {
        BootstrapError::AuthFailed(_) => {}
        e => panic!("Expected AuthFailed, got: {:?}", e),
    }
}

#[tokio::test]
async fn auth_malformed_body_maps_to_parse_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = BootstrapClient::new(ClientConfig::new(server.uri())).unwrap();
    let result = client.authenticate("init=data").await;

    match result.unwrap_err() {
        BootstrapError::ParseError(_) => {}
        e => panic!("Expected ParseError, got: {:?}", e),
    }
}

// =============================================================================
// Playlists
// =============================================================================

#[tokio::test]
async fn fetch_playlists_parses_tracks() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/playlists"))
        .and(body_json(serde_json::json!({"user_id": 42})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "playlists": [
                {
                    "name": "Road Trip",
                    "tracks": [
                        {"title": "A", "artist": "X", "cover": "/c/a.png", "file": "/m/a.mp3"},
                        {"title": "B", "artist": "Y", "file": "/m/b.mp3"}
                    ]
                }
            ]
        })))
        .mount(&server)
        .await;

    let client = BootstrapClient::new(ClientConfig::new(server.uri())).unwrap();
    let playlists = client.fetch_playlists(42).await.unwrap();

    assert_eq!(playlists.len(), 1);
    assert_eq!(playlists[0].name, "Road Trip");
    assert_eq!(playlists[0].len(), 2);
    assert!(playlists[0].tracks[1].cover.is_none());
}

#[tokio::test]
async fn fetch_playlists_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/playlists"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = BootstrapClient::new(ClientConfig::new(server.uri())).unwrap();
    let result = client.fetch_playlists(42).await;

    match result.unwrap_err() {
        BootstrapError::ServerError { status, message } => {
            assert_eq!(status, 500);
            assert!(message.contains("boom"));
        }
        e => panic!("Expected ServerError, got: {:?}", e),
    }
}

// =============================================================================
// Full Bootstrap
// =============================================================================

#[tokio::test]
async fn bootstrap_success_path() {
    let server = MockServer::start().await;
    mock_auth(&server, 7).await;
    Mock::given(method("POST"))
        .and(path("/playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "playlists": [
                {"name": "Mix", "tracks": [
                    {"title": "Song", "artist": "Artist", "file": "/m/song.mp3"}
                ]}
            ]
        })))
        .mount(&server)
        .await;

    let client = BootstrapClient::new(ClientConfig::new(server.uri())).unwrap();
    let outcome = client.bootstrap("init=data").await;

    assert!(outcome.error.is_none());
    assert_eq!(outcome.user_id, Some(7));
    assert_eq!(outcome.playlists.len(), 1);
    assert_eq!(outcome.playlists[0].name, "Mix");
}

#[tokio::test]
async fn bootstrap_empty_backend_seeds_default_playlist() {
    let server = MockServer::start().await;
    mock_auth(&server, 7).await;
    Mock::given(method("POST"))
        .and(path("/playlists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
        .mount(&server)
        .await;

    let client = BootstrapClient::new(ClientConfig::new(server.uri())).unwrap();
    let outcome = client.bootstrap("init=data").await;

    // Still a success, just with nothing to play
    assert!(outcome.error.is_none());
    assert_eq!(outcome.playlists.len(), 1);
    assert_eq!(outcome.playlists[0].name, "Favorites");
    assert!(outcome.playlists[0].is_empty());
}

#[tokio::test]
async fn bootstrap_degrades_on_server_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(ResponseTemplate::new(500).set_body_string("down"))
        .mount(&server)
        .await;

    let client = BootstrapClient::new(ClientConfig::new(server.uri())).unwrap();
    let outcome = client.bootstrap("init=data").await;

    assert!(outcome.error.is_some());
    assert!(outcome.user_id.is_none());
    assert_eq!(outcome.playlists.len(), 1);
    assert_eq!(outcome.playlists[0].name, "Favorites");
}

#[tokio::test]
async fn bootstrap_degrades_on_unreachable_server() {
    let client = BootstrapClient::new(ClientConfig::new("http://127.0.0.1:1")).unwrap();
    let outcome = client.bootstrap("init=data").await;

    assert!(outcome.error.is_some());
    assert_eq!(outcome.playlists.len(), 1);
    assert!(outcome.playlists[0].is_empty());
}

// =============================================================================
// Timeout
// =============================================================================

#[tokio::test]
async fn stalled_server_times_out_and_degrades() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/auth"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"user_id": 1}))
                .set_delay(Duration::from_secs(5)),
        )
        .mount(&server)
        .await;

    let config = ClientConfig::new(server.uri()).with_timeout(Duration::from_millis(100));
    let client = BootstrapClient::new(config).unwrap();

    let result = client.authenticate("init=data").await;
    match result.unwrap_err() {
        BootstrapError::Timeout => {}
        e => panic!("Expected Timeout, got: {:?}", e),
    }

    let outcome = client.bootstrap("init=data").await;
    assert!(outcome.error.is_some());
    assert_eq!(outcome.playlists[0].name, "Favorites");
}
