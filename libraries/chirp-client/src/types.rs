//! Wire types for the bootstrap endpoints.

use chirp_core::Playlist;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// How long a bootstrap request may run before the player gives up
/// and falls back to the default playlist.
pub const DEFAULT_BOOTSTRAP_TIMEOUT: Duration = Duration::from_secs(10);

/// Backend connection settings.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL
    pub url: String,

    /// Per-request deadline
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a config with the default request timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: DEFAULT_BOOTSTRAP_TIMEOUT,
        }
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Request body for `POST /auth`.
#[derive(Debug, Clone, Serialize)]
pub struct AuthRequest {
    /// Signed init data handed to the page by the chat platform.
    #[serde(rename = "tgWebAppData")]
    pub init_data: String,
}

/// Response body for `POST /auth`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    /// Numeric account id the backend resolved from the init data.
    pub user_id: i64,
}

/// Request body for `POST /playlists`.
#[derive(Debug, Clone, Serialize)]
pub struct PlaylistsRequest {
    pub user_id: i64,
}

/// Response body for `POST /playlists`.
///
/// The field is optional on the wire; an absent or `null` list is
/// treated the same as an empty one.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaylistsResponse {
    #[serde(default)]
    pub playlists: Option<Vec<Playlist>>,
}

impl PlaylistsResponse {
    /// The playlist set, with absent and `null` collapsing to empty.
    pub fn into_playlists(self) -> Vec<Playlist> {
        self.playlists.unwrap_or_default()
    }
}

/// Result of a full bootstrap, always usable by the player.
///
/// On any failure `playlists` degrades to a single default empty
/// playlist and `error` carries a human-readable reason.
#[derive(Debug, Clone)]
pub struct BootstrapOutcome {
    /// Playlists to seed the queue with. Never empty.
    pub playlists: Vec<Playlist>,

    /// Resolved account id, `None` when authentication never completed.
    pub user_id: Option<i64>,

    /// Failure description for the error banner, `None` on success.
    pub error: Option<String>,
}

impl BootstrapOutcome {
    /// The degraded outcome used when the backend cannot be reached.
    pub fn fallback(error: impl Into<String>) -> Self {
        Self {
            playlists: vec![Playlist::default_empty()],
            user_id: None,
            error: Some(error.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auth_request_uses_platform_field_name() {
        let request = AuthRequest {
            init_data: "query_id=abc".to_string(),
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["tgWebAppData"], "query_id=abc");
    }

    #[test]
    fn playlists_response_tolerates_missing_field() {
        let response: PlaylistsResponse = serde_json::from_str("{}").unwrap();
        assert!(response.into_playlists().is_empty());

        let response: PlaylistsResponse = serde_json::from_str(r#"{"playlists":null}"#).unwrap();
        assert!(response.into_playlists().is_empty());
    }

    #[test]
    fn fallback_outcome_carries_default_playlist() {
        let outcome = BootstrapOutcome::fallback("no network");
        assert_eq!(outcome.playlists.len(), 1);
        assert_eq!(outcome.playlists[0].name, "Favorites");
        assert!(outcome.playlists[0].is_empty());
        assert!(outcome.user_id.is_none());
        assert_eq!(outcome.error.as_deref(), Some("no network"));
    }
}
