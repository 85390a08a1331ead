//! Bootstrap client for the Chirp Player backend.

use crate::error::{BootstrapError, Result};
use crate::types::{
    AuthRequest, AuthResponse, BootstrapOutcome, ClientConfig, PlaylistsRequest, PlaylistsResponse,
};
use chirp_core::Playlist;
use reqwest::Client;
use tracing::{debug, info, warn};

/// Client for the two bootstrap endpoints: `/auth` resolves the chat
/// platform's init data to an account id, `/playlists` fetches that
/// account's playlists.
///
/// # Example
///
/// ```ignore
/// use chirp_client::{BootstrapClient, ClientConfig};
///
/// let client = BootstrapClient::new(ClientConfig::new("https://player.example.com"))?;
/// let outcome = client.bootstrap(&init_data).await;
/// // outcome.playlists is never empty; on failure it holds the
/// // default playlist and outcome.error describes what went wrong.
/// ```
pub struct BootstrapClient {
    http: Client,
    base_url: String,
}

impl BootstrapClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let parsed = url::Url::parse(&config.url)
            .map_err(|e| BootstrapError::InvalidUrl(e.to_string()))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(BootstrapError::InvalidUrl(
                "URL must use http:// or https://".into(),
            ));
        }

        let base_url = config.url.trim_end_matches('/').to_string();

        // The timeout bounds the whole request. A server that stalls
        // past it surfaces as Timeout and the caller falls back.
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(format!("ChirpPlayer/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(BootstrapError::Request)?;

        Ok(Self { http, base_url })
    }

    /// The normalized backend URL.
    pub fn url(&self) -> &str {
        &self.base_url
    }

    /// Resolve init data to an account id via `POST /auth`.
    pub async fn authenticate(&self, init_data: &str) -> Result<AuthResponse> {
        let url = format!("{}/auth", self.base_url);
        debug!(url = %url, "Authenticating init data");

        let request = AuthRequest {
            init_data: init_data.to_string(),
        };

        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();

        if status.is_success() {
            let auth: AuthResponse = response.json().await.map_err(|e| {
                BootstrapError::ParseError(format!("Failed to parse auth response: {}", e))
            })?;

            debug!(user_id = auth.user_id, "Authenticated");
            Ok(auth)
        } else if status.as_u16() == 401 || status.as_u16() == 403 {
            let error_text = response.text().await.unwrap_or_default();
            warn!(status = %status, error = %error_text, "Init data rejected");
            Err(BootstrapError::AuthFailed(
                "Init data rejected by the backend".to_string(),
            ))
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(BootstrapError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Fetch the account's playlists via `POST /playlists`.
    pub async fn fetch_playlists(&self, user_id: i64) -> Result<Vec<Playlist>> {
        let url = format!("{}/playlists", self.base_url);
        debug!(url = %url, user_id, "Fetching playlists");

        let response = self
            .http
            .post(&url)
            .json(&PlaylistsRequest { user_id })
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();

        if status.is_success() {
            let body: PlaylistsResponse = response.json().await.map_err(|e| {
                BootstrapError::ParseError(format!("Failed to parse playlists response: {}", e))
            })?;

            let playlists = body.into_playlists();
            info!(count = playlists.len(), "Playlists loaded");
            Ok(playlists)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(BootstrapError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Run the full bootstrap sequence: authenticate, then fetch
    /// playlists.
    ///
    /// This never fails. Any error, including the request deadline
    /// elapsing, degrades to the default playlist with the reason
    /// recorded in [`BootstrapOutcome::error`], so the player always
    /// has a queue to stand on.
    pub async fn bootstrap(&self, init_data: &str) -> BootstrapOutcome {
        match self.load_playlists(init_data).await {
            Ok((user_id, playlists)) => {
                let playlists = if playlists.is_empty() {
                    debug!("Backend returned no playlists, seeding the default");
                    vec![Playlist::default_empty()]
                } else {
                    playlists
                };
                BootstrapOutcome {
                    playlists,
                    user_id: Some(user_id),
                    error: None,
                }
            }
            Err(e) => {
                warn!(error = %e, "Bootstrap failed, falling back to the default playlist");
                BootstrapOutcome::fallback(e.to_string())
            }
        }
    }

    async fn load_playlists(&self, init_data: &str) -> Result<(i64, Vec<Playlist>)> {
        let auth = self.authenticate(init_data).await?;
        let playlists = self.fetch_playlists(auth.user_id).await?;
        Ok((auth.user_id, playlists))
    }
}

fn map_transport_error(e: reqwest::Error) -> BootstrapError {
    if e.is_timeout() {
        BootstrapError::Timeout
    } else if e.is_connect() {
        BootstrapError::ServerUnreachable(e.to_string())
    } else {
        BootstrapError::Request(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_validation() {
        assert!(BootstrapClient::new(ClientConfig::new("https://example.com")).is_ok());
        assert!(BootstrapClient::new(ClientConfig::new("http://localhost:8080")).is_ok());

        assert!(BootstrapClient::new(ClientConfig::new("")).is_err());
        assert!(BootstrapClient::new(ClientConfig::new("example.com")).is_err());
        assert!(BootstrapClient::new(ClientConfig::new("ftp://example.com")).is_err());
    }

    #[test]
    fn url_normalization_strips_trailing_slashes() {
        let client =
            BootstrapClient::new(ClientConfig::new("https://example.com///")).unwrap();
        assert_eq!(client.url(), "https://example.com");
    }
}
