//! Chirp Player Bootstrap Client
//!
//! HTTP client for the two endpoints the player calls at startup:
//!
//! - **`POST /auth`**: exchanges the chat platform's signed init data
//!   for a numeric account id
//! - **`POST /playlists`**: fetches that account's playlists
//!
//! The combined [`BootstrapClient::bootstrap`] call is fail-closed:
//! whatever goes wrong (timeout, transport failure, bad status,
//! malformed body) the player still receives a usable
//! [`BootstrapOutcome`] seeded with the default empty playlist.
//!
//! # Example
//!
//! ```ignore
//! use chirp_client::{BootstrapClient, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = BootstrapClient::new(ClientConfig::new("https://player.example.com"))?;
//!     let outcome = client.bootstrap(&init_data).await;
//!     println!("Loaded {} playlists", outcome.playlists.len());
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

pub use client::BootstrapClient;
pub use error::{BootstrapError, Result};
pub use types::{
    AuthRequest, AuthResponse, BootstrapOutcome, ClientConfig, PlaylistsRequest,
    PlaylistsResponse, DEFAULT_BOOTSTRAP_TIMEOUT,
};
