//! Chirp Player Core
//!
//! Shared domain types for Chirp Player, the in-chat mini-app music player.
//!
//! This crate defines the playlist/track model consumed by both the
//! playback controller (`chirp-playback`) and the bootstrap client
//! (`chirp-client`). Types here match the server wire format directly, so
//! they deserialize straight out of the `/playlists` response body.

#![forbid(unsafe_code)]

pub mod types;

pub use types::{Playlist, Track, DEFAULT_COVER};
