//! Chirp Player - Playback-Queue Controller
//!
//! Platform-agnostic playback management for the Chirp mini-app player.
//!
//! This crate provides:
//! - The queue controller (playlist position, wrap-around navigation)
//! - Repeat modes (Off, One, All) and destructive in-place shuffle
//! - A promise-style playback driver over a black-box media engine
//! - The transition presenter (timed exit/enter metadata swap)
//! - Seek/drag input mapping for the progress track
//! - Share payload construction with clipboard fallback
//!
//! # Architecture
//!
//! The controller owns the queue state and is the only component allowed
//! to move the queue position. The media engine is injected behind the
//! [`MediaEngine`] trait (an HTML `<audio>` element in the browser build,
//! a mock in tests); the host drains a [`PlayerEvent`] channel to patch
//! its UI. The visual transition and the media load of a track change run
//! as two independently cancelled tasks: the metadata swap fires after a
//! fixed delay either way, and a superseded load discards itself via a
//! generation tag, so the last load always wins.
//!
//! # Example
//!
//! ```rust,no_run
//! use chirp_core::{Playlist, Track};
//! use chirp_playback::{PlayerConfig, PlayerController};
//! use std::sync::Arc;
//!
//! # async fn run(engine: Arc<dyn chirp_playback::MediaEngine>) -> chirp_playback::Result<()> {
//! let playlists = vec![Playlist::new(
//!     "Favorites",
//!     vec![Track::new("Song", "Artist", "/media/song.mp3")],
//! )];
//!
//! let (mut player, mut events) = PlayerController::assemble(
//!     playlists,
//!     engine,
//!     PlayerConfig::default(),
//! );
//!
//! player.start().await?;
//! player.next_track().await?;
//! player.toggle_repeat();
//!
//! while let Some(event) = events.recv().await {
//!     // patch the UI
//!     let _ = event;
//! }
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]

mod controller;
mod driver;
mod engine;
mod error;
pub mod events;
mod presenter;
pub mod seek;
pub mod share;
mod shuffle;
pub mod types;

// Public exports
pub use controller::PlayerController;
pub use driver::PlaybackDriver;
pub use engine::MediaEngine;
pub use error::{PlaybackError, Result};
pub use events::{EventReceiver, EventSender, PlayerEvent};
pub use presenter::{DisplayModel, NodePhase, TransitionPresenter};
pub use seek::{fraction_at, DragTracker, TrackBounds};
pub use share::{share_track, ShareOutcome, SharePayload, ShareTarget};
pub use types::{
    Direction, PlaybackState, PlayerConfig, QueueState, RepeatIcon, RepeatMode, ShuffleIcon,
    TransportVisual,
};
