//! Error types for the playback controller

use thiserror::Error;

/// Playback errors
///
/// All variants are recoverable: the controller degrades the presentation
/// (placeholder text, paused transport visual) instead of propagating any
/// of these to a top-level failure.
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The engine could not fetch or decode the track's media file
    #[error("media load failed: {0}")]
    MediaLoad(String),

    /// The engine refused to start playback (e.g. host autoplay policy)
    #[error("playback rejected by host: {0}")]
    PlaybackRejected(String),

    /// The active playlist has no tracks
    #[error("active playlist has no tracks")]
    EmptyPlaylist,

    /// Track index outside the active playlist
    #[error("track index out of bounds: {0}")]
    IndexOutOfBounds(usize),

    /// A newer track change superseded this load
    #[error("load superseded by a newer track change")]
    Stale,
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
