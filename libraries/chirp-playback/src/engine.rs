//! Platform-agnostic media engine trait
//!
//! Abstracts the host's native decode/render engine (an HTML `<audio>`
//! element in the browser build). The engine is a black box: the driver
//! only sets sources, starts/stops playback, and reads time, and it trusts
//! nothing it has not been told by the engine itself.

use crate::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Black-box media engine behind the playback driver.
///
/// Implementations use interior mutability; the driver shares one engine
/// across concurrent load tasks. `set_source` and `play` are the only
/// suspension points, mirroring the engine's asynchronous metadata and
/// start events.
#[async_trait]
pub trait MediaEngine: Send + Sync {
    /// Point the engine at a new media URI.
    ///
    /// Resolves once the engine reports media metadata is available
    /// (duration known, playback possible). Fails with
    /// [`crate::PlaybackError::MediaLoad`] if the engine cannot fetch or
    /// decode the file.
    async fn set_source(&self, uri: &str) -> Result<()>;

    /// Start or resume playback.
    ///
    /// May be refused by the host (autoplay policy); fails with
    /// [`crate::PlaybackError::PlaybackRejected`] in that case.
    async fn play(&self) -> Result<()>;

    /// Pause playback. Never fails.
    fn pause(&self);

    /// Toggle audibility without affecting playback.
    fn set_muted(&self, muted: bool);

    /// Jump to an absolute position.
    fn seek(&self, position: Duration);

    /// Total duration of the current source, if metadata is available.
    fn duration(&self) -> Option<Duration>;

    /// Current playback position.
    fn position(&self) -> Duration;
}
