//! Sharing - outbound-only side effect
//!
//! Builds a share payload for the current track and hands it to the host:
//! the platform's native share sheet when one exists, otherwise a
//! formatted string copied to the clipboard. A failure is logged and
//! swallowed; nothing feeds back into the controller.

use async_trait::async_trait;
use chirp_core::Track;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Payload handed to the host share capability.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    /// Track title
    pub title: String,

    /// Human-readable share line
    pub text: String,

    /// Link back to the player
    pub url: String,
}

impl SharePayload {
    /// Build the payload for a track.
    pub fn for_track(track: &Track, share_url: &str) -> Self {
        Self {
            title: track.title.clone(),
            text: format!("Listening to \"{}\" by {}", track.title, track.artist),
            url: share_url.to_string(),
        }
    }

    /// Fallback string for the clipboard path.
    pub fn clipboard_text(&self) -> String {
        format!("{} - {}", self.text, self.url)
    }
}

/// How a share attempt was delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Delivered through the host's native share sheet
    Native,

    /// Copied to the clipboard
    Copied,

    /// Both paths failed; logged, no user-facing error
    Failed,
}

/// Host share capability.
#[async_trait]
pub trait ShareTarget: Send + Sync {
    /// Whether the host exposes a native share sheet.
    fn has_native_share(&self) -> bool;

    /// Open the native share sheet with the payload.
    async fn native_share(&self, payload: &SharePayload) -> std::result::Result<(), String>;

    /// Copy text to the host clipboard.
    async fn copy_to_clipboard(&self, text: &str) -> std::result::Result<(), String>;
}

/// Share a track through the host, preferring the native sheet.
pub async fn share_track(target: &dyn ShareTarget, payload: &SharePayload) -> ShareOutcome {
    if target.has_native_share() {
        match target.native_share(payload).await {
            Ok(()) => return ShareOutcome::Native,
            Err(e) => {
                warn!(error = %e, "native share failed");
                return ShareOutcome::Failed;
            }
        }
    }

    match target.copy_to_clipboard(&payload.clipboard_text()).await {
        Ok(()) => ShareOutcome::Copied,
        Err(e) => {
            warn!(error = %e, "clipboard copy failed");
            ShareOutcome::Failed
        }
    }
}
