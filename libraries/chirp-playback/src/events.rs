//! Player events
//!
//! Event-based communication toward the host UI. Every observable change
//! (display swap, transport visual, progress tick, mode toggles) is pushed
//! through an unbounded channel; the host drains it and patches the DOM or
//! widget tree. Senders never block and a closed receiver is ignored, so
//! event emission can never stall playback.

use crate::presenter::DisplayModel;
use crate::types::{PlaybackState, RepeatMode, TransportVisual};
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

/// Events emitted by the player
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum PlayerEvent {
    /// Displayed metadata or transition phase changed
    DisplayChanged {
        /// Snapshot of the display model
        display: DisplayModel,
    },

    /// The transport affordance changed visual
    TransportChanged {
        /// New visual for the play/pause control
        visual: TransportVisual,
    },

    /// Confirmed playback state changed
    StateChanged {
        /// The new state
        state: PlaybackState,
    },

    /// Queue position moved to a new track
    TrackChanged {
        /// Index of the new track in the active playlist
        index: usize,
    },

    /// Progress indicator update (per engine time tick)
    ProgressChanged {
        /// Progress in percent, 0.0 when duration is unknown
        percent: f32,
    },

    /// Shuffle toggled
    ShuffleChanged {
        /// Whether shuffle is now on
        enabled: bool,
    },

    /// Repeat mode advanced
    RepeatChanged {
        /// The new mode
        mode: RepeatMode,
    },

    /// Mute toggled
    MuteChanged {
        /// Whether audio is now muted
        muted: bool,
    },

    /// A recoverable error surfaced to the user
    Error {
        /// Human-readable message
        message: String,
    },
}

/// Sending half of the player event channel.
pub type EventSender = mpsc::UnboundedSender<PlayerEvent>;

/// Receiving half of the player event channel.
pub type EventReceiver = mpsc::UnboundedReceiver<PlayerEvent>;

/// Create the player event channel.
pub fn channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}

/// Send an event, ignoring a closed receiver.
pub(crate) fn emit(tx: &EventSender, event: PlayerEvent) {
    let _ = tx.send(event);
}
