//! Playback driver - thin async façade over the media engine
//!
//! Isolates the controller from engine quirks: metadata latency, autoplay
//! rejection, unknown durations. The driver also owns the confirmed
//! [`PlaybackState`]; every state change is backed by an actual engine
//! outcome, so the transport affordance can never contradict what the
//! engine is doing.

use crate::engine::MediaEngine;
use crate::error::{PlaybackError, Result};
use crate::events::{emit, EventSender, PlayerEvent};
use crate::types::{PlaybackState, TransportVisual};
use chirp_core::Track;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tracing::{debug, warn};

/// Promise-style façade over the black-box media engine.
pub struct PlaybackDriver {
    engine: Arc<dyn MediaEngine>,
    muted: AtomicBool,
    state: Mutex<PlaybackState>,
    events: EventSender,
}

impl PlaybackDriver {
    /// Wrap an engine. Initial state is paused with nothing loaded.
    pub fn new(engine: Arc<dyn MediaEngine>, events: EventSender) -> Self {
        Self {
            engine,
            muted: AtomicBool::new(false),
            state: Mutex::new(PlaybackState::Paused),
            events,
        }
    }

    /// Load a track: stop current audio, point the engine at the new file,
    /// apply the current mute setting, and suspend until the engine reports
    /// media metadata.
    ///
    /// Errors propagate to the caller, which owns the UI recovery; the
    /// confirmed state is left untouched on failure so a stale load cannot
    /// corrupt it.
    pub async fn load(&self, track: &Track) -> Result<()> {
        self.set_state(PlaybackState::Loading);
        self.engine.pause();
        self.engine.set_muted(self.muted.load(Ordering::Relaxed));

        debug!(file = %track.file, "loading track");
        self.engine.set_source(&track.file).await
    }

    /// Start or resume playback.
    ///
    /// A host rejection (autoplay policy) is converted into the paused
    /// visual and logged; it is never left as an unhandled failure.
    pub async fn play(&self) -> Result<()> {
        match self.engine.play().await {
            Ok(()) => {
                self.set_state(PlaybackState::Playing);
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "engine refused to start, reverting to paused");
                self.set_state(PlaybackState::Paused);
                Err(PlaybackError::PlaybackRejected(e.to_string()))
            }
        }
    }

    /// Pause playback.
    pub fn pause(&self) {
        self.engine.pause();
        self.set_state(PlaybackState::Paused);
    }

    /// Rewind to time zero without changing play/pause state.
    pub fn restart(&self) {
        self.engine.seek(Duration::ZERO);
    }

    /// Seek to a normalized position in [0, 1].
    ///
    /// Out-of-range fractions are clamped. An unknown duration is treated
    /// as zero, producing a harmless seek-to-zero.
    pub fn seek_to_fraction(&self, fraction: f64) {
        let fraction = fraction.clamp(0.0, 1.0);
        let duration = self.engine.duration().unwrap_or(Duration::ZERO);
        self.engine.seek(duration.mul_f64(fraction));
    }

    /// Toggle audibility without pausing. Returns the new mute state.
    pub fn toggle_muted(&self) -> bool {
        let muted = !self.muted.load(Ordering::Relaxed);
        self.set_muted(muted);
        muted
    }

    /// Set audibility without pausing.
    pub fn set_muted(&self, muted: bool) {
        self.muted.store(muted, Ordering::Relaxed);
        self.engine.set_muted(muted);
        emit(&self.events, PlayerEvent::MuteChanged { muted });
    }

    /// Whether audio is muted.
    pub fn is_muted(&self) -> bool {
        self.muted.load(Ordering::Relaxed)
    }

    /// Progress through the current track in percent.
    ///
    /// Unknown or zero duration yields 0.0 rather than NaN, so the
    /// indicator degenerates to zero width instead of breaking the layout.
    pub fn progress_percent(&self) -> f32 {
        let duration = self.engine.duration().unwrap_or(Duration::ZERO);
        if duration.is_zero() {
            return 0.0;
        }
        let percent = self.engine.position().as_secs_f64() / duration.as_secs_f64() * 100.0;
        percent.clamp(0.0, 100.0) as f32
    }

    /// Progress indicator width, e.g. `"42.5%"`.
    pub fn progress_width(&self) -> String {
        format!("{:.1}%", self.progress_percent())
    }

    /// Report the current progress to the UI. Called on every engine
    /// time-update tick.
    pub fn report_progress(&self) {
        emit(
            &self.events,
            PlayerEvent::ProgressChanged {
                percent: self.progress_percent(),
            },
        );
    }

    /// Record that the engine reported the track finished.
    pub fn mark_ended(&self) {
        self.set_state(PlaybackState::Ended);
    }

    /// Force the paused visual after a failed load.
    pub(crate) fn force_paused(&self) {
        self.set_state(PlaybackState::Paused);
    }

    /// Confirmed playback state.
    pub fn state(&self) -> PlaybackState {
        *self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Current transport affordance visual, derived from confirmed state.
    pub fn transport_visual(&self) -> TransportVisual {
        TransportVisual::from(self.state())
    }

    fn set_state(&self, state: PlaybackState) {
        let changed = {
            let mut guard = self.state.lock().unwrap_or_else(|e| e.into_inner());
            let changed = *guard != state;
            *guard = state;
            changed
        };
        if changed {
            emit(&self.events, PlayerEvent::StateChanged { state });
            emit(
                &self.events,
                PlayerEvent::TransportChanged {
                    visual: TransportVisual::from(state),
                },
            );
        }
    }
}
