//! Transition presenter - visual metadata swap
//!
//! Decouples the displayed title/artist/cover from the asynchronous media
//! load so the UI never looks frozen while a track buffers. Per track
//! change the machine runs `active -> exiting (direction-tagged) ->
//! [fixed delay] -> entering -> active`; the delay is scheduled by the
//! controller's swap task and fires regardless of media-load outcome.
//! Empty-playlist and bootstrap-error states short-circuit straight to a
//! terminal active presentation with placeholder text.

use crate::events::{emit, EventSender, PlayerEvent};
use crate::types::{Direction, PlayerConfig};
use chirp_core::Track;
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// Presentation state carried by each displayed node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodePhase {
    /// Settled, fully visible
    Active,

    /// Text node animating out
    Exit,

    /// Cover animating out toward the next-track variant
    ExitNext,

    /// Cover animating out toward the previous-track variant
    ExitPrev,
}

impl NodePhase {
    /// CSS class applied to the node.
    pub fn css_class(self) -> &'static str {
        match self {
            NodePhase::Active => "active",
            NodePhase::Exit => "exit",
            NodePhase::ExitNext => "exit-next",
            NodePhase::ExitPrev => "exit-prev",
        }
    }
}

/// Snapshot of the displayed metadata and per-node phases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayModel {
    /// Displayed track title
    pub title: String,

    /// Displayed artist name
    pub artist: String,

    /// Displayed cover URI
    pub cover: String,

    /// Phase of the title and artist text nodes
    pub text_phase: NodePhase,

    /// Phase of the cover node (direction-tagged while exiting)
    pub cover_phase: NodePhase,
}

/// Renders exit/enter states keyed to the controller's timing.
///
/// Shared behind an `Arc` with the controller's swap task; all mutation
/// goes through the internal lock and every change is pushed to the host
/// as a [`PlayerEvent::DisplayChanged`].
pub struct TransitionPresenter {
    display: Mutex<DisplayModel>,
    config: Arc<PlayerConfig>,
    events: EventSender,
}

impl TransitionPresenter {
    /// Create a presenter showing the empty placeholder.
    pub fn new(config: Arc<PlayerConfig>, events: EventSender) -> Self {
        let display = DisplayModel {
            title: config.empty_title.clone(),
            artist: config.empty_artist.clone(),
            cover: config.default_cover.clone(),
            text_phase: NodePhase::Active,
            cover_phase: NodePhase::Active,
        };
        Self {
            display: Mutex::new(display),
            config,
            events,
        }
    }

    /// Begin the exit animation for a track change.
    ///
    /// The direction tag picks which of the two exit variants the cover
    /// uses; text nodes always use the plain exit phase.
    pub fn begin_exit(&self, direction: Direction) {
        self.update(|display| {
            display.text_phase = NodePhase::Exit;
            display.cover_phase = match direction {
                Direction::Next => NodePhase::ExitNext,
                Direction::Prev => NodePhase::ExitPrev,
            };
        });
    }

    /// Swap in the new track's metadata and begin the enter animation.
    ///
    /// Called by the controller's swap task after the fixed delay,
    /// independent of whether the media load has settled.
    pub fn complete_swap(&self, track: &Track) {
        let cover = track
            .cover
            .clone()
            .unwrap_or_else(|| self.config.default_cover.clone());
        self.update(|display| {
            display.title = track.title.clone();
            display.artist = track.artist.clone();
            display.cover = cover;
            display.text_phase = NodePhase::Active;
            display.cover_phase = NodePhase::Active;
        });
    }

    /// Jump to the terminal empty-playlist presentation.
    pub fn show_empty(&self) {
        let (title, artist, cover) = (
            self.config.empty_title.clone(),
            self.config.empty_artist.clone(),
            self.config.default_cover.clone(),
        );
        self.update(|display| {
            display.title = title;
            display.artist = artist;
            display.cover = cover;
            display.text_phase = NodePhase::Active;
            display.cover_phase = NodePhase::Active;
        });
    }

    /// Jump to the terminal bootstrap-error presentation.
    pub fn show_error(&self) {
        let (title, artist, cover) = (
            self.config.error_title.clone(),
            self.config.error_artist.clone(),
            self.config.default_cover.clone(),
        );
        self.update(|display| {
            display.title = title;
            display.artist = artist;
            display.cover = cover;
            display.text_phase = NodePhase::Active;
            display.cover_phase = NodePhase::Active;
        });
    }

    /// Current display snapshot.
    pub fn display(&self) -> DisplayModel {
        self.display.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    fn update(&self, f: impl FnOnce(&mut DisplayModel)) {
        let snapshot = {
            let mut guard = self.display.lock().unwrap_or_else(|e| e.into_inner());
            f(&mut guard);
            guard.clone()
        };
        emit(&self.events, PlayerEvent::DisplayChanged { display: snapshot });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn presenter() -> TransitionPresenter {
        let (tx, _rx) = crate::events::channel();
        TransitionPresenter::new(Arc::new(PlayerConfig::default()), tx)
    }

    #[test]
    fn starts_on_placeholder() {
        let p = presenter();
        let display = p.display();
        assert_eq!(display.title, PlayerConfig::default().empty_title);
        assert_eq!(display.text_phase, NodePhase::Active);
        assert_eq!(display.cover_phase, NodePhase::Active);
    }

    #[test]
    fn exit_is_direction_tagged() {
        let p = presenter();

        p.begin_exit(Direction::Next);
        let display = p.display();
        assert_eq!(display.text_phase, NodePhase::Exit);
        assert_eq!(display.cover_phase, NodePhase::ExitNext);

        p.begin_exit(Direction::Prev);
        assert_eq!(p.display().cover_phase, NodePhase::ExitPrev);
    }

    #[test]
    fn swap_enters_with_new_metadata() {
        let p = presenter();
        p.begin_exit(Direction::Next);

        let track = Track::new("New Song", "New Artist", "/m/new.mp3");
        p.complete_swap(&track);

        let display = p.display();
        assert_eq!(display.title, "New Song");
        assert_eq!(display.artist, "New Artist");
        assert_eq!(display.cover, PlayerConfig::default().default_cover);
        assert_eq!(display.text_phase, NodePhase::Active);
        assert_eq!(display.cover_phase, NodePhase::Active);
    }

    #[test]
    fn empty_state_short_circuits_mid_transition() {
        let p = presenter();
        p.begin_exit(Direction::Prev);

        p.show_empty();
        let display = p.display();
        assert_eq!(display.text_phase, NodePhase::Active);
        assert_eq!(display.cover_phase, NodePhase::Active);
        assert_eq!(display.title, PlayerConfig::default().empty_title);
    }

    #[test]
    fn error_state_shows_error_text() {
        let p = presenter();
        p.show_error();
        let display = p.display();
        assert_eq!(display.title, PlayerConfig::default().error_title);
        assert_eq!(display.artist, PlayerConfig::default().error_artist);
    }

    #[test]
    fn css_classes_match_contract() {
        assert_eq!(NodePhase::Active.css_class(), "active");
        assert_eq!(NodePhase::Exit.css_class(), "exit");
        assert_eq!(NodePhase::ExitNext.css_class(), "exit-next");
        assert_eq!(NodePhase::ExitPrev.css_class(), "exit-prev");
    }
}
