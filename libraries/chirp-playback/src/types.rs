//! Core types for the playback controller

use chirp_core::{Playlist, Track, DEFAULT_COVER};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Repeat mode
///
/// Cycles through the three values in fixed order, wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RepeatMode {
    /// No repeat marker shown; queue still wraps at the end
    #[default]
    Off,

    /// Restart the current track on skip and at end of track
    One,

    /// Loop the whole queue
    All,
}

impl RepeatMode {
    /// Next mode in the fixed cycle Off -> One -> All -> Off.
    pub fn advance(self) -> Self {
        match self {
            RepeatMode::Off => RepeatMode::One,
            RepeatMode::One => RepeatMode::All,
            RepeatMode::All => RepeatMode::Off,
        }
    }
}

/// Navigation direction hint
///
/// Selects the visual transition variant only; audio behavior is identical
/// either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    /// Forward navigation
    Next,
    /// Backward navigation
    Prev,
}

/// Playback state
///
/// Owned by the driver and only ever set from confirmed engine outcomes,
/// never inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// A source is set and metadata is still pending
    Loading,

    /// Engine confirmed playback started
    Playing,

    /// Not playing (initial state, explicit pause, or a failed start)
    Paused,

    /// Engine reported the track finished
    Ended,
}

/// Transport affordance visual (the play/pause control)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportVisual {
    /// Shows the pause icon with the active-state class
    Playing,

    /// Shows the play icon
    Paused,
}

impl TransportVisual {
    /// Icon name for the control.
    pub fn icon(self) -> &'static str {
        match self {
            TransportVisual::Playing => "pause",
            TransportVisual::Paused => "play",
        }
    }

    /// Whether the active-state class is applied.
    pub fn is_active(self) -> bool {
        self == TransportVisual::Playing
    }
}

impl From<PlaybackState> for TransportVisual {
    fn from(state: PlaybackState) -> Self {
        match state {
            PlaybackState::Playing => TransportVisual::Playing,
            PlaybackState::Loading | PlaybackState::Paused | PlaybackState::Ended => {
                TransportVisual::Paused
            }
        }
    }
}

/// Shuffle icon variant (visual contract: two mutually exclusive icons)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShuffleIcon {
    /// Shuffle off: the ordered-list icon
    Ordered,

    /// Shuffle on: the crossed-arrows icon
    Random,
}

impl ShuffleIcon {
    /// Icon name for the control.
    pub fn icon(self) -> &'static str {
        match self {
            ShuffleIcon::Ordered => "bars",
            ShuffleIcon::Random => "random",
        }
    }
}

impl From<bool> for ShuffleIcon {
    fn from(shuffle: bool) -> Self {
        if shuffle {
            ShuffleIcon::Random
        } else {
            ShuffleIcon::Ordered
        }
    }
}

/// Repeat icon variant (visual contract: three icons, one badged)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RepeatIcon {
    /// Repeat off: plain advance arrow
    Advance,

    /// Repeat one: loop icon with the "1" badge
    RepeatOne,

    /// Repeat all: loop icon
    RepeatAll,
}

impl RepeatIcon {
    /// Icon name for the control.
    pub fn icon(self) -> &'static str {
        match self {
            RepeatIcon::Advance => "arrow-right",
            RepeatIcon::RepeatOne | RepeatIcon::RepeatAll => "repeat",
        }
    }

    /// Small badge overlaid on the icon, if any.
    pub fn badge(self) -> Option<&'static str> {
        match self {
            RepeatIcon::RepeatOne => Some("1"),
            RepeatIcon::Advance | RepeatIcon::RepeatAll => None,
        }
    }
}

impl From<RepeatMode> for RepeatIcon {
    fn from(mode: RepeatMode) -> Self {
        match mode {
            RepeatMode::Off => RepeatIcon::Advance,
            RepeatMode::One => RepeatIcon::RepeatOne,
            RepeatMode::All => RepeatIcon::RepeatAll,
        }
    }
}

/// Queue state owned by the controller
///
/// `current_playlist`/`current_track` are valid indices whenever the active
/// playlist is non-empty; with an empty playlist the placeholder
/// presentation is active and the indices are not consulted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueState {
    /// All playlists received at bootstrap
    pub playlists: Vec<Playlist>,

    /// Index of the active playlist
    pub current_playlist: usize,

    /// Index of the active track within the active playlist
    pub current_track: usize,

    /// Whether forward navigation picks random tracks
    pub shuffle: bool,

    /// Current repeat mode
    pub repeat: RepeatMode,
}

impl QueueState {
    /// Create queue state from bootstrap playlists.
    ///
    /// An empty playlist set degrades to the single default empty playlist
    /// so the indices always point at something.
    pub fn new(playlists: Vec<Playlist>) -> Self {
        let playlists = if playlists.is_empty() {
            vec![Playlist::default_empty()]
        } else {
            playlists
        };

        Self {
            playlists,
            current_playlist: 0,
            current_track: 0,
            shuffle: false,
            repeat: RepeatMode::Off,
        }
    }

    /// The active playlist.
    pub fn active_playlist(&self) -> &Playlist {
        &self.playlists[self.current_playlist]
    }

    /// Tracks of the active playlist.
    pub fn tracks(&self) -> &[Track] {
        &self.active_playlist().tracks
    }

    /// The track at the current index, if the playlist is non-empty.
    pub fn current(&self) -> Option<&Track> {
        self.tracks().get(self.current_track)
    }
}

/// Configuration for the player
///
/// Defaults carry the constants of the embedded player: a 300 ms visual
/// transition, the bundled fallback cover, and the placeholder strings
/// shown for empty playlists and bootstrap failures.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Delay between transition exit and metadata swap
    pub transition_delay: Duration,

    /// Cover shown for tracks without artwork and for placeholders
    pub default_cover: String,

    /// Title line for an empty playlist
    pub empty_title: String,

    /// Artist line for an empty playlist
    pub empty_artist: String,

    /// Title line after a failed bootstrap
    pub error_title: String,

    /// Artist line after a failed bootstrap
    pub error_artist: String,

    /// Link included in share payloads
    pub share_url: String,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            transition_delay: Duration::from_millis(300),
            default_cover: DEFAULT_COVER.to_string(),
            empty_title: "This playlist is empty".to_string(),
            empty_artist: "Add tracks through the bot!".to_string(),
            error_title: "Loading failed".to_string(),
            error_artist: "Check your connection to the server".to_string(),
            share_url: "https://t.me/ChirpPlayerBot".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeat_mode_cycles_and_wraps() {
        assert_eq!(RepeatMode::Off.advance(), RepeatMode::One);
        assert_eq!(RepeatMode::One.advance(), RepeatMode::All);
        assert_eq!(RepeatMode::All.advance(), RepeatMode::Off);

        // Three advances return to the start
        let mode = RepeatMode::Off;
        assert_eq!(mode.advance().advance().advance(), mode);
    }

    #[test]
    fn transport_visual_follows_state() {
        assert_eq!(
            TransportVisual::from(PlaybackState::Playing),
            TransportVisual::Playing
        );
        for state in [
            PlaybackState::Loading,
            PlaybackState::Paused,
            PlaybackState::Ended,
        ] {
            assert_eq!(TransportVisual::from(state), TransportVisual::Paused);
        }

        assert_eq!(TransportVisual::Playing.icon(), "pause");
        assert_eq!(TransportVisual::Paused.icon(), "play");
        assert!(TransportVisual::Playing.is_active());
        assert!(!TransportVisual::Paused.is_active());
    }

    #[test]
    fn icons_follow_modes() {
        assert_eq!(ShuffleIcon::from(false), ShuffleIcon::Ordered);
        assert_eq!(ShuffleIcon::from(true), ShuffleIcon::Random);

        assert_eq!(RepeatIcon::from(RepeatMode::Off), RepeatIcon::Advance);
        assert_eq!(RepeatIcon::from(RepeatMode::One), RepeatIcon::RepeatOne);
        assert_eq!(RepeatIcon::from(RepeatMode::All), RepeatIcon::RepeatAll);

        // Only repeat-one carries the badge
        assert_eq!(RepeatIcon::RepeatOne.badge(), Some("1"));
        assert_eq!(RepeatIcon::Advance.badge(), None);
        assert_eq!(RepeatIcon::RepeatAll.badge(), None);
        assert_eq!(RepeatIcon::RepeatOne.icon(), RepeatIcon::RepeatAll.icon());
    }

    #[test]
    fn empty_bootstrap_degrades_to_default_playlist() {
        let state = QueueState::new(Vec::new());
        assert_eq!(state.playlists.len(), 1);
        assert!(state.active_playlist().is_empty());
        assert!(state.current().is_none());
    }

    #[test]
    fn current_track_resolves() {
        let playlist = Playlist::new(
            "Mix",
            vec![
                Track::new("A", "X", "/m/a.mp3"),
                Track::new("B", "Y", "/m/b.mp3"),
            ],
        );
        let mut state = QueueState::new(vec![playlist]);
        assert_eq!(state.current().unwrap().title, "A");

        state.current_track = 1;
        assert_eq!(state.current().unwrap().title, "B");
    }
}
