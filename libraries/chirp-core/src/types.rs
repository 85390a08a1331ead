//! Playlist and track domain types

use serde::{Deserialize, Serialize};

/// Cover image shown when a track carries no artwork of its own.
pub const DEFAULT_COVER: &str = "/static/css/standart.png";

/// A single playable track.
///
/// Immutable once received from the playlist source. `cover` is optional on
/// the wire; display code always goes through [`Track::cover_or_default`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Track title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Cover image URI (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover: Option<String>,

    /// Media file URI handed to the engine
    pub file: String,
}

impl Track {
    /// Create a track with no cover art.
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        file: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            cover: None,
            file: file.into(),
        }
    }

    /// Cover URI, falling back to the bundled default image.
    pub fn cover_or_default(&self) -> &str {
        self.cover.as_deref().unwrap_or(DEFAULT_COVER)
    }
}

/// Named, ordered collection of tracks. May be empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Playlist name
    pub name: String,

    /// Ordered track sequence
    pub tracks: Vec<Track>,
}

impl Playlist {
    /// Create a playlist from a name and tracks.
    pub fn new(name: impl Into<String>, tracks: Vec<Track>) -> Self {
        Self {
            name: name.into(),
            tracks,
        }
    }

    /// The fallback playlist used when bootstrap fails or returns nothing.
    pub fn default_empty() -> Self {
        Self {
            name: "Favorites".to_string(),
            tracks: Vec::new(),
        }
    }

    /// Whether the playlist holds no tracks.
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Number of tracks.
    pub fn len(&self) -> usize {
        self.tracks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_falls_back_to_default() {
        let track = Track::new("Song", "Artist", "/media/song.mp3");
        assert_eq!(track.cover_or_default(), DEFAULT_COVER);

        let mut with_cover = track.clone();
        with_cover.cover = Some("/covers/song.png".to_string());
        assert_eq!(with_cover.cover_or_default(), "/covers/song.png");
    }

    #[test]
    fn default_playlist_is_empty() {
        let playlist = Playlist::default_empty();
        assert!(playlist.is_empty());
        assert_eq!(playlist.len(), 0);
        assert_eq!(playlist.name, "Favorites");
    }

    #[test]
    fn track_deserializes_without_cover() {
        let json = r#"{"title":"Song","artist":"Artist","file":"/media/song.mp3"}"#;
        let track: Track = serde_json::from_str(json).unwrap();
        assert!(track.cover.is_none());
        assert_eq!(track.title, "Song");
    }

    #[test]
    fn playlist_round_trips_wire_format() {
        let json = r#"{
            "name": "Road Trip",
            "tracks": [
                {"title": "A", "artist": "X", "cover": "/c/a.png", "file": "/m/a.mp3"},
                {"title": "B", "artist": "Y", "file": "/m/b.mp3"}
            ]
        }"#;
        let playlist: Playlist = serde_json::from_str(json).unwrap();
        assert_eq!(playlist.len(), 2);
        assert_eq!(playlist.tracks[0].cover.as_deref(), Some("/c/a.png"));
        assert!(playlist.tracks[1].cover.is_none());
    }
}
