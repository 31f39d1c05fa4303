//! Track catalog: the fixed, ordered list of playable tracks.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{PlayerError, Result};

const EMBEDDED_CATALOG: &str = include_str!("../assets/catalog.json");

/// A single playable entry, identified by its position in the [`Catalog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    #[serde(rename = "src")]
    pub audio_source: String,
    #[serde(rename = "cover")]
    pub cover_image: String,
}

impl Track {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        audio_source: impl Into<String>,
        cover_image: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            audio_source: audio_source.into(),
            cover_image: cover_image.into(),
        }
    }
}

/// Non-empty ordered track list, fixed at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    tracks: Vec<Track>,
}

// Never empty, so there is no `is_empty`.
#[allow(clippy::len_without_is_empty)]
impl Catalog {
    pub fn new(tracks: Vec<Track>) -> Result<Self> {
        if tracks.is_empty() {
            return Err(PlayerError::EmptyCatalog);
        }
        Ok(Self { tracks })
    }

    /// Parse a JSON array of `{title, artist, src, cover}` objects.
    pub fn from_json(document: &str) -> Result<Self> {
        let tracks: Vec<Track> = serde_json::from_str(document)?;
        Self::new(tracks)
    }

    /// The catalog bundled at build time, or the built-in default if that
    /// document is unusable.
    pub fn embedded() -> Self {
        match Self::from_json(EMBEDDED_CATALOG) {
            Ok(catalog) => catalog,
            Err(err) => {
                warn!(%err, "embedded catalog unusable, falling back to defaults");
                Self::default()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Track)> {
        self.tracks.iter().enumerate()
    }

    /// Index after `index`, wrapping to the first track.
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.len()
    }

    /// Index before `index`, wrapping to the last track.
    pub fn previous_index(&self, index: usize) -> usize {
        let len = self.len();
        (index % len + len - 1) % len
    }
}

impl Default for Catalog {
    fn default() -> Self {
        let tracks = (1..=3)
            .map(|n| {
                Track::new(
                    format!("SoundHelix Song {n}"),
                    "T. Schürger",
                    format!("https://www.soundhelix.com/examples/mp3/SoundHelix-Song-{n}.mp3"),
                    format!("https://picsum.photos/seed/music{n}/600"),
                )
            })
            .collect();
        Self { tracks }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_catalog() {
        assert!(matches!(Catalog::new(Vec::new()), Err(PlayerError::EmptyCatalog)));
        assert!(matches!(Catalog::from_json("[]"), Err(PlayerError::EmptyCatalog)));
    }

    #[test]
    fn rejects_malformed_document() {
        assert!(matches!(
            Catalog::from_json("{\"title\": 1}"),
            Err(PlayerError::InvalidCatalog(_))
        ));
    }

    #[test]
    fn parses_short_field_names() {
        let catalog = Catalog::from_json(
            r#"[{"title":"A","artist":"B","src":"a.mp3","cover":"a.jpg"}]"#,
        )
        .unwrap();
        let track = catalog.get(0).unwrap();
        assert_eq!(track.audio_source, "a.mp3");
        assert_eq!(track.cover_image, "a.jpg");
    }

    #[test]
    fn embedded_catalog_matches_default() {
        assert_eq!(Catalog::embedded(), Catalog::default());
    }

    #[test]
    fn wraps_at_both_ends() {
        let catalog = Catalog::default();
        assert_eq!(catalog.next_index(2), 0);
        assert_eq!(catalog.previous_index(0), 2);
        assert_eq!(catalog.next_index(0), 1);
        assert_eq!(catalog.previous_index(1), 0);
    }

    #[test]
    fn single_track_wraps_onto_itself() {
        let catalog = Catalog::new(vec![Track::new("t", "a", "s", "c")]).unwrap();
        assert_eq!(catalog.next_index(0), 0);
        assert_eq!(catalog.previous_index(0), 0);
    }
}
