//! Song records and the read-only catalog they live in

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

const EMBEDDED_CATALOG: &str = include_str!("../data/mock_songs.json");

/// Closed set of storefront categories
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Tamil,
    English,
}

impl Category {
    pub fn label(self) -> &'static str {
        match self {
            Category::Tamil => "Tamil",
            Category::English => "English",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single song in the catalog
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Song {
    pub id: u32,
    pub title: String,
    pub artist: String,
    pub album: String,
    /// Display-only, e.g. "3:49"
    #[serde(default)]
    pub duration: String,
    /// Display-only cover art reference
    #[serde(default)]
    pub cover: String,
    pub category: Category,
    #[serde(default)]
    pub is_popular: bool,
}

/// Fixed-order, read-only list of songs.
///
/// Order is significant: it drives next/previous wraparound and the
/// "latest hits" ordering, so nothing in the crate ever reorders it.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    songs: Vec<Song>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(songs: Vec<Song>) -> Result<Self> {
        let mut seen = HashSet::with_capacity(songs.len());
        for song in &songs {
            if !seen.insert(song.id) {
                bail!("duplicate song id {} ({:?})", song.id, song.title);
            }
        }
        Ok(Self { songs })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let songs: Vec<Song> = serde_json::from_str(json).context("invalid catalog JSON")?;
        Self::new(songs)
    }

    /// The mock catalog compiled into the binary
    pub fn embedded() -> Result<Self> {
        Self::from_json(EMBEDDED_CATALOG)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog {}", path.display()))?;
        let catalog = Self::from_json(&content)
            .with_context(|| format!("failed to parse catalog {}", path.display()))?;
        tracing::info!(path = %path.display(), songs = catalog.len(), "Loaded catalog from file");
        Ok(catalog)
    }

    pub fn songs(&self) -> &[Song] {
        &self.songs
    }

    pub fn len(&self) -> usize {
        self.songs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Song> {
        self.songs.get(index)
    }

    /// Index of the song with `id`, if present
    pub fn position(&self, id: u32) -> Option<usize> {
        self.songs.iter().position(|song| song.id == id)
    }
}
