//! Playback selection state: which song is selected and whether it plays
//!
//! Nothing here decodes audio. The session only tracks the selection the
//! player bar shows, and steps through the catalog for next/previous.

use super::catalog::{Catalog, Song};

/// Current song and playing flag.
///
/// Reachable states are `(None, false)`, `(Some, false)` and `(Some, true)`;
/// the fields are private so `(None, true)` cannot be built.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaybackSession {
    current_song: Option<Song>,
    is_playing: bool,
}

impl PlaybackSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_song(&self) -> Option<&Song> {
        self.current_song.as_ref()
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    /// True if `song` is the selected song and is playing
    pub fn is_current_playing(&self, song: &Song) -> bool {
        self.is_playing && self.current_song.as_ref().is_some_and(|s| s.id == song.id)
    }

    pub fn play(&mut self, song: &Song) {
        self.current_song = Some(song.clone());
        self.is_playing = true;
    }

    /// Continue the selected song. Does nothing without a selection.
    pub fn resume(&mut self) {
        if self.current_song.is_some() {
            self.is_playing = true;
        }
    }

    pub fn pause(&mut self) {
        self.is_playing = false;
    }

    pub fn toggle(&mut self) {
        if self.is_playing {
            self.pause();
        } else {
            self.resume();
        }
    }

    /// Select the song after the current one in catalog order, wrapping
    /// from last to first. Keeps the playing flag.
    pub fn next(&mut self, catalog: &Catalog) {
        self.step(catalog, |index, len| (index + 1) % len);
    }

    /// Select the song before the current one in catalog order, wrapping
    /// from first to last. Keeps the playing flag.
    pub fn previous(&mut self, catalog: &Catalog) {
        self.step(catalog, |index, len| (index + len - 1) % len);
    }

    fn step(&mut self, catalog: &Catalog, advance: impl Fn(usize, usize) -> usize) {
        let Some(current) = &self.current_song else {
            return;
        };

        let Some(index) = catalog.position(current.id) else {
            tracing::warn!(song_id = current.id, "Current song is not in the catalog, ignoring skip");
            return;
        };

        // position() found the song, so len >= 1
        if let Some(song) = catalog.get(advance(index, catalog.len())) {
            self.current_song = Some(song.clone());
        }
    }

    pub fn info(&self) -> PlaybackInfo {
        PlaybackInfo {
            song: self.current_song.clone(),
            is_playing: self.is_playing,
        }
    }
}

/// Snapshot of the playback selection for rendering
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaybackInfo {
    pub song: Option<Song>,
    pub is_playing: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Category;
    use crate::test_utils::{abcd_catalog, song};

    #[test]
    fn starts_stopped() {
        let session = PlaybackSession::new();
        assert!(session.current_song().is_none());
        assert!(!session.is_playing());
    }

    #[test]
    fn play_selects_and_starts() {
        let catalog = abcd_catalog();
        let mut session = PlaybackSession::new();
        let b = catalog.get(1).unwrap();

        session.play(b);
        assert_eq!(session.current_song(), Some(b));
        assert!(session.is_playing());

        session.play(b);
        assert_eq!(session.current_song(), Some(b));
        assert!(session.is_playing());
        assert!(session.is_current_playing(b));
        assert!(!session.is_current_playing(catalog.get(0).unwrap()));
    }

    #[test]
    fn resume_without_song_stays_stopped() {
        let mut session = PlaybackSession::new();
        session.resume();
        assert_eq!(session, PlaybackSession::new());
        session.toggle();
        assert_eq!(session, PlaybackSession::new());
    }

    #[test]
    fn pause_keeps_song() {
        let catalog = abcd_catalog();
        let mut session = PlaybackSession::new();
        session.play(catalog.get(2).unwrap());

        session.pause();
        assert_eq!(session.current_song().map(|s| s.id), Some(3));
        assert!(!session.is_playing());

        session.toggle();
        assert!(session.is_playing());
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let catalog = abcd_catalog();
        let mut session = PlaybackSession::new();
        session.play(catalog.get(3).unwrap());

        session.next(&catalog);
        assert_eq!(session.current_song().map(|s| s.id), Some(1));

        session.previous(&catalog);
        assert_eq!(session.current_song().map(|s| s.id), Some(4));
    }

    #[test]
    fn skipping_keeps_playing_flag() {
        let catalog = abcd_catalog();
        let mut session = PlaybackSession::new();
        session.play(catalog.get(0).unwrap());
        session.pause();

        session.next(&catalog);
        assert_eq!(session.current_song().map(|s| s.id), Some(2));
        assert!(!session.is_playing());
    }

    #[test]
    fn skipping_without_song_is_noop() {
        let catalog = abcd_catalog();
        let mut session = PlaybackSession::new();
        session.next(&catalog);
        session.previous(&catalog);
        assert_eq!(session, PlaybackSession::new());
    }

    #[test]
    fn skipping_unknown_song_is_noop() {
        let catalog = abcd_catalog();
        let stray = song(99, "Stray", "Nobody", "Nowhere", Category::English, false);
        let mut session = PlaybackSession::new();
        session.play(&stray);

        session.next(&catalog);
        assert_eq!(session.current_song(), Some(&stray));
        session.previous(&catalog);
        assert_eq!(session.current_song(), Some(&stray));
    }

    #[test]
    fn single_song_catalog_wraps_onto_itself() {
        let catalog = Catalog::new(vec![song(5, "Solo", "One", "Alone", Category::Tamil, false)]).unwrap();
        let mut session = PlaybackSession::new();
        session.play(catalog.get(0).unwrap());

        session.next(&catalog);
        assert_eq!(session.current_song().map(|s| s.id), Some(5));
        session.previous(&catalog);
        assert_eq!(session.current_song().map(|s| s.id), Some(5));
    }
}
