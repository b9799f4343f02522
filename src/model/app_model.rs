//! Main application model with state management

use std::sync::Arc;

use super::catalog::{Catalog, Song};
use super::playback::{PlaybackInfo, PlaybackSession};
use super::query::{self, CategorySection, SectionLimits};
use super::types::{ActiveSection, UiState};

/// Main application model containing all state.
///
/// Owned by the controller; the view only ever sees borrowed snapshots.
pub struct AppModel {
    catalog: Arc<Catalog>,
    limits: SectionLimits,
    playback: PlaybackSession,
    ui_state: UiState,
    should_quit: bool,
}

impl AppModel {
    pub fn new(catalog: Arc<Catalog>, limits: SectionLimits) -> Self {
        Self {
            catalog,
            limits,
            playback: PlaybackSession::new(),
            ui_state: UiState::default(),
            should_quit: false,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Category sections for the current search query
    pub fn sections(&self) -> Vec<CategorySection<'_>> {
        query::compose_sections(self.catalog.songs(), &self.ui_state.search_query, &self.limits)
    }

    pub fn trending(&self) -> Vec<&Song> {
        query::trending(self.catalog.songs())
    }

    // ========================================================================
    // Playback
    // ========================================================================

    pub fn playback(&self) -> &PlaybackSession {
        &self.playback
    }

    pub fn get_playback_info(&self) -> PlaybackInfo {
        self.playback.info()
    }

    pub fn play(&mut self, song: &Song) {
        self.playback.play(song);
    }

    pub fn pause(&mut self) {
        self.playback.pause();
    }

    pub fn resume(&mut self) {
        self.playback.resume();
    }

    pub fn toggle_playback(&mut self) {
        self.playback.toggle();
    }

    pub fn next_song(&mut self) {
        self.playback.next(&self.catalog);
    }

    pub fn previous_song(&mut self) {
        self.playback.previous(&self.catalog);
    }

    // ========================================================================
    // UI state
    // ========================================================================

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn set_should_quit(&mut self, quit: bool) {
        self.should_quit = quit;
    }

    pub fn get_ui_state(&self) -> &UiState {
        &self.ui_state
    }

    pub fn cycle_section_forward(&mut self) {
        self.ui_state.active_section = self.ui_state.active_section.next();
    }

    pub fn cycle_section_backward(&mut self) {
        self.ui_state.active_section = self.ui_state.active_section.prev();
    }

    pub fn set_active_section(&mut self, section: ActiveSection) {
        self.ui_state.active_section = section;
    }

    pub fn update_search_query(&mut self, query: String) {
        self.ui_state.search_query = query;
        self.reset_section_cursor();
    }

    pub fn append_to_search(&mut self, c: char) {
        self.ui_state.search_query.push(c);
        self.reset_section_cursor();
    }

    pub fn backspace_search(&mut self) {
        if self.ui_state.search_query.pop().is_some() {
            self.reset_section_cursor();
        }
    }

    fn reset_section_cursor(&mut self) {
        self.ui_state.section_selected = 0;
        self.ui_state.song_selected = 0;
    }

    pub fn move_selection_up(&mut self) {
        match self.ui_state.active_section {
            ActiveSection::Sections => {
                if self.ui_state.section_selected > 0 {
                    self.ui_state.section_selected -= 1;
                    self.clamp_song_cursor();
                }
            }
            ActiveSection::Trending => {
                if self.ui_state.trending_selected > 0 {
                    self.ui_state.trending_selected -= 1;
                }
            }
            ActiveSection::Search => {}
        }
    }

    pub fn move_selection_down(&mut self) {
        match self.ui_state.active_section {
            ActiveSection::Sections => {
                let count = self.sections().len();
                if self.ui_state.section_selected < count.saturating_sub(1) {
                    self.ui_state.section_selected += 1;
                    self.clamp_song_cursor();
                }
            }
            ActiveSection::Trending => {
                let count = self.trending().len();
                if self.ui_state.trending_selected < count.saturating_sub(1) {
                    self.ui_state.trending_selected += 1;
                }
            }
            ActiveSection::Search => {}
        }
    }

    pub fn move_song_left(&mut self) {
        if self.ui_state.active_section == ActiveSection::Sections && self.ui_state.song_selected > 0 {
            self.ui_state.song_selected -= 1;
        }
    }

    pub fn move_song_right(&mut self) {
        if self.ui_state.active_section != ActiveSection::Sections {
            return;
        }
        let count = self.selected_section_len();
        if self.ui_state.song_selected < count.saturating_sub(1) {
            self.ui_state.song_selected += 1;
        }
    }

    fn selected_section_len(&self) -> usize {
        self.sections()
            .get(self.ui_state.section_selected)
            .map_or(0, |section| section.songs.len())
    }

    fn clamp_song_cursor(&mut self) {
        let count = self.selected_section_len();
        self.ui_state.song_selected = self.ui_state.song_selected.min(count.saturating_sub(1));
    }

    /// Song under the cursor in the focused list, if any
    pub fn get_selected_song(&self) -> Option<Song> {
        match self.ui_state.active_section {
            ActiveSection::Sections => self
                .sections()
                .get(self.ui_state.section_selected)
                .and_then(|section| section.songs.get(self.ui_state.song_selected))
                .map(|song| (*song).clone()),
            ActiveSection::Trending => self
                .trending()
                .get(self.ui_state.trending_selected)
                .map(|song| (*song).clone()),
            ActiveSection::Search => None,
        }
    }

    pub fn show_help_popup(&mut self) {
        self.ui_state.show_help_popup = true;
    }

    pub fn hide_help_popup(&mut self) {
        self.ui_state.show_help_popup = false;
    }

    pub fn is_help_popup_open(&self) -> bool {
        self.ui_state.show_help_popup
    }
}
