//! View module - UI rendering
//!
//! This module handles all UI rendering for the application using ratatui.
//! It is organized into submodules by component type:
//!
//! - `utils`: Shared utility functions (truncation, scrolling windows, popups)
//! - `layout`: Page shell (header, banner, trending sidebar, footer)
//! - `content`: Category sections in the main content area
//! - `player`: Bottom music player bar
//! - `overlays`: Modal overlays (help)

mod utils;
mod layout;
mod content;
mod player;
mod overlays;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::model::{CategorySection, PlaybackInfo, Song, UiState};

pub struct AppView;

impl AppView {
    pub fn render(
        frame: &mut Frame,
        playback: &PlaybackInfo,
        ui_state: &UiState,
        sections: &[CategorySection],
        trending: &[&Song],
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Logo + search
                Constraint::Min(0),    // Banner, sections and trending sidebar
                Constraint::Length(6), // Footer
                Constraint::Length(3), // Music player
            ])
            .split(frame.area());

        layout::render_header(frame, chunks[0], ui_state);

        let main_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(70), // Banner + sections
                Constraint::Percentage(30), // Trending sidebar
            ])
            .split(chunks[1]);

        let content_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Subscription banner
                Constraint::Min(0),    // Category sections
            ])
            .split(main_chunks[0]);

        layout::render_banner(frame, content_chunks[0]);
        content::render_sections(frame, content_chunks[1], ui_state, sections, playback);

        layout::render_trending_sidebar(frame, main_chunks[1], ui_state, trending, playback);

        layout::render_footer(frame, chunks[2]);

        player::render_player_bar(frame, chunks[3], playback);

        if ui_state.show_help_popup {
            overlays::render_help_popup(frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use ratatui::{backend::TestBackend, Terminal};

    use crate::model::{ActiveSection, AppModel, SectionLimits};
    use crate::test_utils::abcd_catalog;

    fn draw(model: &AppModel, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let sections = model.sections();
        let trending = model.trending();
        terminal
            .draw(|f| {
                AppView::render(f, &model.get_playback_info(), model.get_ui_state(), &sections, &trending);
            })
            .unwrap();

        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn renders_storefront_shell() {
        let model = AppModel::new(Arc::new(abcd_catalog()), SectionLimits::default());
        let screen = draw(&model, 140, 48);

        assert!(screen.contains("Search for songs, artists, or albums..."));
        assert!(screen.contains("Latest Hits (4)"));
        assert!(screen.contains("Trending Now"));
        assert!(screen.contains("No track playing"));
        assert!(screen.contains("Quick Links"));
    }

    #[test]
    fn renders_search_results_and_player() {
        let mut model = AppModel::new(Arc::new(abcd_catalog()), SectionLimits::default());
        model.update_search_query("bloom".to_string());
        let song = model.catalog().get(1).cloned().unwrap();
        model.play(&song);

        let screen = draw(&model, 140, 48);
        assert!(screen.contains("Search Results for \"bloom\" (1)"));
        assert!(screen.contains("Bloom | Lumen (Gardens)"));
        assert!(screen.contains("[English]"));
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut model = AppModel::new(Arc::new(abcd_catalog()), SectionLimits::default());
        model.set_active_section(ActiveSection::Sections);
        model.show_help_popup();
        draw(&model, 10, 5);
        draw(&model, 1, 1);
    }
}
