//! Main content area rendering (category sections of song cards)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{ActiveSection, CategorySection, PlaybackInfo, Song, UiState};
use super::utils::{truncate_string, visible_window};

/// Rows taken by one section: borders plus the card line and the artist line
const SECTION_HEIGHT: u16 = 4;
const CARD_WIDTH: usize = 24;
const CARD_GAP: usize = 2;

pub fn render_sections(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    sections: &[CategorySection],
    playback: &PlaybackInfo,
) {
    let is_focused = ui_state.active_section == ActiveSection::Sections;

    let visible = (area.height / SECTION_HEIGHT).max(1) as usize;
    let first = ui_state.section_selected.saturating_sub(visible - 1);

    let shown: Vec<&CategorySection> = sections.iter().skip(first).take(visible).collect();
    let mut constraints: Vec<Constraint> = shown.iter().map(|_| Constraint::Length(SECTION_HEIGHT)).collect();
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (offset, section) in shown.into_iter().enumerate() {
        let has_cursor = is_focused && first + offset == ui_state.section_selected;
        let selected_song = has_cursor.then_some(ui_state.song_selected);
        render_section(frame, chunks[offset], section, selected_song, has_cursor, playback);
    }
}

fn render_section(
    frame: &mut Frame,
    area: Rect,
    section: &CategorySection,
    selected_song: Option<usize>,
    is_focused: bool,
    playback: &PlaybackInfo,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ({}) ", section.title, section.songs.len()))
        .title_style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .padding(Padding::horizontal(1))
        .border_style(if is_focused {
            Style::default().fg(Color::Blue)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    if section.songs.is_empty() {
        let empty = Paragraph::new("No songs found")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let available = (area.width as usize).saturating_sub(4);
    let widths = vec![CARD_WIDTH + CARD_GAP; section.songs.len()];
    let start = visible_window(&widths, selected_song.unwrap_or(0), available);

    let mut titles: Vec<Span> = Vec::new();
    let mut artists: Vec<Span> = Vec::new();

    for (i, song) in section.songs.iter().enumerate().skip(start) {
        let style = card_style(song, selected_song == Some(i), playback);
        titles.push(Span::styled(card_title(song, playback), style));
        artists.push(Span::styled(
            format!("{:<width$}", truncate_string(&song.artist, CARD_WIDTH - 2), width = CARD_WIDTH),
            Style::default().fg(Color::Gray),
        ));
        titles.push(Span::raw(" ".repeat(CARD_GAP)));
        artists.push(Span::raw(" ".repeat(CARD_GAP)));
    }

    let cards = Paragraph::new(vec![Line::from(titles), Line::from(artists)]).block(block);
    frame.render_widget(cards, area);
}

fn card_title(song: &Song, playback: &PlaybackInfo) -> String {
    let is_current = playback.song.as_ref().is_some_and(|s| s.id == song.id);
    let glyph = match (is_current, playback.is_playing) {
        (true, true) => "⏸",
        _ => "▶",
    };
    let title = truncate_string(&song.title, CARD_WIDTH - 3);
    format!("{} {:<width$}", glyph, title, width = CARD_WIDTH - 2)
}

fn card_style(song: &Song, is_selected: bool, playback: &PlaybackInfo) -> Style {
    let is_current = playback.song.as_ref().is_some_and(|s| s.id == song.id);
    if is_selected {
        Style::default().fg(Color::Black).bg(Color::Blue).add_modifier(Modifier::BOLD)
    } else if is_current {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}
