//! Layout rendering (header, banner, trending sidebar, footer)

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, ListItem, Paragraph},
    Frame,
};
use ratatui::widgets::Padding;

use crate::model::{ActiveSection, PlaybackInfo, Song, UiState};
use super::utils::{calculate_num_width, render_scrollable_list, truncate_string};

const SEARCH_PLACEHOLDER: &str = "Search for songs, artists, or albums...";

fn brand_line() -> Line<'static> {
    Line::from(vec![
        Span::styled("Rhythmic ", Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
        Span::styled("Music", Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)),
    ])
}

pub fn render_header(frame: &mut Frame, area: Rect, ui_state: &UiState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(20), // Logo
            Constraint::Min(0),     // Search input
        ])
        .split(area);

    let logo = Paragraph::new(brand_line())
        .block(Block::default().borders(Borders::ALL).padding(Padding::horizontal(1)));
    frame.render_widget(logo, chunks[0]);

    let is_focused = ui_state.active_section == ActiveSection::Search;

    let search = if ui_state.search_query.is_empty() {
        Paragraph::new(SEARCH_PLACEHOLDER).style(Style::default().fg(Color::DarkGray))
    } else {
        let cursor = if is_focused { "▏" } else { "" };
        Paragraph::new(format!("{}{}", ui_state.search_query, cursor))
            .style(Style::default().fg(Color::White))
    };

    let search = search.block(
        Block::default()
            .borders(Borders::ALL)
            .title(" 🔍 Search ")
            .padding(Padding::horizontal(1))
            .border_style(if is_focused {
                Style::default().fg(Color::Blue)
            } else {
                Style::default()
            }),
    );
    frame.render_widget(search, chunks[1]);
}

pub fn render_banner(frame: &mut Frame, area: Rect) {
    let banner = Paragraph::new(Line::from(vec![
        Span::styled(
            "Unlimited Vibes Await ",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "· Go Premium for ad-free Tamil & English hits, offline listening and unlimited skips",
            Style::default().fg(Color::Gray),
        ),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" ✨ Rhythmic Premium ")
            .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(Color::Red))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(banner, area);
}

pub fn render_trending_sidebar(
    frame: &mut Frame,
    area: Rect,
    ui_state: &UiState,
    trending: &[&Song],
    playback: &PlaybackInfo,
) {
    let is_focused = ui_state.active_section == ActiveSection::Trending;
    let num_width = calculate_num_width(trending.len());
    // Borders, padding, number column and duration column
    let text_width = (area.width as usize).saturating_sub(4 + num_width + 7);

    let items: Vec<ListItem> = trending
        .iter()
        .enumerate()
        .map(|(i, song)| {
            let is_current = playback.song.as_ref().is_some_and(|s| s.id == song.id);
            let style = if i == ui_state.trending_selected && is_focused {
                Style::default().fg(Color::Black).bg(Color::Blue).add_modifier(Modifier::BOLD)
            } else if is_current {
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            let label = format!("{} - {}", song.title, song.artist);
            ListItem::new(format!(
                "{:>num_width$} {:<text_width$} {:>5}",
                i + 1,
                truncate_string(&label, text_width),
                song.duration,
                num_width = num_width,
                text_width = text_width,
            ))
            .style(style)
        })
        .collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" 🔥 Trending Now ")
        .padding(Padding::horizontal(1))
        .border_style(if is_focused {
            Style::default().fg(Color::Blue)
        } else {
            Style::default()
        });

    let selected = (!trending.is_empty()).then_some(ui_state.trending_selected);
    render_scrollable_list(frame, area, items, selected, block);
}

pub fn render_footer(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .title_bottom(
            Line::from(" © 2025 Rhythmic Music. All rights reserved. Made with ❤️ for music lovers. ")
                .centered(),
        )
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(35),
            Constraint::Percentage(25),
        ])
        .split(inner);

    let heading = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    let muted = Style::default().fg(Color::Gray);

    let brand = Paragraph::new(vec![
        brand_line(),
        Line::styled("Your ultimate destination for Tamil and English music.", muted),
        Line::styled("Facebook · Twitter · Instagram · YouTube", muted),
    ])
    .wrap(ratatui::widgets::Wrap { trim: true });
    frame.render_widget(brand, columns[0]);

    let contact = Paragraph::new(vec![
        Line::styled("Contact Us", heading),
        Line::styled("✉ info@rhythmicmusic.com", muted),
        Line::styled("☎ +1 (555) 123-4567", muted),
        Line::styled("⌂ 123 Music Street, Sound City, SC 12345", muted),
    ]);
    frame.render_widget(contact, columns[1]);

    let links = Paragraph::new(vec![
        Line::styled("Quick Links", heading),
        Line::styled("About Us · Privacy Policy", muted),
        Line::styled("Terms of Service · Support", muted),
        Line::styled("Careers · Press", muted),
    ]);
    frame.render_widget(links, columns[2]);
}
