//! Bottom music player bar

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::model::PlaybackInfo;

pub fn render_player_bar(frame: &mut Frame, area: Rect, playback: &PlaybackInfo) {
    let status = match &playback.song {
        None => Line::from(Span::styled(" No track playing", Style::default().fg(Color::DarkGray))),
        Some(song) => {
            let glyph = if playback.is_playing { " ▶ " } else { " ⏸ " };
            Line::from(vec![
                Span::styled(glyph, Style::default().fg(Color::Green)),
                Span::styled(song.title.clone(), Style::default().fg(Color::White).add_modifier(Modifier::BOLD)),
                Span::styled(
                    format!(" | {} ({})", song.artist, song.album),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(format!("  {}", song.duration), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("  [{}]", song.category.label()), Style::default().fg(Color::Blue)),
            ])
        }
    };

    let play_pause = if playback.is_playing { "⏸ Space" } else { "▶ Space" };
    let controls = format!(" ⏮ P   {}   ⏭ N ", play_pause);

    let player = Paragraph::new(status).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Now Playing ")
            .title_bottom(Line::from(controls).right_aligned())
            .border_style(Style::default().fg(if playback.is_playing { Color::Green } else { Color::White })),
    );

    frame.render_widget(player, area);
}
