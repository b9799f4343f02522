//! Overlay rendering (help popup)

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::utils::centered_rect;

pub fn render_help_popup(frame: &mut Frame) {
    let area = frame.area();

    // Define keybindings organized by category
    let keybindings = [
        ("", "── Navigation ──"),
        ("Tab / Shift+Tab", "Cycle search, sections, trending"),
        ("↑ / ↓", "Move between sections / songs"),
        ("← / →", "Move along a section"),
        ("Enter", "Play (on a playing card: pause)"),
        ("/", "Focus search"),
        ("Esc", "Clear search"),
        ("", ""),
        ("", "── Playback ──"),
        ("Space", "Play / Pause"),
        ("N", "Next song"),
        ("P", "Previous song"),
        ("", ""),
        ("", "── General ──"),
        ("H", "Toggle this help"),
        ("Q / Ctrl+Q", "Quit"),
    ];

    let popup_height = keybindings.len() as u16 + 2;
    let popup_area = centered_rect(62, popup_height, area);

    // Clear the area behind the popup
    frame.render_widget(Clear, popup_area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                // Section header or empty line
                Line::from(Span::styled(
                    format!("{:^38}", desc),
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>18}", key),
                        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(Color::White)),
                ])
            }
        })
        .collect();

    let help_text = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(" Help (H or Esc to close) ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .style(Style::default().bg(Color::Black)),
        )
        .style(Style::default().bg(Color::Black));

    frame.render_widget(help_text, popup_area);
}
