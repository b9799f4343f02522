//! Utility functions for rendering UI components

use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, List, ListItem, ListState},
    Frame,
};

pub fn render_scrollable_list(
    frame: &mut Frame,
    area: Rect,
    items: Vec<ListItem>,
    selected_index: Option<usize>,
    block: Block,
) {
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default()); // Highlight handled by item styles

    let mut list_state = ListState::default();
    list_state.select(selected_index);

    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Calculate width needed for index column (log10(n) + padding)
pub fn calculate_num_width(item_count: usize) -> usize {
    if item_count == 0 {
        2
    } else {
        let digits = (item_count as f64).log10().floor() as usize + 1;
        digits + 1
    }
}

pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.chars().count() > max_width {
        let truncated: String = s.chars().take(max_width.saturating_sub(3)).collect();
        format!("{}...", truncated)
    } else {
        s.to_string()
    }
}

/// First item to draw so that `selected` is visible in a row of items with
/// the given widths. Items left of the selection are kept while they fit.
pub fn visible_window(widths: &[usize], selected: usize, available: usize) -> usize {
    if widths.is_empty() {
        return 0;
    }
    let selected = selected.min(widths.len() - 1);

    let mut start = selected;
    let mut used = widths[selected];
    while start > 0 && used + widths[start - 1] <= available {
        start -= 1;
        used += widths[start];
    }
    start
}

/// Popup area centered in `area`, clamped to fit inside it
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width) / 2,
        y: area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    }
}
