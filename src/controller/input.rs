//! Key event handling

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::model::ActiveSection;
use super::AppController;

impl AppController {
    pub async fn handle_key_event(&self, key: KeyEvent) -> Result<()> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let mut model = self.model.lock().await;

        // Handle help popup
        if model.is_help_popup_open() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('h') | KeyCode::Char('H')) {
                model.hide_help_popup();
            }
            return Ok(());
        }

        let active_section = model.get_ui_state().active_section;

        // Handle search input when in search section
        if active_section == ActiveSection::Search {
            match key.code {
                KeyCode::Tab => {
                    drop(model);
                    self.cycle_focus(key.modifiers.contains(KeyModifiers::SHIFT)).await;
                    return Ok(());
                }
                KeyCode::BackTab => {
                    drop(model);
                    self.cycle_focus(true).await;
                    return Ok(());
                }
                KeyCode::Enter => {
                    model.set_active_section(ActiveSection::Sections);
                    return Ok(());
                }
                KeyCode::Esc => {
                    drop(model);
                    self.on_search_change(String::new()).await;
                    return Ok(());
                }
                KeyCode::Backspace => {
                    drop(model);
                    self.backspace_search().await;
                    return Ok(());
                }
                KeyCode::Char(c) => {
                    if key.modifiers.contains(KeyModifiers::CONTROL) {
                        // Q still quits even in search mode when Ctrl is pressed
                        if c == 'q' || c == 'Q' {
                            model.set_should_quit(true);
                        }
                        return Ok(());
                    }
                    drop(model);
                    self.append_to_search(c).await;
                    return Ok(());
                }
                _ => {}
            }
        }

        if active_section == ActiveSection::Sections {
            match key.code {
                KeyCode::Left => {
                    model.move_song_left();
                    return Ok(());
                }
                KeyCode::Right => {
                    model.move_song_right();
                    return Ok(());
                }
                KeyCode::Esc => {
                    drop(model);
                    self.on_search_change(String::new()).await;
                    return Ok(());
                }
                _ => {}
            }
        }

        // Global keybindings
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                model.set_should_quit(true);
            }
            KeyCode::Tab => {
                drop(model);
                self.cycle_focus(key.modifiers.contains(KeyModifiers::SHIFT)).await;
            }
            KeyCode::BackTab => {
                drop(model);
                self.cycle_focus(true).await;
            }
            KeyCode::Up => {
                model.move_selection_up();
            }
            KeyCode::Down => {
                model.move_selection_down();
            }
            KeyCode::Enter => {
                drop(model);
                self.play_selected().await;
            }
            // Play/Pause toggle
            KeyCode::Char(' ') => {
                drop(model);
                self.toggle_playback().await;
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                drop(model);
                self.on_next().await;
            }
            KeyCode::Char('p') | KeyCode::Char('P') => {
                drop(model);
                self.on_previous().await;
            }
            KeyCode::Char('/') => {
                drop(model);
                self.focus(ActiveSection::Search).await;
            }
            KeyCode::Char('h') | KeyCode::Char('H') => {
                model.show_help_popup();
            }
            _ => {}
        }
        Ok(())
    }
}
