//! Playback control methods

use crate::model::{ActiveSection, Song};

use super::AppController;

impl AppController {
    pub async fn on_play(&self, song: &Song) {
        let mut model = self.model.lock().await;
        model.play(song);
        tracing::info!(song_id = song.id, title = %song.title, category = %song.category, "Playing song");
    }

    pub async fn on_pause(&self) {
        let mut model = self.model.lock().await;
        model.pause();
        tracing::info!("Playback paused");
    }

    pub async fn on_resume(&self) {
        let mut model = self.model.lock().await;
        if model.playback().current_song().is_none() {
            tracing::debug!("Nothing selected, ignoring resume");
            return;
        }
        model.resume();
        tracing::info!("Playback resumed");
    }

    pub async fn toggle_playback(&self) {
        let is_playing = self.model.lock().await.playback().is_playing();
        tracing::debug!(is_playing, "Toggling playback");

        if is_playing {
            self.on_pause().await;
        } else {
            self.on_resume().await;
        }
    }

    pub async fn on_next(&self) {
        let mut model = self.model.lock().await;
        model.next_song();
        if let Some(song) = model.playback().current_song() {
            tracing::info!(song_id = song.id, title = %song.title, "Skipped to next song");
        }
    }

    pub async fn on_previous(&self) {
        let mut model = self.model.lock().await;
        model.previous_song();
        if let Some(song) = model.playback().current_song() {
            tracing::info!(song_id = song.id, title = %song.title, "Skipped to previous song");
        }
    }

    /// Activate the song under the cursor. A section card that is already
    /// playing pauses instead of restarting; trending entries always play.
    pub async fn play_selected(&self) {
        let (selected, pauses_instead) = {
            let model = self.model.lock().await;
            let selected = model.get_selected_song();
            let on_card = model.get_ui_state().active_section == ActiveSection::Sections;
            let pauses_instead = on_card
                && selected
                    .as_ref()
                    .is_some_and(|song| model.playback().is_current_playing(song));
            (selected, pauses_instead)
        };

        match selected {
            Some(_) if pauses_instead => self.on_pause().await,
            Some(song) => self.on_play(&song).await,
            None => tracing::debug!("No song under cursor"),
        }
    }
}
