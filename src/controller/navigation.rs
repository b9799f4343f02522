//! Search input and storefront navigation

use crate::model::ActiveSection;

use super::AppController;

impl AppController {
    pub async fn on_search_change(&self, text: String) {
        let mut model = self.model.lock().await;
        tracing::debug!(query = %text, "Search query changed");
        model.update_search_query(text);
    }

    pub async fn append_to_search(&self, c: char) {
        let mut model = self.model.lock().await;
        model.append_to_search(c);
        tracing::debug!(query = %model.get_ui_state().search_query, "Search query changed");
    }

    pub async fn backspace_search(&self) {
        let mut model = self.model.lock().await;
        model.backspace_search();
        tracing::debug!(query = %model.get_ui_state().search_query, "Search query changed");
    }

    pub async fn focus(&self, section: ActiveSection) {
        let mut model = self.model.lock().await;
        model.set_active_section(section);
    }

    pub async fn cycle_focus(&self, backward: bool) {
        let mut model = self.model.lock().await;
        if backward {
            model.cycle_section_backward();
        } else {
            model.cycle_section_forward();
        }
        tracing::debug!(section = ?model.get_ui_state().active_section, "Focus changed");
    }
}
