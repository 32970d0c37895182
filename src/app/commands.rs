//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::models::{ExtensionRecord, FilterValue};

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn select_next(&mut self) {
        let len = self.visible_len();
        if len > 0 {
            self.selected = (self.selected + 1) % len;
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.visible_len();
        if len > 0 {
            self.selected = self.selected.checked_sub(1).unwrap_or(len - 1);
        }
    }

    /// Keep the cursor inside the derived view after it shrinks
    pub fn clamp_selection(&mut self) {
        let len = self.visible_len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }

    pub fn selected_record(&self) -> Option<ExtensionRecord> {
        let filter = self.filter.value();
        self.extensions
            .records()
            .iter()
            .filter(|record| crate::filter::matches_filter(record, filter))
            .nth(self.selected)
            .cloned()
    }

    // ========================
    // Extensions
    // ========================

    pub fn toggle_selected(&mut self) {
        if let Some(record) = self.selected_record() {
            self.extensions.toggle(&record.name);
            let status = if record.is_active { "disabled" } else { "enabled" };
            self.notice = Some(format!("{} {}", record.name, status));
            self.clamp_selection();
        }
    }

    // ========================
    // Removal dialog
    // ========================

    pub fn request_remove(&mut self) {
        if let Some(record) = self.selected_record() {
            self.dialog.open(record.name, record.logo);
        }
    }

    pub fn confirm_remove(&mut self) {
        let name = self.dialog.pending().map(|pending| pending.name.clone());
        if self.dialog.confirm(&mut self.extensions) {
            if let Some(name) = name {
                self.notice = Some(format!("Removed {}", name));
            }
            self.clamp_selection();
        }
    }

    pub fn cancel_remove(&mut self) {
        self.dialog.cancel();
    }

    // ========================
    // Filter
    // ========================

    pub fn set_filter(&mut self, value: FilterValue) {
        self.filter.set_filter(value);
        self.clamp_selection();
    }

    // ========================
    // Theme
    // ========================

    pub fn toggle_theme(&mut self) {
        self.theme.toggle_theme(&*self.signal);
        self.settings.theme = self.theme.preference();

        if let Some(store) = &self.store {
            if let Err(err) = store.save(&self.settings) {
                tracing::warn!(error = %err, "Failed to save theme preference");
            }
        }
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}
