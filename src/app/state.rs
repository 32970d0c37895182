//! App state - owns every piece of view state, no terminal I/O

use crate::dataset::Dataset;
use crate::dialog::RemoveDialog;
use crate::extensions::ExtensionList;
use crate::filter::{derived_view, FilterState};
use crate::messages::RenderState;
use crate::settings::{Settings, SettingsStore};
use crate::theme::{ColorSchemeSignal, TerminalColorScheme, ThemeState};

/// Main application state
pub struct AppState {
    // Owned state objects, mutated only through their own methods
    pub extensions: ExtensionList,
    pub filter: FilterState,
    pub theme: ThemeState,
    pub dialog: RemoveDialog,

    // Cursor over the derived view
    pub selected: usize,

    // Popups and status line
    pub show_help: bool,
    pub notice: Option<String>,

    // Settings, written back when the theme changes
    pub settings: Settings,
    pub(crate) store: Option<SettingsStore>,

    pub(crate) signal: Box<dyn ColorSchemeSignal>,
}

impl AppState {
    pub fn new(dataset: &Dataset, settings: Settings) -> Self {
        AppState {
            extensions: ExtensionList::from_dataset(dataset),
            filter: FilterState::default(),
            theme: ThemeState::new(settings.theme),
            dialog: RemoveDialog::default(),
            selected: 0,
            show_help: false,
            notice: None,
            settings,
            store: None,
            signal: Box::new(TerminalColorScheme),
        }
    }

    /// Persist theme changes through `store`
    pub fn with_store(mut self, store: SettingsStore) -> Self {
        self.store = Some(store);
        self
    }

    /// Resolve `system` against another color-scheme signal
    pub fn with_signal(mut self, signal: impl ColorSchemeSignal + 'static) -> Self {
        self.signal = Box::new(signal);
        self
    }

    /// Number of records in the derived view
    pub fn visible_len(&self) -> usize {
        self.extensions
            .records()
            .iter()
            .filter(|record| crate::filter::matches_filter(record, self.filter.value()))
            .count()
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        let records = self.extensions.records();
        RenderState {
            filter: self.filter.value(),
            visible: derived_view(records, self.filter.value()),
            selected: self.selected,
            total: records.len(),
            active_count: records.iter().filter(|record| record.is_active).count(),
            theme_preference: self.theme.preference(),
            resolved_theme: self.theme.resolve(&*self.signal),
            dialog: self.dialog.pending().cloned(),
            dialog_busy: self.dialog.is_busy(),
            show_help: self.show_help,
            notice: self.notice.clone(),
        }
    }
}
