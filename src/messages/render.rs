//! Render state - data structure sent from App layer to UI for rendering

use crate::dialog::PendingRemoval;
use crate::models::{ExtensionRecord, FilterValue, ResolvedTheme, ThemePreference};
use crate::theme::Palette;
use crate::transition::ViewTransition;

/// Complete state needed by the UI to render
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    // Derived view
    pub filter: FilterValue,
    pub visible: Vec<ExtensionRecord>,
    pub selected: usize,

    // Totals across the whole collection
    pub total: usize,
    pub active_count: usize,

    // Theme
    pub theme_preference: ThemePreference,
    pub resolved_theme: ResolvedTheme,

    // Removal dialog
    pub dialog: Option<PendingRemoval>,
    pub dialog_busy: bool,

    // Popups and status line
    pub show_help: bool,
    pub notice: Option<String>,
}

impl RenderState {
    pub fn palette(&self) -> Palette {
        Palette::for_theme(self.resolved_theme)
    }
}

impl Default for RenderState {
    fn default() -> Self {
        RenderState {
            filter: FilterValue::All,
            visible: Vec::new(),
            selected: 0,
            total: 0,
            active_count: 0,
            theme_preference: ThemePreference::System,
            resolved_theme: ResolvedTheme::Dark,
            dialog: None,
            dialog_busy: false,
            show_help: false,
            notice: None,
        }
    }
}

/// What the App layer sends after handling an event
#[derive(Debug, Clone)]
pub enum RenderUpdate {
    /// Replace the current state
    State(RenderState),
    /// Replace the current state, cross-fading from `before`
    Transition(ViewTransition<RenderState>),
}

impl RenderUpdate {
    /// The state the UI ends up showing
    pub fn final_state(&self) -> &RenderState {
        match self {
            RenderUpdate::State(state) => state,
            RenderUpdate::Transition(transition) => &transition.after,
        }
    }
}
