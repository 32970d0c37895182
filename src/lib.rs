//! # Extensions TUI
//!
//! A keyboard-driven terminal manager for a list of extensions.
//!
//! ## Features
//! - Extension cards with an active switch
//! - All / Active / Inactive filter with a cross-fade transition
//! - Removal behind a confirmation dialog
//! - Light / dark / system theme, remembered between runs
//! - Bundled dataset, or a JSON file named in the settings
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)

pub mod models;
pub mod constants;
pub mod dataset;
pub mod extensions;
pub mod filter;
pub mod theme;
pub mod dialog;
pub mod transition;
pub mod settings;
pub mod messages;
pub mod app;
pub mod ui;

// Re-export commonly used types
pub use models::{ExtensionRecord, FilterValue, ResolvedTheme, ThemePreference};
pub use dataset::Dataset;
pub use extensions::ExtensionList;
pub use filter::{derived_view, empty_message, FilterState};
pub use theme::{ColorSchemeSignal, ThemeState};
pub use dialog::RemoveDialog;
pub use transition::{TransitionSupport, ViewTransition};
pub use settings::{Settings, SettingsStore};
pub use messages::{UiEvent, RenderState, RenderUpdate};
pub use app::{AppState, AppActor};
