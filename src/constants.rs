//! Application constants
//!
//! Centralized location for magic strings and configuration defaults.

/// Application name
pub const APP_NAME: &str = "Extensions";

/// Heading above the filter selector
pub const LIST_TITLE: &str = "Extensions List";

/// Default cross-fade length for filter changes
pub const DEFAULT_TRANSITION_MS: u64 = 240;

/// Log file written next to the working directory
pub const LOG_FILE: &str = "extensions-tui.log";

/// Input poll interval while idle
pub const IDLE_POLL_MS: u64 = 50;

/// Input poll interval while a transition is playing (~60fps)
pub const ANIMATION_POLL_MS: u64 = 16;
