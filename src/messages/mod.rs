//! Message types for inter-layer communication in the actor-based architecture.
//!
//! This module defines all messages that flow between the UI and App layers.

pub mod ui_events;
pub mod render;

pub use ui_events::UiEvent;
pub use render::{RenderState, RenderUpdate};
