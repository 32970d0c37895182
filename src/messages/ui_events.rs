//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::models::FilterValue;

/// Events generated from user input in the UI layer
#[derive(Debug, Clone, PartialEq)]
pub enum UiEvent {
    // List navigation
    SelectNext,
    SelectPrev,

    // Extension actions
    ToggleSelected,
    RequestRemove,

    // Removal dialog
    ConfirmRemove,
    CancelRemove,

    // Filter
    SetFilter(FilterValue),
    NextFilter,
    PrevFilter,

    // Theme
    ToggleTheme,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(key: KeyEvent, dialog_open: bool, show_help: bool) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(UiEvent::Quit);
    }

    // The dialog captures every key until it is closed
    if dialog_open {
        return match key.code {
            KeyCode::Enter | KeyCode::Char('y') => Some(UiEvent::ConfirmRemove),
            KeyCode::Esc | KeyCode::Char('n') => Some(UiEvent::CancelRemove),
            _ => None,
        };
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match key.code {
        KeyCode::Char('q') => Some(UiEvent::Quit),
        KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
        KeyCode::Down | KeyCode::Char('j') => Some(UiEvent::SelectNext),
        KeyCode::Up | KeyCode::Char('k') => Some(UiEvent::SelectPrev),
        KeyCode::Char(' ') | KeyCode::Enter => Some(UiEvent::ToggleSelected),
        KeyCode::Char('d') | KeyCode::Delete => Some(UiEvent::RequestRemove),
        KeyCode::Tab | KeyCode::Right => Some(UiEvent::NextFilter),
        KeyCode::BackTab | KeyCode::Left => Some(UiEvent::PrevFilter),
        KeyCode::Char('a') | KeyCode::Char('1') => Some(UiEvent::SetFilter(FilterValue::All)),
        KeyCode::Char('2') => Some(UiEvent::SetFilter(FilterValue::Active)),
        KeyCode::Char('3') => Some(UiEvent::SetFilter(FilterValue::Inactive)),
        KeyCode::Char('t') => Some(UiEvent::ToggleTheme),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_list_keys() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char(' ')), false, false), Some(UiEvent::ToggleSelected));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('d')), false, false), Some(UiEvent::RequestRemove));
        assert_eq!(
            key_to_ui_event(press(KeyCode::Char('3')), false, false),
            Some(UiEvent::SetFilter(FilterValue::Inactive))
        );
        assert_eq!(key_to_ui_event(press(KeyCode::Tab), false, false), Some(UiEvent::NextFilter));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('t')), false, false), Some(UiEvent::ToggleTheme));
    }

    #[test]
    fn test_dialog_captures_keys() {
        assert_eq!(key_to_ui_event(press(KeyCode::Enter), true, false), Some(UiEvent::ConfirmRemove));
        assert_eq!(key_to_ui_event(press(KeyCode::Esc), true, false), Some(UiEvent::CancelRemove));
        assert_eq!(key_to_ui_event(press(KeyCode::Char('q')), true, false), None);
        assert_eq!(key_to_ui_event(press(KeyCode::Char('t')), true, false), None);
    }

    #[test]
    fn test_help_closes_on_any_key() {
        assert_eq!(key_to_ui_event(press(KeyCode::Char('x')), false, true), Some(UiEvent::CloseHelp));
    }

    #[test]
    fn test_ctrl_c_always_quits() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_ui_event(key, true, false), Some(UiEvent::Quit));
    }

    #[test]
    fn test_release_is_ignored() {
        let mut key = press(KeyCode::Char('t'));
        key.kind = KeyEventKind::Release;
        assert_eq!(key_to_ui_event(key, false, false), None);
    }
}
