//! App actor - message loop processing UI events

use tokio::sync::mpsc;

use crate::app::state::AppState;
use crate::messages::{RenderUpdate, UiEvent};
use crate::models::FilterValue;
use crate::transition::{TransitionOutcome, TransitionSupport};

/// App actor that owns the state and answers every event with a render update
pub struct AppActor {
    state: AppState,
    transitions: TransitionSupport,
    render_tx: mpsc::UnboundedSender<RenderUpdate>,
}

impl AppActor {
    pub fn new(
        state: AppState,
        transitions: TransitionSupport,
        render_tx: mpsc::UnboundedSender<RenderUpdate>,
    ) -> Self {
        AppActor {
            state,
            transitions,
            render_tx,
        }
    }

    /// Run the actor message loop
    pub async fn run(mut self, mut ui_rx: mpsc::UnboundedReceiver<UiEvent>) {
        // Send initial render state
        let _ = self
            .render_tx
            .send(RenderUpdate::State(self.state.to_render_state()));

        while let Some(event) = ui_rx.recv().await {
            if matches!(event, UiEvent::Quit) {
                tracing::info!("Quit requested");
                break;
            }
            let update = self.handle_ui_event(event);
            if self.render_tx.send(update).is_err() {
                break;
            }
        }
    }

    /// Apply one UI event and build the update the UI should show
    fn handle_ui_event(&mut self, event: UiEvent) -> RenderUpdate {
        // The UI maps keys from a possibly stale snapshot; the open dialog wins here
        if self.state.dialog.is_open()
            && !matches!(
                event,
                UiEvent::ConfirmRemove | UiEvent::CancelRemove | UiEvent::Quit
            )
        {
            tracing::debug!(?event, "Ignored while removal dialog is open");
            return RenderUpdate::State(self.state.to_render_state());
        }

        match event {
            // Filter changes go through the view transition
            UiEvent::SetFilter(value) => return self.change_filter(value),
            UiEvent::NextFilter => return self.change_filter(self.state.filter.value().next()),
            UiEvent::PrevFilter => return self.change_filter(self.state.filter.value().prev()),

            // Navigation
            UiEvent::SelectNext => self.state.select_next(),
            UiEvent::SelectPrev => self.state.select_prev(),

            // Extensions
            UiEvent::ToggleSelected => self.state.toggle_selected(),
            UiEvent::RequestRemove => self.state.request_remove(),
            UiEvent::ConfirmRemove => self.state.confirm_remove(),
            UiEvent::CancelRemove => self.state.cancel_remove(),

            // Theme
            UiEvent::ToggleTheme => self.state.toggle_theme(),

            // Popups
            UiEvent::ToggleHelp => self.state.toggle_help(),
            UiEvent::CloseHelp => self.state.close_help(),

            UiEvent::Quit => {}
        }

        RenderUpdate::State(self.state.to_render_state())
    }

    /// Set the filter and flush the new state before the transition snapshots it
    fn change_filter(&mut self, value: FilterValue) -> RenderUpdate {
        if value == self.state.filter.value() {
            return RenderUpdate::State(self.state.to_render_state());
        }

        let before = self.state.to_render_state();
        let state = &mut self.state;
        let outcome = self.transitions.run(before, || {
            state.set_filter(value);
            state.to_render_state()
        });

        match outcome {
            TransitionOutcome::Animated(transition) => RenderUpdate::Transition(transition),
            TransitionOutcome::Direct(render) => RenderUpdate::State(render),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::models::ExtensionRecord;
    use crate::settings::Settings;
    use crate::theme::FixedColorScheme;
    use std::time::Duration;

    fn actor(transitions: TransitionSupport) -> (AppActor, mpsc::UnboundedReceiver<RenderUpdate>) {
        let dataset = Dataset::from_records(vec![
            ExtensionRecord::new(1, "A", true),
            ExtensionRecord::new(2, "B", false),
        ]);
        let state = AppState::new(&dataset, Settings::default()).with_signal(FixedColorScheme(true));
        let (render_tx, render_rx) = mpsc::unbounded_channel();
        (AppActor::new(state, transitions, render_tx), render_rx)
    }

    #[test]
    fn test_filter_change_transitions_to_updated_state() {
        let animated = TransitionSupport::Animated {
            duration: Duration::from_millis(100),
        };
        let (mut actor, _rx) = actor(animated);

        match actor.handle_ui_event(UiEvent::SetFilter(FilterValue::Inactive)) {
            RenderUpdate::Transition(transition) => {
                assert_eq!(transition.before.filter, FilterValue::All);
                assert_eq!(transition.before.visible.len(), 2);
                assert_eq!(transition.after.filter, FilterValue::Inactive);
                assert_eq!(transition.after.visible.len(), 1);
                assert_eq!(transition.after.visible[0].name, "B");
            }
            RenderUpdate::State(_) => panic!("expected a transition"),
        }
    }

    #[test]
    fn test_unchanged_filter_skips_transition() {
        let animated = TransitionSupport::Animated {
            duration: Duration::from_millis(100),
        };
        let (mut actor, _rx) = actor(animated);
        let update = actor.handle_ui_event(UiEvent::SetFilter(FilterValue::All));
        assert!(matches!(update, RenderUpdate::State(_)));
    }

    #[test]
    fn test_filter_without_transition_support() {
        let (mut actor, _rx) = actor(TransitionSupport::Unsupported);
        let update = actor.handle_ui_event(UiEvent::NextFilter);
        match update {
            RenderUpdate::State(state) => assert_eq!(state.filter, FilterValue::Active),
            RenderUpdate::Transition(_) => panic!("transitions are unsupported"),
        }
    }

    #[test]
    fn test_open_dialog_ignores_list_events() {
        let animated = TransitionSupport::Animated {
            duration: Duration::from_millis(100),
        };
        let (mut actor, _rx) = actor(animated);
        actor.handle_ui_event(UiEvent::RequestRemove);
        let before = actor.state.to_render_state();
        assert_eq!(before.dialog.as_ref().map(|p| p.name.as_str()), Some("A"));

        for event in [
            UiEvent::ToggleSelected,
            UiEvent::SelectNext,
            UiEvent::RequestRemove,
            UiEvent::SetFilter(FilterValue::Inactive),
            UiEvent::NextFilter,
            UiEvent::ToggleTheme,
            UiEvent::ToggleHelp,
        ] {
            match actor.handle_ui_event(event) {
                RenderUpdate::State(state) => assert_eq!(state, before),
                RenderUpdate::Transition(_) => panic!("no transition while the dialog is open"),
            }
        }

        assert_eq!(actor.state.extensions.get("A").map(|r| r.is_active), Some(true));
        actor.handle_ui_event(UiEvent::ConfirmRemove);
        assert!(actor.state.extensions.get("A").is_none());
        assert!(actor.state.extensions.get("B").is_some());
    }

    #[tokio::test]
    async fn test_run_loop_end_to_end() {
        let (actor, mut render_rx) = actor(TransitionSupport::Unsupported);
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let handle = tokio::spawn(actor.run(ui_rx));

        for event in [
            UiEvent::SelectNext,
            UiEvent::ToggleSelected,
            UiEvent::SelectPrev,
            UiEvent::RequestRemove,
            UiEvent::ConfirmRemove,
            UiEvent::ConfirmRemove,
            UiEvent::SetFilter(FilterValue::Inactive),
            UiEvent::Quit,
        ] {
            ui_tx.send(event).unwrap();
        }
        handle.await.unwrap();

        let mut last = None;
        let mut updates = 0;
        while let Ok(update) = render_rx.try_recv() {
            updates += 1;
            last = Some(update.final_state().clone());
        }
        // Initial state plus one update per event before Quit
        assert_eq!(updates, 8);

        let last = last.unwrap();
        assert_eq!(last.total, 1);
        assert_eq!(last.active_count, 1);
        assert!(last.visible.is_empty());
        assert_eq!(last.filter, FilterValue::Inactive);
        assert!(last.dialog.is_none());
    }
}
