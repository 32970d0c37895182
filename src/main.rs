//! Extensions TUI - Actor-based extension manager
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering and cross-fades
//! - App Layer - central state machine processing events

use std::io;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;
use tokio::sync::mpsc;

use extensions_tui::app::{AppActor, AppState};
use extensions_tui::constants::{ANIMATION_POLL_MS, IDLE_POLL_MS, LOG_FILE};
use extensions_tui::dataset::Dataset;
use extensions_tui::messages::ui_events::key_to_ui_event;
use extensions_tui::messages::{RenderState, RenderUpdate, UiEvent};
use extensions_tui::settings::SettingsStore;
use extensions_tui::transition::{CrossFade, TransitionSupport};
use extensions_tui::ui;

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Settings and dataset are loaded before the terminal is taken over
    let store = SettingsStore::new();
    let settings = store.load();
    let dataset = Dataset::load(settings.dataset.as_deref()).context("failed to load extensions")?;
    let transitions = TransitionSupport::detect(settings.transitions, settings.transition_ms);
    tracing::info!(theme = settings.theme.as_str(), ?transitions, "Starting");

    let state = AppState::new(&dataset, settings).with_store(store);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _terminal_guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderUpdate>();

    // Spawn app actor
    let app_actor = AppActor::new(state, transitions, render_tx);
    let app_handle = tokio::spawn(app_actor.run(ui_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    let _ = app_handle.await;
    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderUpdate>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();
    let mut fade: Option<CrossFade<RenderState>> = None;

    loop {
        let now = Instant::now();
        if fade.as_ref().is_some_and(|fade| fade.is_finished(now)) {
            fade = None;
        }

        // Draw with current state, or the transition frame while one plays
        terminal.draw(|f| match &fade {
            Some(fade) => ui::draw_fade(f, fade, now),
            None => ui::draw_ui(f, &current_state),
        })?;

        let poll_ms = if fade.is_some() { ANIMATION_POLL_MS } else { IDLE_POLL_MS };

        // Poll for events with timeout
        if event::poll(Duration::from_millis(poll_ms))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) =
                    key_to_ui_event(key, current_state.dialog.is_some(), current_state.show_help)
                {
                    let quit = matches!(event, UiEvent::Quit);
                    let _ = ui_tx.send(event);
                    if quit {
                        break;
                    }
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(update) = render_rx.try_recv() {
            match update {
                RenderUpdate::State(state) => current_state = state,
                RenderUpdate::Transition(transition) => {
                    let started = transition.start(Instant::now());
                    current_state = started.after().clone();
                    fade = Some(started);
                }
            }
        }
    }

    Ok(())
}
