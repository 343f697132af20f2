// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, fetch completions)
// - Rendering the UI

pub mod app;
pub mod components;
pub mod layout;
pub mod traits;
pub mod views;

use crate::card::FetchOutcome;
use crate::config::Config;
use crate::fetch::ProfileClient;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::{App, View};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Redraw cadence; also drives the spinner and skeleton shimmer
const TICK: Duration = Duration::from_millis(100);

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done (also when the loop itself failed).
pub async fn run_tui(config: Config, client: ProfileClient, log_buffer: LogBuffer) -> Result<()> {
    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    let (fetch_tx, mut fetch_rx) = mpsc::channel(8);
    let mut app = App::new(config, client, log_buffer, fetch_tx);
    app.start();

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &mut fetch_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources with tokio::select!:
/// 1. Keyboard input (view switching, quit)
/// 2. Timer ticks (animation and periodic redraws)
/// 3. Fetch outcomes from spawned requests
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    fetch_rx: &mut mpsc::Receiver<FetchOutcome>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(TICK);

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            _ = tick_interval.tick() => {
                app.tick_animation();
            }

            Some(outcome) = fetch_rx.recv() => {
                app.on_fetch_outcome(outcome);
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

/// Handle keyboard input (presses only; release/repeat events are ignored)
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    match key_event.code {
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            app.should_quit = true;
        }
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('c') | KeyCode::F(1) => app.set_view(View::Card),
        KeyCode::Char('l') | KeyCode::F(2) => app.set_view(View::Logs),
        KeyCode::Char('?') | KeyCode::F(3) => app.set_view(View::Help),
        KeyCode::Esc if app.view != View::Card => app.set_view(View::Card),
        _ => {}
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Phase;
    use crossterm::event::KeyEventState;
    use ratatui::backend::TestBackend;
    use super::test_support::buffer_text;

    fn test_app() -> (App, mpsc::Receiver<FetchOutcome>) {
        // Nothing listens on the discard port; fetches fail fast
        let config = Config {
            api_url: "http://127.0.0.1:9/api/".to_string(),
            ..Config::default()
        };
        let client = ProfileClient::from_config(&config).unwrap();
        let (tx, rx) = mpsc::channel(8);
        (App::new(config, client, LogBuffer::new(), tx), rx)
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[tokio::test]
    async fn test_view_keys() {
        let (mut app, _rx) = test_app();
        app.start();

        handle_key_event(&mut app, press(KeyCode::Char('l')));
        assert_eq!(app.view, View::Logs);
        assert!(!app.card.is_active());

        handle_key_event(&mut app, press(KeyCode::F(3)));
        assert_eq!(app.view, View::Help);

        handle_key_event(&mut app, press(KeyCode::Esc));
        assert_eq!(app.view, View::Card);
        assert_eq!(app.card.phase(), Phase::Loading);
    }

    #[tokio::test]
    async fn test_quit_keys() {
        let (mut app, _rx) = test_app();
        handle_key_event(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit);

        let (mut app, _rx) = test_app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_release_events_ignored() {
        let (mut app, _rx) = test_app();
        let release = KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        handle_key_event(&mut app, release);
        assert!(!app.should_quit);
    }

    #[tokio::test]
    async fn test_failed_fetch_reaches_error_view() {
        let (mut app, mut rx) = test_app();
        app.start();
        let outcome = rx.recv().await.unwrap();
        app.on_fetch_outcome(outcome);

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| views::draw(f, &app)).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Failed to fetch user data"));
        assert!(text.contains("failed"));
    }

    #[tokio::test]
    async fn test_loading_frame_shows_skeleton_and_status() {
        let (mut app, _rx) = test_app();
        app.start();

        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| views::draw(f, &app)).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains('░'));
        assert!(text.contains("loading"));
        assert!(text.contains("seed abc"));
    }
}
