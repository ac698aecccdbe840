//! TUI effects boundary: event loop, terminal lifecycle, key mapping.
//!
//! This is the only module with runtime side effects. It wires the pure
//! layers (state, update, view) to the real terminal via crossterm and
//! ratatui. Kept minimal: all intelligence lives in the pure layers.
//!
//! Architecture: producer threads feed a single mpsc channel.
//! - Key reader thread: forwards crossterm key events
//! - Restart timer thread: one-shot, sends `RestartElapsed` after the delay
//! The event loop consumes from the channel, dispatching to pure handlers.

use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::art;
use crate::types::RunConfig;

use super::state::{Action, App, AppEvent, Effect, Transition};
use super::update::update;
use super::view::render;

// ============================================================================
// KEY MAPPING
// ============================================================================

/// Map a crossterm key event to a semantic Action.
///
/// The map is global; the transition function decides what each action
/// means in the current phase. Returns None for unmapped keys.
pub fn map_key(key: KeyEvent) -> Option<Action> {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    match key.code {
        // The prompt pair; Enter doubles as the primary control everywhere
        KeyCode::Char('y') | KeyCode::Enter => Some(Action::Affirm),
        KeyCode::Char('n') => Some(Action::Decline),

        // Card navigation
        KeyCode::Left | KeyCode::Char('h') => Some(Action::Back),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char(' ') => Some(Action::Forward),

        // Session controls
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Char('q') => Some(Action::Quit),

        _ => None,
    }
}

// ============================================================================
// TERMINAL LIFECYCLE
// ============================================================================

/// Set up the terminal for TUI mode.
fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore the terminal to normal mode.
fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    Ok(())
}

/// Install a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Best-effort terminal restoration
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

// ============================================================================
// BACKGROUND THREADS
// ============================================================================

/// Spawn a thread that reads crossterm events and forwards key events to the channel.
fn spawn_key_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        loop {
            match event::read() {
                Ok(Event::Key(key)) => {
                    if tx.send(AppEvent::Key(key)).is_err() {
                        break; // receiver dropped, TUI is shutting down
                    }
                }
                Ok(_) => {} // ignore mouse, resize, etc.
                Err(_) => break,
            }
        }
    });
}

/// Spawn the one-shot restart timer.
///
/// Sleeps for the configured delay, then reports back with the generation
/// token captured at arm time. The event loop ignores stale tokens, so a
/// timer armed before a Reset can never corrupt the state.
fn spawn_restart_timer(generation: u64, delay: Duration, tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        thread::sleep(delay);
        let _ = tx.send(AppEvent::RestartElapsed { generation });
    });
}

// ============================================================================
// EVENT LOOP
// ============================================================================

/// Run the TUI event loop.
///
/// This is the main entry point for the TUI. It preloads the card art,
/// sets up the terminal, and runs the event loop until the user quits.
pub fn run(config: RunConfig) -> io::Result<()> {
    let assets_dir = config
        .assets_dir
        .clone()
        .unwrap_or_else(art::default_assets_dir);
    let card_art = art::preload(&config.deck, &assets_dir);

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut app = App::new(config.deck.clone(), card_art);

    let (tx, rx) = mpsc::channel::<AppEvent>();
    spawn_key_reader(tx.clone());

    loop {
        // Render
        terminal.draw(|frame| render(&app, frame))?;

        // Check quit flag
        if app.should_quit {
            break;
        }

        // Block on next event from any producer
        let event = match rx.recv() {
            Ok(e) => e,
            Err(_) => break, // all senders dropped
        };

        match event {
            AppEvent::Key(key) => {
                if let Some(action) = map_key(key) {
                    let transition = update(app.state, &action, app.deck.len());
                    match transition {
                        Transition::State(next) => {
                            app.state = next;
                        }
                        Transition::Quit => {
                            app.should_quit = true;
                        }
                        Transition::Effect(effect) => {
                            handle_effect(effect, &mut app, &config, &tx);
                        }
                    }
                }
            }
            AppEvent::RestartElapsed { generation } => {
                // Pure guard: stale generations fall through unchanged.
                app.state.finish_restart(generation);
            }
        }
    }

    restore_terminal()?;
    Ok(())
}

// ============================================================================
// EFFECT HANDLING
// ============================================================================

/// Handle a side effect requested by a pure transition.
fn handle_effect(effect: Effect, app: &mut App, config: &RunConfig, tx: &mpsc::Sender<AppEvent>) {
    match effect {
        Effect::ScheduleRestart => {
            let generation = app.state.begin_restart();
            spawn_restart_timer(generation, config.restart_delay, tx.clone());
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
