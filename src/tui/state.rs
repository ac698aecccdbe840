//! TUI state algebra: pure types, zero effects.
//!
//! These types define the entire TUI state space. The transition function
//! and rendering layer both program against them. The interaction state is
//! a flat struct with documented invariants; the logical screen is derived
//! by [`InteractionState::phase`], never stored.

use crossterm::event::KeyEvent;

use crate::art::Art;
use crate::types::CardDeck;

// ============================================================================
// APP EVENTS
// ============================================================================

/// Everything the event loop can receive from its channel.
///
/// Two producers feed a single mpsc channel:
/// - A key reader thread sends `Key` variants
/// - A one-shot restart timer thread sends `RestartElapsed`
#[derive(Debug)]
pub enum AppEvent {
    /// A terminal key event from the crossterm reader thread.
    Key(KeyEvent),
    /// The restart pause elapsed. Carries the generation token captured
    /// when the timer was armed; a stale token must be ignored.
    RestartElapsed { generation: u64 },
}

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Top-level TUI model.
///
/// Owns the immutable deck, the preloaded art, and the single mutable
/// [`InteractionState`]. The effects layer reads this to know what to render.
#[derive(Debug)]
pub struct App {
    /// The single mutable interaction state instance.
    pub state: InteractionState,

    /// The card sequence, fixed for the process lifetime.
    pub deck: CardDeck,

    /// Preloaded card art, parallel to the deck.
    /// `None` renders as a generated placeholder.
    pub art: Vec<Option<Art>>,

    /// Set to true when the app should exit on the next tick.
    pub should_quit: bool,
}

impl App {
    /// Fresh app at the prompt screen.
    pub fn new(deck: CardDeck, art: Vec<Option<Art>>) -> Self {
        App {
            state: InteractionState::new(),
            deck,
            art,
            should_quit: false,
        }
    }
}

/// All mutable interaction state, single instance, single writer.
///
/// Invariants:
/// - `decline_count` only increases, and only while `!accepted`;
///   it resets to 0 only on [`reset`](Self::reset).
/// - `page_index` is only meaningful while `accepted`; it is reset to 0
///   on acceptance and on reset, and never exceeds the deck length.
/// - `transitioning` implies `accepted`; it is always cleared by
///   [`finish_restart`](Self::finish_restart) or [`reset`](Self::reset),
///   never left dangling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionState {
    /// True once the user has confirmed the prompt.
    pub accepted: bool,
    /// Number of decline presses before acceptance.
    pub decline_count: u32,
    /// Zero-based cursor into the deck; `deck.len()` is the completed page.
    pub page_index: usize,
    /// True only during the timed restart window.
    pub transitioning: bool,
    /// Token for pending restart timers. Bumped whenever a pending timer
    /// must be invalidated, so a late callback compares unequal.
    restart_generation: u64,
}

impl InteractionState {
    /// Initial state: prompt showing, nothing declined, nothing browsed.
    pub fn new() -> Self {
        InteractionState {
            accepted: false,
            decline_count: 0,
            page_index: 0,
            transitioning: false,
            restart_generation: 0,
        }
    }

    /// The logical screen this state represents.
    pub fn phase(&self, deck_len: usize) -> Phase {
        if !self.accepted {
            Phase::Prompt
        } else if self.transitioning {
            Phase::Restarting
        } else if self.page_index >= deck_len {
            Phase::Completed
        } else {
            Phase::Browsing
        }
    }

    /// Enter the restart window. Returns the token the timer thread must
    /// echo back in `AppEvent::RestartElapsed`.
    pub fn begin_restart(&mut self) -> u64 {
        self.restart_generation += 1;
        self.transitioning = true;
        self.restart_generation
    }

    /// Leave the restart window and rewind to the first card, but only if
    /// `token` is still current. A stale token (reset happened in between)
    /// leaves the state untouched.
    pub fn finish_restart(&mut self, token: u64) {
        if self.transitioning && token == self.restart_generation {
            self.transitioning = false;
            self.page_index = 0;
        }
    }

    /// Return to the initial prompt, clearing all progress.
    /// Any pending restart timer becomes stale.
    pub fn reset(&mut self) {
        self.accepted = false;
        self.decline_count = 0;
        self.page_index = 0;
        self.transitioning = false;
        self.restart_generation += 1;
    }
}

impl Default for InteractionState {
    fn default() -> Self {
        InteractionState::new()
    }
}

// ============================================================================
// SCREENS
// ============================================================================

/// The logical screen, derived from [`InteractionState`].
///
/// Conceptual states only: nothing is stored per-variant, so the flat
/// struct's invariants stay authoritative.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Showing the yes/no question.
    Prompt,
    /// Showing the card at `page_index`.
    Browsing,
    /// Showing the final summary page (`page_index == deck.len()`).
    Completed,
    /// Transient restart window, auto-exits when the timer fires.
    Restarting,
}

// ============================================================================
// ACTIONS
// ============================================================================

/// Semantic user action, decoupled from raw key events.
///
/// The effects layer maps key presses to Actions.
/// The transition function decides what each Action means per phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Accept the question; also the primary "advance" control.
    Affirm,
    /// Decline the question.
    Decline,
    /// Step back one card.
    Back,
    /// Step forward: next card, finish, or restart.
    Forward,
    /// Return to the prompt and clear all progress.
    Reset,
    /// Quit the application.
    Quit,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Result of a pure state transition.
///
/// The update function returns this. The effects boundary inspects it
/// to decide what to render and which side effects to execute:
/// pure code describes WHAT should happen, effectful code decides HOW.
#[derive(Debug, PartialEq)]
pub enum Transition {
    /// Adopt this state (may equal the current one).
    State(InteractionState),
    /// Quit the application.
    Quit,
    /// Execute a side effect. The effects layer handles it
    /// and updates App state as the effect progresses.
    Effect(Effect),
}

/// Side effect requested by a pure transition.
///
/// Pure code never executes these, it only describes them.
#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    /// Enter the restart window and arm the one-shot timer.
    ScheduleRestart,
}

// ============================================================================
// TESTS
// ============================================================================
