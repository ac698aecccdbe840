//! Pure state transitions: (InteractionState, Action) → Transition.
//!
//! This is the core logic of the TUI. Fully testable without a terminal.
//! Each phase defines which actions it accepts. Unhandled actions return
//! the current state unchanged (no-op); out-of-range steps clamp rather
//! than fail. The control label and nudge-message policies live here too,
//! as pure functions the rendering layer consumes.

use super::state::{Action, Effect, InteractionState, Phase, Transition};

/// Decline presses after which the decline control turns affirmative.
pub const DECLINE_CONVERSION: u32 = 4;

/// Pure state transition function.
///
/// Given the current state, an action, and the deck length, produces the
/// next transition. The effects boundary interprets the result.
pub fn update(state: InteractionState, action: &Action, deck_len: usize) -> Transition {
    match state.phase(deck_len) {
        Phase::Prompt => update_prompt(state, action),
        Phase::Browsing => update_browsing(state, action, deck_len),
        Phase::Completed => update_completed(state, action),
        Phase::Restarting => update_restarting(state, action),
    }
}

// ============================================================================
// PER-PHASE HANDLERS
// ============================================================================

/// Prompt: Affirm accepts; Decline nudges until it converts to an accept.
fn update_prompt(state: InteractionState, action: &Action) -> Transition {
    match action {
        Action::Affirm => accept(state),
        Action::Decline => {
            if state.decline_count < DECLINE_CONVERSION {
                let mut next = state;
                next.decline_count += 1;
                Transition::State(next)
            } else {
                // The decline control has converted; pressing it accepts.
                accept(state)
            }
        }
        Action::Reset => reset(state),
        Action::Quit => Transition::Quit,
        _ => Transition::State(state),
    }
}

/// Browsing: step through the cards; Forward past the last card completes.
fn update_browsing(state: InteractionState, action: &Action, deck_len: usize) -> Transition {
    match action {
        Action::Back => step_back(state),
        Action::Forward | Action::Affirm => {
            let mut next = state;
            next.page_index = (next.page_index + 1).min(deck_len);
            Transition::State(next)
        }
        Action::Reset => reset(state),
        Action::Quit => Transition::Quit,
        _ => Transition::State(state),
    }
}

/// Completed: Forward requests the restart effect; Back reopens the last card.
fn update_completed(state: InteractionState, action: &Action) -> Transition {
    match action {
        Action::Forward | Action::Affirm => Transition::Effect(Effect::ScheduleRestart),
        Action::Back => step_back(state),
        Action::Reset => reset(state),
        Action::Quit => Transition::Quit,
        _ => Transition::State(state),
    }
}

/// Restarting: navigation is disabled for the whole window.
/// Reset still works and invalidates the pending timer.
fn update_restarting(state: InteractionState, action: &Action) -> Transition {
    match action {
        Action::Reset => reset(state),
        Action::Quit => Transition::Quit,
        _ => Transition::State(state),
    }
}

// ============================================================================
// SHARED STEPS
// ============================================================================

/// Accept the prompt: reveal the week at its first card.
/// `decline_count` is deliberately preserved; only Reset clears it.
fn accept(state: InteractionState) -> Transition {
    let mut next = state;
    next.accepted = true;
    next.page_index = 0;
    Transition::State(next)
}

/// Step back one card, clamped at the first.
fn step_back(state: InteractionState) -> Transition {
    let mut next = state;
    next.page_index = next.page_index.saturating_sub(1);
    Transition::State(next)
}

/// Full reset to the prompt.
fn reset(state: InteractionState) -> Transition {
    let mut next = state;
    next.reset();
    Transition::State(next)
}

// ============================================================================
// CONTROL POLICIES
// ============================================================================

/// Label for the forward control: Next through the cards, Finish on the
/// last one, Restart on the completed page.
pub fn forward_label(state: &InteractionState, deck_len: usize) -> &'static str {
    if state.page_index + 1 < deck_len {
        "Next"
    } else if state.page_index + 1 == deck_len {
        "Finish"
    } else {
        "Restart"
    }
}

/// Back is unavailable on the first card and during the restart window.
pub fn back_enabled(state: &InteractionState) -> bool {
    state.page_index > 0 && !state.transitioning
}

/// Forward is unavailable only during the restart window.
pub fn forward_enabled(state: &InteractionState) -> bool {
    !state.transitioning
}

/// Whether the decline control now reads (and acts) as "Yes".
pub fn decline_converted(decline_count: u32) -> bool {
    decline_count >= DECLINE_CONVERSION
}

/// Tiered nudge shown under the prompt controls.
///
/// Exactly four tiers; nothing changes past tier 3 except the decline
/// control itself converting at [`DECLINE_CONVERSION`].
pub fn decline_message(decline_count: u32) -> Option<&'static str> {
    match decline_count {
        0 => None,
        1 => Some("Take your time — I can wait."),
        2 => Some("Still no? That’s okay. I’ll ask nicely again."),
        _ => Some("I’m still here. The “Yes” button looks pretty cute though."),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const LEN: usize = 8;

    fn prompt() -> InteractionState {
        InteractionState::new()
    }

    fn browsing(page_index: usize) -> InteractionState {
        let mut state = InteractionState::new();
        state.accepted = true;
        state.page_index = page_index;
        state
    }

    fn completed() -> InteractionState {
        browsing(LEN)
    }

    fn assume_state(transition: Transition) -> InteractionState {
        match transition {
            Transition::State(state) => state,
            other => panic!("expected Transition::State, got {:?}", other),
        }
    }

    // -- Prompt --

    #[test]
    fn affirm_accepts_at_first_card() {
        let next = assume_state(update(prompt(), &Action::Affirm, LEN));
        assert!(next.accepted);
        assert_eq!(next.page_index, 0);
    }

    #[test]
    fn affirm_accepts_regardless_of_prior_declines() {
        let mut state = prompt();
        state.decline_count = 3;
        let next = assume_state(update(state, &Action::Affirm, LEN));
        assert!(next.accepted);
        assert_eq!(next.page_index, 0);
        assert_eq!(next.decline_count, 3);
    }

    #[test]
    fn decline_count_tracks_presses() {
        let mut state = prompt();
        for expected in 1..=4u32 {
            state = assume_state(update(state, &Action::Decline, LEN));
            assert!(!state.accepted);
            assert_eq!(state.decline_count, expected);
        }
    }

    #[test]
    fn fifth_decline_accepts_instead() {
        let mut state = prompt();
        for _ in 0..4 {
            state = assume_state(update(state, &Action::Decline, LEN));
        }
        assert_eq!(state.decline_count, 4);
        assert!(decline_converted(state.decline_count));

        let next = assume_state(update(state, &Action::Decline, LEN));
        assert!(next.accepted);
        assert_eq!(next.page_index, 0);
        // Acceptance does not clear the decline tally.
        assert_eq!(next.decline_count, 4);
    }

    #[test]
    fn prompt_ignores_navigation_actions() {
        for action in [Action::Back, Action::Forward] {
            let next = assume_state(update(prompt(), &action, LEN));
            assert_eq!(next, prompt());
        }
    }

    #[test]
    fn prompt_reset_clears_the_decline_tally() {
        let mut state = prompt();
        state.decline_count = 3;
        let next = assume_state(update(state, &Action::Reset, LEN));
        assert_eq!(next.decline_count, 0);
        assert!(!next.accepted);
    }

    #[test]
    fn prompt_quit() {
        assert_eq!(update(prompt(), &Action::Quit, LEN), Transition::Quit);
    }

    // -- Browsing --

    #[test]
    fn forward_steps_through_every_card() {
        let mut state = browsing(0);
        for expected in 1..LEN {
            state = assume_state(update(state, &Action::Forward, LEN));
            assert_eq!(state.page_index, expected);
        }
    }

    #[test]
    fn forward_from_last_card_completes() {
        let next = assume_state(update(browsing(LEN - 1), &Action::Forward, LEN));
        assert_eq!(next.page_index, LEN);
        assert_eq!(next.phase(LEN), Phase::Completed);
    }

    #[test]
    fn back_steps_toward_the_first_card() {
        let next = assume_state(update(browsing(3), &Action::Back, LEN));
        assert_eq!(next.page_index, 2);
    }

    #[test]
    fn back_at_first_card_stays_put() {
        let mut state = browsing(0);
        for _ in 0..3 {
            state = assume_state(update(state, &Action::Back, LEN));
            assert_eq!(state.page_index, 0);
        }
    }

    #[test]
    fn affirm_advances_like_forward_while_browsing() {
        let next = assume_state(update(browsing(2), &Action::Affirm, LEN));
        assert_eq!(next.page_index, 3);
    }

    #[test]
    fn browsing_decline_is_a_no_op() {
        let next = assume_state(update(browsing(2), &Action::Decline, LEN));
        assert_eq!(next, browsing(2));
    }

    #[test]
    fn browsing_reset_returns_to_prompt() {
        let mut state = browsing(5);
        state.decline_count = 2;
        let next = assume_state(update(state, &Action::Reset, LEN));
        assert!(!next.accepted);
        assert_eq!(next.page_index, 0);
        assert_eq!(next.decline_count, 0);
    }

    // -- Completed --

    #[test]
    fn completed_forward_requests_the_restart_effect() {
        let result = update(completed(), &Action::Forward, LEN);
        assert_eq!(result, Transition::Effect(Effect::ScheduleRestart));
    }

    #[test]
    fn completed_back_reopens_the_last_card() {
        let next = assume_state(update(completed(), &Action::Back, LEN));
        assert_eq!(next.page_index, LEN - 1);
        assert_eq!(next.phase(LEN), Phase::Browsing);
    }

    #[test]
    fn completed_reset_returns_to_prompt() {
        let next = assume_state(update(completed(), &Action::Reset, LEN));
        assert_eq!(next.phase(LEN), Phase::Prompt);
    }

    // -- Restarting --

    #[test]
    fn restarting_ignores_navigation() {
        let mut state = completed();
        state.begin_restart();

        for action in [Action::Forward, Action::Back, Action::Affirm, Action::Decline] {
            let next = assume_state(update(state, &action, LEN));
            assert_eq!(next, state);
        }
    }

    #[test]
    fn restarting_reset_cancels_the_window() {
        let mut state = completed();
        let token = state.begin_restart();

        let mut next = assume_state(update(state, &Action::Reset, LEN));
        assert_eq!(next.phase(LEN), Phase::Prompt);

        // The timer armed before the reset must no longer land.
        next.finish_restart(token);
        assert_eq!(next.phase(LEN), Phase::Prompt);
        assert_eq!(next.page_index, 0);
    }

    #[test]
    fn restarting_quit() {
        let mut state = completed();
        state.begin_restart();
        assert_eq!(update(state, &Action::Quit, LEN), Transition::Quit);
    }

    // -- Full walk --

    #[test]
    fn full_week_walkthrough() {
        // Decline four times, accept via the converted control, walk all
        // eight cards, finish, restart.
        let mut state = prompt();
        for _ in 0..4 {
            state = assume_state(update(state, &Action::Decline, LEN));
        }
        state = assume_state(update(state, &Action::Decline, LEN));
        assert!(state.accepted);

        for _ in 0..7 {
            state = assume_state(update(state, &Action::Forward, LEN));
        }
        assert_eq!(state.page_index, 7);
        assert_eq!(forward_label(&state, LEN), "Finish");

        state = assume_state(update(state, &Action::Forward, LEN));
        assert_eq!(state.page_index, 8);
        assert_eq!(forward_label(&state, LEN), "Restart");

        assert_eq!(
            update(state, &Action::Forward, LEN),
            Transition::Effect(Effect::ScheduleRestart)
        );
    }

    // -- Policies --

    #[test]
    fn forward_label_by_position() {
        assert_eq!(forward_label(&browsing(0), LEN), "Next");
        assert_eq!(forward_label(&browsing(6), LEN), "Next");
        assert_eq!(forward_label(&browsing(7), LEN), "Finish");
        assert_eq!(forward_label(&browsing(8), LEN), "Restart");
    }

    #[test]
    fn back_disabled_at_first_card_and_while_restarting() {
        assert!(!back_enabled(&browsing(0)));
        assert!(back_enabled(&browsing(1)));

        let mut state = completed();
        assert!(back_enabled(&state));
        state.begin_restart();
        assert!(!back_enabled(&state));
    }

    #[test]
    fn forward_disabled_only_while_restarting() {
        assert!(forward_enabled(&browsing(0)));
        assert!(forward_enabled(&completed()));

        let mut state = completed();
        state.begin_restart();
        assert!(!forward_enabled(&state));
    }

    #[test]
    fn decline_message_has_exactly_four_tiers() {
        assert_eq!(decline_message(0), None);

        let one = decline_message(1).unwrap();
        let two = decline_message(2).unwrap();
        let three = decline_message(3).unwrap();
        assert_ne!(one, two);
        assert_ne!(two, three);

        // Tier 3 is final: further declines keep the same message.
        assert_eq!(decline_message(4), decline_message(3));
        assert_eq!(decline_message(17), decline_message(3));
    }

    #[test]
    fn decline_converts_at_four() {
        assert!(!decline_converted(3));
        assert!(decline_converted(4));
        assert!(decline_converted(5));
    }
}
