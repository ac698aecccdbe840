//! TUI color semantics and style constants.
//!
//! Centralized theme definitions for the rose-and-pink look.
//! Pure data — consumed by the rendering layer for visual consistency.
//!
//! Color semantics:
//! - Magenta: romance accent (affirmative controls, badges, frames)
//! - Bold white: headings and card titles
//! - Dim: de-emphasized copy (hints, captions, disabled controls)

use ratatui::style::{Color, Modifier, Style};

// ============================================================================
// SEMANTIC STYLES
// ============================================================================

/// Romance accent — magenta.
pub const STYLE_ACCENT: Style = Style::new().fg(Color::Magenta);

/// Affirmative control ("Yes", the forward button) — bold magenta.
pub const STYLE_AFFIRM: Style = Style::new().fg(Color::Magenta).add_modifier(Modifier::BOLD);

/// Neutral control ("No" before it converts) — plain.
pub const STYLE_NEUTRAL: Style = Style::new().fg(Color::White);

/// De-emphasized copy — dark gray.
pub const STYLE_DIM: Style = Style::new().fg(Color::DarkGray);

/// Unavailable control — dark gray, crossed out semantics left to copy.
pub const STYLE_DISABLED: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// UI ELEMENT STYLES
// ============================================================================

/// Title bar / headings.
pub const STYLE_TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);

/// Card title.
pub const STYLE_CARD_TITLE: Style = Style::new().add_modifier(Modifier::BOLD);

/// "Day N" position badge.
pub const STYLE_BADGE: Style = Style::new().fg(Color::Magenta);

/// Image frame border.
pub const STYLE_FRAME: Style = Style::new().fg(Color::Magenta);

/// Footer / help line.
pub const STYLE_HELP: Style = Style::new().fg(Color::DarkGray);

// ============================================================================
// TESTS
// ============================================================================
