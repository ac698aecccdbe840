//! Pure rendering: map App state to ratatui widget trees.
//!
//! Each screen has a dedicated render function. The main `render()`
//! dispatches on the derived phase. Widget-building functions are pure
//! (state in, widgets out); the only effect is Frame::render_widget()
//! which writes to the terminal buffer.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use crate::art::{self, Art};
use crate::types::CardItem;

use super::state::{App, InteractionState, Phase};
use super::theme;
use super::update::{
    back_enabled, decline_converted, decline_message, forward_enabled, forward_label,
};

/// Widest the card (image frame included) is allowed to grow.
const CARD_MAX_WIDTH: u16 = 64;

// ============================================================================
// DISPATCH
// ============================================================================

/// Render the current screen to the terminal frame.
pub fn render(app: &App, frame: &mut Frame) {
    let area = frame.area();

    // Common layout: title bar at top, content in middle, help at bottom
    let chunks = Layout::vertical([
        Constraint::Length(1), // title
        Constraint::Min(0),    // content
        Constraint::Length(1), // help
    ])
    .split(area);

    let phase = app.state.phase(app.deck.len());

    frame.render_widget(render_title(phase), chunks[0]);
    frame.render_widget(render_help(&app.state, app.deck.len()), chunks[2]);

    match phase {
        Phase::Prompt => render_prompt(&app.state, frame, chunks[1]),
        Phase::Browsing | Phase::Completed | Phase::Restarting => {
            render_week(app, frame, chunks[1]);
        }
    }
}

// ============================================================================
// SHARED LAYOUT
// ============================================================================

/// Title bar showing the app name or week context.
fn render_title(phase: Phase) -> Paragraph<'static> {
    let title_text = match phase {
        Phase::Prompt => "valentine-week",
        Phase::Browsing => "Valentine Week",
        Phase::Completed => "Valentine Week — Complete",
        Phase::Restarting => "Valentine Week — Restarting",
    };

    Paragraph::new(Line::from(Span::styled(title_text, theme::STYLE_TITLE)))
}

/// Help line showing available keybindings for the current screen.
fn render_help(state: &InteractionState, deck_len: usize) -> Paragraph<'static> {
    let help_text = match state.phase(deck_len) {
        Phase::Prompt => {
            if decline_converted(state.decline_count) {
                "[y] Yes  [n] Yes  [q] quit".to_string()
            } else {
                "[y] Yes  [n] No  [q] quit".to_string()
            }
        }
        Phase::Browsing | Phase::Completed => format!(
            "[←] Back  [→] {}  [r] Reset  [q] quit",
            forward_label(state, deck_len)
        ),
        Phase::Restarting => "[r] Reset  [q] quit".to_string(),
    };

    Paragraph::new(Line::from(Span::styled(help_text, theme::STYLE_HELP)))
}

// ============================================================================
// SCREEN: PROMPT
// ============================================================================

fn render_prompt(state: &InteractionState, frame: &mut Frame, area: Rect) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled("  ❤️", theme::STYLE_ACCENT)),
        Line::from(""),
        Line::from(Span::styled(
            "  Will you be my Valentine?",
            theme::STYLE_TITLE,
        )),
        Line::from(Span::styled(
            "  (No Valentine content will appear until you press “Yes”.)",
            theme::STYLE_DIM,
        )),
        Line::from(""),
        render_prompt_controls(state.decline_count),
    ];

    if let Some(message) = decline_message(state.decline_count) {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            format!("  {}", message),
            theme::STYLE_DIM,
        )));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// The yes/no control pair. The decline control converts to a second
/// affirmative once the nudging is exhausted.
fn render_prompt_controls(decline_count: u32) -> Line<'static> {
    let decline = if decline_converted(decline_count) {
        Span::styled("[ Yes ]", theme::STYLE_AFFIRM)
    } else {
        Span::styled("[ No ]", theme::STYLE_NEUTRAL)
    };

    Line::from(vec![
        Span::raw("  "),
        Span::styled("[ Yes ]", theme::STYLE_AFFIRM),
        Span::raw("   "),
        decline,
    ])
}

// ============================================================================
// SCREEN: WEEK (browsing / completed / restarting)
// ============================================================================

fn render_week(app: &App, frame: &mut Frame, area: Rect) {
    let deck_len = app.deck.len();
    let state = &app.state;

    let chunks = Layout::vertical([
        Constraint::Length(4), // header + progress
        Constraint::Min(0),    // card / summary / transition block
        Constraint::Length(1), // back-forward controls
    ])
    .split(area);

    frame.render_widget(render_week_header(state, app, deck_len), chunks[0]);
    frame.render_widget(render_week_controls(state, deck_len), chunks[2]);

    match state.phase(deck_len) {
        Phase::Restarting => render_restarting(frame, chunks[1]),
        Phase::Completed => render_completed(frame, chunks[1]),
        _ => {
            if let Some(item) = app.deck.get(state.page_index) {
                let card_art = app.art.get(state.page_index).and_then(|a| a.as_ref());
                render_card(item, state.page_index + 1, card_art, frame, chunks[1]);
            }
        }
    }
}

/// "You said yes" framing, reset hint, and the progress line.
fn render_week_header(state: &InteractionState, app: &App, deck_len: usize) -> Paragraph<'static> {
    // The symbol tracks the current card; on the completed page it sticks
    // to the last card.
    let shown_day = (state.page_index + 1).min(deck_len);
    let symbol = app
        .deck
        .get(state.page_index.min(deck_len - 1))
        .map(|c| c.symbol.clone())
        .unwrap_or_default();

    let lines = vec![
        Line::from(Span::styled("  You said yes.", theme::STYLE_ACCENT)),
        Line::from(Span::styled(
            "  Here’s our Valentine Week",
            theme::STYLE_TITLE,
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                format!("  Day {} of {}", shown_day, deck_len),
                theme::STYLE_DIM,
            ),
            Span::raw("    "),
            Span::raw(symbol),
        ]),
    ];

    Paragraph::new(lines)
}

/// The Back / forward control pair with availability styling.
fn render_week_controls(state: &InteractionState, deck_len: usize) -> Paragraph<'static> {
    let back = if back_enabled(state) {
        Span::styled("[ Back ]", theme::STYLE_NEUTRAL)
    } else {
        Span::styled("[ Back ]", theme::STYLE_DISABLED)
    };

    let label = forward_label(state, deck_len);
    let forward = if forward_enabled(state) {
        Span::styled(format!("[ {} ]", label), theme::STYLE_AFFIRM)
    } else {
        Span::styled(format!("[ {} ]", label), theme::STYLE_DISABLED)
    };

    Paragraph::new(Line::from(vec![
        Span::raw("  "),
        back,
        Span::raw("   "),
        forward,
    ]))
}

// ============================================================================
// CARD RENDERER
// ============================================================================

/// Render one card: fixed-aspect image frame, symbol badge, title,
/// position badge, caption. Stateless and side-effect-free.
fn render_card(
    item: &CardItem,
    day_number: usize,
    card_art: Option<&Art>,
    frame: &mut Frame,
    area: Rect,
) {
    let frame_width = area.width.min(CARD_MAX_WIDTH);
    let art_cols = frame_width.saturating_sub(2) as usize;

    // 16:9 visual aspect; terminal cells are roughly twice as tall as wide,
    // so rows = cols * 9 / 32.
    let ideal_rows = art_cols * 9 / 32;
    let available_rows = area.height.saturating_sub(2 + 3) as usize;
    let art_rows = ideal_rows.min(available_rows);

    let image_height = if art_rows > 0 { art_rows as u16 + 2 } else { 0 };
    let chunks = Layout::vertical([
        Constraint::Length(image_height), // bordered image frame
        Constraint::Min(0),               // badge, title, caption
    ])
    .split(area);

    if art_rows > 0 {
        let centered = Layout::horizontal([
            Constraint::Min(0),
            Constraint::Length(frame_width),
            Constraint::Min(0),
        ])
        .split(chunks[0]);

        let image_lines: Vec<Line> = match card_art {
            Some(a) => art::fit(a, art_cols, art_rows, item.fit_mode),
            None => art::placeholder(&item.symbol, art_cols, art_rows),
        }
        .into_iter()
        .map(Line::from)
        .collect();

        let image = Paragraph::new(image_lines)
            .block(Block::bordered().border_style(theme::STYLE_FRAME));
        frame.render_widget(image, centered[1]);
    }

    let details = vec![
        Line::from(""),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(item.symbol.clone(), theme::STYLE_ACCENT),
            Span::raw("  "),
            Span::styled(item.title.clone(), theme::STYLE_CARD_TITLE),
            Span::raw("  "),
            Span::styled(format!("Day {}", day_number), theme::STYLE_BADGE),
        ]),
        Line::from(vec![
            Span::raw("  "),
            Span::styled(item.caption.clone(), theme::STYLE_DIM),
        ]),
    ];

    let paragraph = Paragraph::new(details).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, chunks[1]);
}

// ============================================================================
// SCREEN: COMPLETED
// ============================================================================

fn render_completed(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled("  Completed ❤️", theme::STYLE_TITLE)),
        Line::from(""),
        Line::from(Span::styled(
            "  Thanks for going through Valentine Week with me.",
            theme::STYLE_DIM,
        )),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// SCREEN: RESTARTING
// ============================================================================

fn render_restarting(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("  Restarting...", theme::STYLE_AFFIRM)),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

// ============================================================================
// TESTS
// ============================================================================
