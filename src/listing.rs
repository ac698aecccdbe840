//! Deck listing for the `cards` subcommand.
//!
//! Pure functions — (CardDeck, OutputFormat) → String.
//! No I/O, no side effects.

use crate::types::{CardDeck, FitMode, OutputFormat};

/// Format the deck for output.
///
/// Pure function: takes data, returns formatted string.
pub fn format_deck(deck: &CardDeck, format: OutputFormat) -> String {
    match format {
        OutputFormat::Human => format_human(deck),
        OutputFormat::Json => format_json(deck),
    }
}

// ============================================================================
// HUMAN FORMAT
// ============================================================================

fn format_human(deck: &CardDeck) -> String {
    let mut out = String::new();

    for (i, card) in deck.iter().enumerate() {
        out.push_str(&format!("Day {}  {}  {}\n", i + 1, card.symbol, card.title));
        out.push_str(&format!("       {}\n", card.caption));

        let fit = match card.fit_mode {
            FitMode::Cover => "cover",
            FitMode::Contain => "contain",
        };
        out.push_str(&format!("       art: {} ({})\n", card.image_ref, fit));
        out.push('\n');
    }

    out
}

// ============================================================================
// JSON FORMAT
// ============================================================================

fn format_json(deck: &CardDeck) -> String {
    serde_json::to_string_pretty(deck)
        .map(|s| s + "\n")
        .unwrap_or_else(|_| "[]\n".to_string())
}

// ============================================================================
// TESTS
// ============================================================================
