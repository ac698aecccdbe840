//! Domain types for valentine-week.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

// ============================================================================
// ENUMS
// ============================================================================

/// How a card's art is scaled within its frame.
///
/// Terminal analogue of the classic image fit policies: `Cover` fills the
/// frame and crops overflow, `Contain` shows the whole art and pads the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitMode {
    /// Fill the frame, cropping the overflowing axis.
    #[default]
    Cover,
    /// Fit entirely within the frame, no cropping.
    Contain,
}

/// Output format for the deck listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable pretty output.
    #[default]
    Human,
    /// Machine-readable JSON.
    Json,
}

// ============================================================================
// STRUCTS
// ============================================================================

/// One entry in the themed card sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardItem {
    /// Short label ("Rose Day").
    pub title: String,
    /// Single decorative glyph shown in the badge and progress line.
    pub symbol: String,
    /// Short descriptive line under the title.
    pub caption: String,
    /// Relative reference to an art resource, resolved under the assets dir.
    pub image_ref: String,
    /// Art scaling policy within the card frame.
    #[serde(default)]
    pub fit_mode: FitMode,
}

/// Ordered sequence of cards, immutable for the process lifetime.
///
/// Construction rejects an empty list, so `len() >= 1` always holds and
/// `page_index == len()` can safely denote the completed terminal page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CardDeck(Vec<CardItem>);

impl CardDeck {
    /// Build a deck from an ordered card list. Returns `None` for an empty list.
    pub fn new(cards: Vec<CardItem>) -> Option<CardDeck> {
        if cards.is_empty() {
            None
        } else {
            Some(CardDeck(cards))
        }
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false: empty decks are unrepresentable.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Card at `index`, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<&CardItem> {
        self.0.get(index)
    }

    /// Iterate the cards in order.
    pub fn iter(&self) -> std::slice::Iter<'_, CardItem> {
        self.0.iter()
    }
}

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Pause between pressing Restart and the week starting over.
pub const DEFAULT_RESTART_DELAY: Duration = Duration::from_millis(1200);

/// Configuration for an interactive session.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// The card sequence to present.
    pub deck: CardDeck,
    /// Directory containing art resources. None = resolve a default.
    pub assets_dir: Option<PathBuf>,
    /// Pause before the week restarts after the completed page.
    pub restart_delay: Duration,
}

impl RunConfig {
    /// Session config with default delay and auto-resolved assets dir.
    pub fn new(deck: CardDeck) -> Self {
        RunConfig {
            deck,
            assets_dir: None,
            restart_delay: DEFAULT_RESTART_DELAY,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
