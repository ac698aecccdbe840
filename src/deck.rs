//! The card deck: built-in week and file-based loading.
//!
//! The built-in week is literal data; custom decks load from a JSON file
//! (a list of card objects, `fit_mode` optional). Rendering never
//! special-cases entries, so swapping the deck swaps the experience.

use std::fs;
use std::io;
use std::path::Path;

use crate::types::{CardDeck, CardItem, FitMode};

// ============================================================================
// BUILT-IN WEEK
// ============================================================================

/// The built-in Valentine week, Rose Day through Valentine's Day.
pub fn built_in_week() -> CardDeck {
    let cards = vec![
        card(
            "Rose Day",
            "🌹",
            "A little rose to start the week.",
            "rose.txt",
            FitMode::Contain,
        ),
        card(
            "Propose Day",
            "💍",
            "Say it out loud (or quietly) — you mean a lot.",
            "ring.txt",
            FitMode::Cover,
        ),
        card(
            "Chocolate Day",
            "🍫",
            "Something sweet, just like you.",
            "chocolate.txt",
            FitMode::Cover,
        ),
        card(
            "Teddy Day",
            "🧸",
            "A hug, in plush form.",
            "teddy.txt",
            FitMode::Cover,
        ),
        card(
            "Promise Day",
            "🤝",
            "To show up, to care, to stay kind.",
            "promise.txt",
            FitMode::Cover,
        ),
        card(
            "Hug Day",
            "🤗",
            "Warm, safe, and close.",
            "hug.txt",
            FitMode::Contain,
        ),
        card(
            "Kiss Day",
            "💋",
            "A moment sealed with love.",
            "kiss.txt",
            FitMode::Cover,
        ),
        card(
            "Valentine's Day",
            "❤️",
            "The day for us.",
            "valentine.txt",
            FitMode::Cover,
        ),
    ];

    CardDeck::new(cards).expect("built-in week is non-empty")
}

fn card(title: &str, symbol: &str, caption: &str, image_ref: &str, fit_mode: FitMode) -> CardItem {
    CardItem {
        title: title.to_string(),
        symbol: symbol.to_string(),
        caption: caption.to_string(),
        image_ref: image_ref.to_string(),
        fit_mode,
    }
}

// ============================================================================
// FILE LOADING
// ============================================================================

/// Load a deck from a JSON file.
///
/// # Errors
/// Returns an error if the file cannot be read, is not valid JSON,
/// or contains no cards.
pub fn load_deck(path: &Path) -> io::Result<CardDeck> {
    let data = fs::read_to_string(path)?;

    let cards: Vec<CardItem> = serde_json::from_str(&data).map_err(|e| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("invalid deck file {}: {}", path.display(), e),
        )
    })?;

    CardDeck::new(cards).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("deck file {} contains no cards", path.display()),
        )
    })
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn built_in_week_has_eight_cards() {
        assert_eq!(built_in_week().len(), 8);
    }

    #[test]
    fn built_in_week_starts_with_rose_and_ends_with_valentine() {
        let deck = built_in_week();
        assert_eq!(deck.get(0).unwrap().title, "Rose Day");
        assert_eq!(deck.get(7).unwrap().title, "Valentine's Day");
    }

    #[test]
    fn built_in_week_fit_modes_match_the_art() {
        let deck = built_in_week();
        // Rose and Hug use contain, the rest cover.
        let contain: Vec<&str> = deck
            .iter()
            .filter(|c| c.fit_mode == FitMode::Contain)
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(contain, vec!["Rose Day", "Hug Day"]);
    }

    #[test]
    fn load_deck_reads_a_valid_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"title": "Day One", "symbol": "☀", "caption": "first", "image_ref": "one.txt"}},
                {{"title": "Day Two", "symbol": "🌙", "caption": "second", "image_ref": "two.txt", "fit_mode": "contain"}}
            ]"#
        )
        .unwrap();

        let deck = load_deck(file.path()).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.get(0).unwrap().fit_mode, FitMode::Cover);
        assert_eq!(deck.get(1).unwrap().fit_mode, FitMode::Contain);
    }

    #[test]
    fn load_deck_rejects_empty_list() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[]").unwrap();

        let err = load_deck(file.path()).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn load_deck_rejects_malformed_json() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_deck(file.path()).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    }

    #[test]
    fn load_deck_missing_file_is_not_found() {
        let err = load_deck(Path::new("/no/such/deck.json")).unwrap_err();
        assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
    }

    #[test]
    fn built_in_week_round_trips_through_json() {
        let deck = built_in_week();
        let json = serde_json::to_string(&deck).unwrap();

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let reloaded = load_deck(file.path()).unwrap();
        assert_eq!(reloaded, deck);
    }
}
