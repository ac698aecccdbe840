//! Text-art images for card frames.
//!
//! A piece of art is a rectangular char grid loaded from a plain-text file.
//! Terminals cannot scale glyphs, so fitting resamples the grid by nearest
//! neighbor: `Cover` scales by the larger axis ratio and center-crops the
//! overflow, `Contain` scales by the smaller ratio and center-pads the rest.
//! The closest cell-graphics analogue of the classic image fit policies.
//!
//! Structure:
//! - Pure functions: grid parsing, resampling, placeholder generation
//! - Effect functions: file loading, assets directory resolution

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::types::{CardDeck, FitMode};

/// Assets directory tried first, relative to the working directory.
const LOCAL_ASSETS_DIR: &str = "assets";

/// App directory under the platform data dir, for installed assets.
const APP_DIR: &str = "valentine-week";

/// Art subdirectory within the app data dir.
const APP_ART_DIR: &str = "art";

// ============================================================================
// ART GRID
// ============================================================================

/// A rectangular grid of characters serving as a terminal image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Art {
    rows: Vec<Vec<char>>,
    width: usize,
}

impl Art {
    /// Parse art from plain text.
    ///
    /// Lines are right-padded with spaces to the widest line.
    /// Returns `None` for text with no lines or only empty lines.
    pub fn from_text(text: &str) -> Option<Art> {
        let mut rows: Vec<Vec<char>> = text.lines().map(|l| l.chars().collect()).collect();
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        if rows.is_empty() || width == 0 {
            return None;
        }
        for row in &mut rows {
            row.resize(width, ' ');
        }
        Some(Art { rows, width })
    }

    /// Grid width in characters. Always >= 1.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Grid height in lines. Always >= 1.
    pub fn height(&self) -> usize {
        self.rows.len()
    }
}

// ============================================================================
// FITTING
// ============================================================================

/// Scale `art` into a `cols` x `rows` frame according to `mode`.
///
/// Returns exactly `rows` strings of exactly `cols` characters each
/// (empty when either dimension is zero).
pub fn fit(art: &Art, cols: usize, rows: usize, mode: FitMode) -> Vec<String> {
    if cols == 0 || rows == 0 {
        return Vec::new();
    }

    let rx = cols as f64 / art.width() as f64;
    let ry = rows as f64 / art.height() as f64;
    let scale = match mode {
        FitMode::Cover => rx.max(ry),
        FitMode::Contain => rx.min(ry),
    };

    let scaled_w = ((art.width() as f64 * scale).round() as usize).max(1);
    let scaled_h = ((art.height() as f64 * scale).round() as usize).max(1);

    let scaled = resample(art, scaled_w, scaled_h);
    center_into(&scaled, cols, rows)
}

/// Placeholder frame content for missing art: the card's symbol centered
/// in an otherwise blank field.
pub fn placeholder(symbol: &str, cols: usize, rows: usize) -> Vec<String> {
    let mut out = vec![" ".repeat(cols); rows];
    if cols == 0 || rows == 0 {
        return out;
    }

    let symbol_len = symbol.chars().count();
    let left = cols.saturating_sub(symbol_len) / 2;
    let mut line: String = format!("{}{}", " ".repeat(left), symbol)
        .chars()
        .take(cols)
        .collect();
    let fill = cols.saturating_sub(line.chars().count());
    line.push_str(&" ".repeat(fill));
    out[rows / 2] = line;
    out
}

/// Nearest-neighbor resample of the grid to `cols` x `rows` (both >= 1).
fn resample(art: &Art, cols: usize, rows: usize) -> Vec<Vec<char>> {
    (0..rows)
        .map(|r| {
            let src_row = r * art.height() / rows;
            (0..cols)
                .map(|c| {
                    let src_col = c * art.width() / cols;
                    art.rows[src_row][src_col]
                })
                .collect()
        })
        .collect()
}

/// Center `grid` into a `cols` x `rows` window: crop where it overflows,
/// pad with spaces where it falls short.
fn center_into(grid: &[Vec<char>], cols: usize, rows: usize) -> Vec<String> {
    let grid_h = grid.len();
    let grid_w = grid.first().map(|r| r.len()).unwrap_or(0);

    let crop_top = grid_h.saturating_sub(rows) / 2;
    let crop_left = grid_w.saturating_sub(cols) / 2;
    let pad_top = rows.saturating_sub(grid_h) / 2;
    let pad_left = cols.saturating_sub(grid_w) / 2;

    (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| {
                    let gr = (r + crop_top).checked_sub(pad_top);
                    let gc = (c + crop_left).checked_sub(pad_left);
                    match (gr, gc) {
                        (Some(gr), Some(gc)) if gr < grid_h && gc < grid_w => grid[gr][gc],
                        _ => ' ',
                    }
                })
                .collect()
        })
        .collect()
}

// ============================================================================
// LOADING
// ============================================================================

/// Load one art file.
///
/// # Errors
/// Returns an error if the file cannot be read or holds no drawable content.
pub fn load_art(path: &Path) -> io::Result<Art> {
    let text = fs::read_to_string(path)?;
    Art::from_text(&text).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidData,
            format!("art file {} is empty", path.display()),
        )
    })
}

/// Resolve and preload art for every card in the deck.
///
/// Per-card failures are non-fatal: the slot becomes `None` and the
/// renderer substitutes a placeholder. Transition logic never sees them.
pub fn preload(deck: &CardDeck, assets_dir: &Path) -> Vec<Option<Art>> {
    deck.iter()
        .map(|card| load_art(&assets_dir.join(&card.image_ref)).ok())
        .collect()
}

/// Default assets location: `./assets` if present, else the per-user
/// data directory.
pub fn default_assets_dir() -> PathBuf {
    let local = PathBuf::from(LOCAL_ASSETS_DIR);
    if local.is_dir() {
        return local;
    }

    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(APP_ART_DIR)
}

// ============================================================================
// TESTS
// ============================================================================
