//! valentine-week CLI
//!
//! Ask the question, then page through the week of cards.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::{Parser, Subcommand};

use valentine_week::deck::{built_in_week, load_deck};
use valentine_week::listing::format_deck;
use valentine_week::tui;
use valentine_week::types::{CardDeck, OutputFormat, RunConfig};

#[derive(Parser)]
#[command(name = "valentine-week")]
#[command(about = "Interactive Valentine week greeting for the terminal")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask the question and page through the week (the default)
    Play {
        /// Custom deck file (JSON list of cards)
        #[arg(long)]
        deck: Option<PathBuf>,

        /// Directory containing card art
        #[arg(long)]
        assets: Option<PathBuf>,

        /// Restart pause in milliseconds
        #[arg(long, default_value_t = 1200)]
        restart_delay_ms: u64,
    },

    /// Print the card deck without entering the TUI
    Cards {
        /// Custom deck file (JSON list of cards)
        #[arg(long)]
        deck: Option<PathBuf>,

        /// Output format
        #[arg(long, value_enum, default_value = "human")]
        format: OutputFormatArg,
    },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormatArg {
    Human,
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Human => OutputFormat::Human,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Play {
        deck: None,
        assets: None,
        restart_delay_ms: 1200,
    });

    let result = match command {
        Commands::Play {
            deck,
            assets,
            restart_delay_ms,
        } => cmd_play(deck, assets, restart_delay_ms),
        Commands::Cards { deck, format } => cmd_cards(deck, format.into()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

// ============================================================================
// DECK RESOLUTION
// ============================================================================

/// Resolve the deck: custom file if given, else the built-in week.
fn resolve_deck(path: Option<PathBuf>) -> Result<CardDeck, String> {
    match path {
        Some(p) => load_deck(&p).map_err(|e| e.to_string()),
        None => Ok(built_in_week()),
    }
}

// ============================================================================
// COMMAND HANDLERS
// ============================================================================

fn cmd_play(
    deck: Option<PathBuf>,
    assets: Option<PathBuf>,
    restart_delay_ms: u64,
) -> Result<(), String> {
    let deck = resolve_deck(deck)?;

    let config = RunConfig {
        deck,
        assets_dir: assets,
        restart_delay: Duration::from_millis(restart_delay_ms),
    };

    tui::run(config).map_err(|e| e.to_string())
}

fn cmd_cards(deck: Option<PathBuf>, format: OutputFormat) -> Result<(), String> {
    let deck = resolve_deck(deck)?;
    print!("{}", format_deck(&deck, format));
    Ok(())
}
