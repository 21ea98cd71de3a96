//! deckforge command-line entry point.

use clap::{Parser, Subcommand};
use deckforge::model::Deck;
use deckforge::theme::Theme;
use deckforge::{Result, pptx, viewer};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "deckforge")]
#[command(version)]
#[command(about = "Declarative slide decks for the terminal and PowerPoint")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a deck and print a summary
    Check {
        /// Deck file (.yaml, .yml or .json)
        deck: PathBuf,
    },

    /// Write a deck to a .pptx file
    Export {
        /// Deck file (.yaml, .yml or .json)
        deck: PathBuf,

        /// Output path
        #[arg(short, long, value_name = "FILE")]
        output: PathBuf,

        /// Theme overrides (YAML)
        #[arg(long, value_name = "FILE")]
        theme: Option<PathBuf>,
    },

    /// Present a deck in the terminal
    View {
        /// Deck file (.yaml, .yml or .json)
        deck: PathBuf,

        /// Theme overrides (YAML)
        #[arg(long, value_name = "FILE")]
        theme: Option<PathBuf>,
    },

    /// Print the block outline of a written .pptx file
    Outline {
        /// Presentation file
        file: PathBuf,
    },
}

/// Logs go to stderr so they never land on the viewer's screen.
fn init_logging() {
    let filter = EnvFilter::try_from_env("DECKFORGE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_theme(path: Option<&Path>) -> Result<Theme> {
    match path {
        Some(path) => Theme::from_yaml_file(path),
        None => Ok(Theme::default()),
    }
}

fn check(path: &Path) -> Result<()> {
    let deck = Deck::from_path(path)?;
    println!("{}: {} slides", deck.display_title(), deck.len());
    for slide in deck.slides() {
        let kinds: Vec<&str> = slide.content.iter().map(|b| b.kind().as_str()).collect();
        let notes = if slide.notes().is_some() { " [notes]" } else { "" };
        println!("{:>3}  {:<40} {}{}", slide.id, slide.title, kinds.join(", "), notes);
    }
    Ok(())
}

async fn export(deck: &Path, output: PathBuf, theme: Option<&Path>) -> Result<()> {
    let deck = Deck::from_path(deck)?;
    let theme = load_theme(theme)?;
    let slides = deck.len();
    let bytes = pptx::export_async(deck, theme, output.clone()).await?;
    println!("wrote {} ({} slides, {} bytes)", output.display(), slides, bytes);
    Ok(())
}

async fn view(deck: &Path, theme: Option<&Path>) -> Result<()> {
    let deck = Deck::from_path(deck)?;
    let theme = load_theme(theme)?;
    tokio::task::spawn_blocking(move || viewer::terminal::run(&deck, &theme))
        .await
        .map_err(std::io::Error::other)?
}

fn outline(path: &Path) -> Result<()> {
    for (i, slide) in pptx::read_outline_file(path)?.iter().enumerate() {
        println!("{}. {}", i + 1, slide.title);
        if let Some(subtitle) = &slide.subtitle {
            println!("   {}", subtitle);
        }
        for block in &slide.blocks {
            println!("   [{}] {}", block.kind, block.texts.join(" | "));
        }
        if let Some(notes) = &slide.notes {
            println!("   notes: {}", notes.replace('\n', " / "));
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging();

    let result = match cli.command {
        Commands::Check { deck } => check(&deck),
        Commands::Export {
            deck,
            output,
            theme,
        } => export(&deck, output, theme.as_deref()).await,
        Commands::View { deck, theme } => view(&deck, theme.as_deref()).await,
        Commands::Outline { file } => outline(&file),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("deckforge: {}", err);
            ExitCode::FAILURE
        },
    }
}
