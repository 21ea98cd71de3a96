//! Deckforge - declarative slide decks with two consistent renderers
//!
//! A deck is an ordered list of typed slides, each holding an ordered list of
//! typed content blocks. The same deck can be browsed in an interactive
//! terminal viewer or written out as a PowerPoint (.pptx) file, and both
//! outputs show the same blocks in the same order with the same text.
//!
//! # Features
//!
//! - **Slide model**: closed set of layouts, backgrounds and block kinds,
//!   validated at load time from YAML or JSON
//! - **Layout engine**: one target-agnostic geometry pass shared by both
//!   renderers, driven by an immutable [`theme::Theme`]
//! - **Viewer**: keyboard and mouse navigation with timed slide transitions,
//!   fullscreen, speaker notes and a thumbnail strip
//! - **Deck writer**: native shapes, text runs and tables, speaker notes as
//!   hidden notes pages, atomic write to disk
//!
//! # Example - Exporting a deck
//!
//! ```no_run
//! use deckforge::model::Deck;
//! use deckforge::pptx;
//! use deckforge::theme::Theme;
//!
//! # fn main() -> Result<(), deckforge::Error> {
//! let deck = Deck::from_path("decks/executive-summary.yaml")?;
//! let theme = Theme::default();
//! let bytes = pptx::export(&deck, &theme, "executive-summary.pptx")?;
//! println!("wrote {} slides ({} bytes)", deck.len(), bytes);
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Building a deck in code
//!
//! ```
//! use deckforge::model::{ContentBlock, Deck, LayoutKind, Slide};
//! use deckforge::layout::LayoutEngine;
//! use deckforge::theme::Theme;
//!
//! let deck = Deck::new(vec![
//!     Slide::new(1, "Why now", LayoutKind::Bullets).with_block(ContentBlock::Bullet {
//!         items: vec!["Threats move faster".into(), "Audits lag behind".into()],
//!         icon: None,
//!     }),
//! ])?;
//!
//! let theme = Theme::default();
//! let layouts = LayoutEngine::new(&theme).layout_deck(&deck);
//! assert_eq!(layouts[0].blocks[0].texts().len(), 2);
//! # Ok::<(), deckforge::error::MalformedDeckError>(())
//! ```

pub mod common;
pub mod error;
pub mod layout;
pub mod model;
pub mod pptx;
pub mod theme;
pub mod viewer;

pub use error::{Error, Result};

#[cfg(test)]
mod fidelity;
