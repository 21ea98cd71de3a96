//! PowerPoint (.pptx) deck writer.
//!
//! Every slide is painted from the shared [`crate::layout`] output, so the
//! exported deck shows the same blocks, in the same order and with the same
//! text, as the terminal viewer.
//!
//! # Example
//!
//! ```no_run
//! use deckforge::model::Deck;
//! use deckforge::pptx;
//! use deckforge::theme::Theme;
//!
//! let deck = Deck::from_path("decks/executive-summary.yaml")?;
//! pptx::export(&deck, &Theme::default(), "executive-summary.pptx")?;
//!
//! for (i, slide) in pptx::read_outline_file("executive-summary.pptx")?.iter().enumerate() {
//!     println!("{}: {} ({} blocks)", i + 1, slide.title, slide.blocks.len());
//! }
//! # Ok::<(), deckforge::Error>(())
//! ```

mod background;
mod constants;
mod export;
mod outline;
mod package;
mod pres;
mod rels;
mod shape;
mod slide;
mod template;

pub use export::{DeckWriter, export, export_async, render};
pub use outline::{OutlineBlock, SlideOutline, read_outline, read_outline_file};
pub use pres::MutablePresentation;
pub use shape::MutableShape;
pub use slide::MutableSlide;
