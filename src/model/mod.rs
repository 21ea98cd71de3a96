//! Slide model: an ordered deck of typed slides and content blocks.
//!
//! A [`Deck`] is validated once on construction and is immutable afterwards.
//! Both renderers borrow it; neither owns nor mutates slide data.
//!
//! # Example
//!
//! ```
//! use deckforge::model::Deck;
//!
//! let yaml = r#"
//! slides:
//!   - id: 1
//!     title: Hello
//!     layout: title
//!     background: dark
//!     content:
//!       - type: text
//!         text: World
//! "#;
//! let deck = Deck::from_yaml_str(yaml)?;
//! assert_eq!(deck.len(), 1);
//! # Ok::<(), deckforge::Error>(())
//! ```

mod block;
mod load;
mod slide;
mod validate;

pub use block::{
    Accent, BlockKind, ComparisonPanel, ContentBlock, DiagramVariant, PanelColor, SpacerSize,
    StatItem, TextAlign, TextSize, Trend,
};
pub use load::DeckFormat;
pub use slide::{Background, LayoutKind, Slide, needs_light_text};

use crate::error::MalformedDeckError;
use serde::{Deserialize, Serialize};

/// Document properties carried into exported files.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DeckMeta {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

/// A validated, id-ordered deck.
#[derive(Debug, Clone, PartialEq)]
pub struct Deck {
    meta: DeckMeta,
    slides: Vec<Slide>,
}

impl Deck {
    /// Validate and order `slides` by id.
    pub fn new(slides: Vec<Slide>) -> Result<Self, MalformedDeckError> {
        Self::with_meta(DeckMeta::default(), slides)
    }

    pub fn with_meta(meta: DeckMeta, mut slides: Vec<Slide>) -> Result<Self, MalformedDeckError> {
        validate::validate_slides(&slides)?;
        slides.sort_by_key(|s| s.id);
        Ok(Self { meta, slides })
    }

    pub fn meta(&self) -> &DeckMeta {
        &self.meta
    }

    /// Slides in canonical (id) order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false for a constructed deck; kept for the `len` pairing.
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Title for document properties, falling back to the first slide.
    pub fn display_title(&self) -> &str {
        self.meta
            .title
            .as_deref()
            .or_else(|| self.slides.first().map(|s| s.title.as_str()))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orders_by_id() {
        let deck = Deck::new(vec![
            Slide::new(7, "Last", LayoutKind::Content),
            Slide::new(2, "First", LayoutKind::Title),
        ])
        .unwrap();
        let ids: Vec<_> = deck.slides().iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![2, 7]);
        assert_eq!(deck.display_title(), "First");
    }

    #[test]
    fn test_meta_title_wins() {
        let meta = DeckMeta {
            title: Some("Brief".to_string()),
            ..Default::default()
        };
        let deck = Deck::with_meta(meta, vec![Slide::new(1, "One", LayoutKind::Title)]).unwrap();
        assert_eq!(deck.display_title(), "Brief");
    }
}
