//! Slides and their layout/background tags.

use super::block::ContentBlock;
use serde::{Deserialize, Serialize};

/// Overall visual treatment requested by a slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutKind {
    Title,
    Content,
    TwoColumn,
    Bullets,
    Table,
    Conclusion,
    Stats,
    Comparison,
    IconGrid,
    BigStatement,
}

impl LayoutKind {
    /// Title-style layouts centre their header and content on the canvas.
    pub fn is_centered(&self) -> bool {
        matches!(self, Self::Title | Self::BigStatement | Self::Conclusion)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Background {
    Dark,
    Light,
    Gradient,
    Accent,
}

impl Background {
    /// Whether text on this background must be light.
    ///
    /// An absent background renders as light, so callers pass
    /// `Option<Background>` through [`needs_light_text`].
    pub fn is_dark(&self) -> bool {
        !matches!(self, Self::Light)
    }
}

/// Contrast rule for an optional background.
pub fn needs_light_text(background: Option<Background>) -> bool {
    background.is_some_and(|bg| bg.is_dark())
}

/// One page of a deck.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Slide {
    pub id: u32,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    pub layout: LayoutKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<Background>,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Slide {
    /// Create a slide with no content, background or notes.
    pub fn new(id: u32, title: impl Into<String>, layout: LayoutKind) -> Self {
        Self {
            id,
            title: title.into(),
            subtitle: None,
            layout,
            background: None,
            content: Vec::new(),
            notes: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_background(mut self, background: Background) -> Self {
        self.background = Some(background);
        self
    }

    pub fn with_block(mut self, block: ContentBlock) -> Self {
        self.content.push(block);
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Notes text, treating blank notes as absent.
    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref().filter(|n| !n.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_layouts() {
        let centered: Vec<_> = [
            LayoutKind::Title,
            LayoutKind::Content,
            LayoutKind::BigStatement,
            LayoutKind::Conclusion,
            LayoutKind::Stats,
        ]
        .into_iter()
        .filter(LayoutKind::is_centered)
        .collect();
        assert_eq!(
            centered,
            vec![LayoutKind::Title, LayoutKind::BigStatement, LayoutKind::Conclusion]
        );
    }

    #[test]
    fn test_contrast_rule() {
        assert!(needs_light_text(Some(Background::Dark)));
        assert!(needs_light_text(Some(Background::Gradient)));
        assert!(needs_light_text(Some(Background::Accent)));
        assert!(!needs_light_text(Some(Background::Light)));
        assert!(!needs_light_text(None));
    }

    #[test]
    fn test_blank_notes_are_absent() {
        let slide = Slide::new(1, "Intro", LayoutKind::Content).with_notes("  ");
        assert_eq!(slide.notes(), None);
    }

    #[test]
    fn test_layout_tags() {
        let layout: LayoutKind = serde_json::from_str(r#""big-statement""#).unwrap();
        assert_eq!(layout, LayoutKind::BigStatement);
        assert!(serde_json::from_str::<LayoutKind>(r#""hero""#).is_err());
    }
}
