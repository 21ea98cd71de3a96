//! Decoding decks from YAML or JSON.

use super::slide::Slide;
use super::{Deck, DeckMeta};
use crate::error::{Error, MalformedDeckError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// Serialized deck formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckFormat {
    Yaml,
    Json,
}

impl DeckFormat {
    /// Pick a format from a file extension; anything but `.json` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Yaml => "YAML",
            Self::Json => "JSON",
        }
    }
}

/// On-disk shape of a deck: optional document properties plus slides.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawDeck {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    subject: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    company: Option<String>,
    slides: Vec<Slide>,
}

impl RawDeck {
    fn into_deck(self) -> std::result::Result<Deck, MalformedDeckError> {
        let meta = DeckMeta {
            title: self.title,
            author: self.author,
            subject: self.subject,
            company: self.company,
        };
        Deck::with_meta(meta, self.slides)
    }
}

impl From<&Deck> for RawDeck {
    fn from(deck: &Deck) -> Self {
        let meta = deck.meta().clone();
        Self {
            title: meta.title,
            author: meta.author,
            subject: meta.subject,
            company: meta.company,
            slides: deck.slides().to_vec(),
        }
    }
}

fn parse_error(format: DeckFormat, err: impl std::fmt::Display) -> Error {
    MalformedDeckError::Parse {
        format: format.name(),
        message: err.to_string(),
    }
    .into()
}

impl Deck {
    pub fn from_yaml_str(input: &str) -> Result<Self> {
        Self::from_str_as(input, DeckFormat::Yaml)
    }

    pub fn from_json_str(input: &str) -> Result<Self> {
        Self::from_str_as(input, DeckFormat::Json)
    }

    pub fn from_str_as(input: &str, format: DeckFormat) -> Result<Self> {
        let raw: RawDeck = match format {
            DeckFormat::Yaml => serde_saphyr::from_str(input).map_err(|e| parse_error(format, e))?,
            DeckFormat::Json => serde_json::from_str(input).map_err(|e| parse_error(format, e))?,
        };
        let deck = raw.into_deck()?;
        debug!(slides = deck.len(), format = format.name(), "deck decoded");
        Ok(deck)
    }

    /// Read a deck file, choosing the decoder from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let input = std::fs::read_to_string(path)?;
        Self::from_str_as(&input, DeckFormat::from_path(path))
    }

    pub fn to_yaml_string(&self) -> Result<String> {
        serde_saphyr::to_string(&RawDeck::from(self))
            .map_err(|e| Error::Serialize(format!("Failed to serialize deck to YAML: {}", e)))
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(&RawDeck::from(self))
            .map_err(|e| Error::Serialize(format!("Failed to serialize deck to JSON: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Background, ContentBlock, LayoutKind, StatItem};

    const SAMPLE: &str = r#"
title: Brief
author: Office of the CIO
slides:
  - id: 2
    title: Today vs Tomorrow
    layout: table
    background: light
    content:
      - type: table
        headers: [Today, Tomorrow]
        rows:
          - [Manual, Automated]
          - [Siloed, Shared]
  - id: 1
    title: Overview
    layout: title
    background: dark
    notes: Open with the headline numbers.
    content:
      - type: stats-row
        stats:
          - { value: "80%", label: Faster ATO }
          - { value: "$4.2M", label: Annual Savings }
          - { value: "47", label: Programs Unified }
"#;

    #[test]
    fn test_yaml_deck() {
        let deck = Deck::from_yaml_str(SAMPLE).unwrap();
        assert_eq!(deck.len(), 2);
        assert_eq!(deck.meta().author.as_deref(), Some("Office of the CIO"));

        let first = &deck.slides()[0];
        assert_eq!(first.id, 1);
        assert_eq!(first.background, Some(Background::Dark));
        assert_eq!(first.notes(), Some("Open with the headline numbers."));
        match &first.content[0] {
            ContentBlock::StatsRow { stats } => {
                assert_eq!(
                    stats[1],
                    StatItem {
                        value: "$4.2M".to_string(),
                        label: "Annual Savings".to_string(),
                        icon: None,
                    }
                );
            }
            other => panic!("unexpected block {:?}", other),
        }
        assert_eq!(deck.slides()[1].layout, LayoutKind::Table);
    }

    #[test]
    fn test_yaml_round_trip() {
        let deck = Deck::from_yaml_str(SAMPLE).unwrap();
        let yaml = deck.to_yaml_string().unwrap();
        assert_eq!(Deck::from_yaml_str(&yaml).unwrap(), deck);
        let json = deck.to_json_string().unwrap();
        assert_eq!(Deck::from_json_str(&json).unwrap(), deck);
    }

    #[test]
    fn test_unknown_layout_is_malformed() {
        let yaml = "slides:\n  - id: 1\n    title: X\n    layout: hero\n";
        let err = Deck::from_yaml_str(yaml).unwrap_err();
        assert!(matches!(
            err,
            Error::Malformed(MalformedDeckError::Parse { format: "YAML", .. })
        ));
    }

    #[test]
    fn test_unknown_background_is_malformed() {
        let json = r#"{"slides":[{"id":1,"title":"X","layout":"content","background":"neon"}]}"#;
        assert!(matches!(
            Deck::from_json_str(json),
            Err(Error::Malformed(MalformedDeckError::Parse { format: "JSON", .. }))
        ));
    }

    #[test]
    fn test_arity_fails_before_render() {
        let json = r#"{"slides":[{"id":1,"title":"X","layout":"table","content":[
            {"type":"table","headers":["a","b"],"rows":[["1","2","3"]]}]}]}"#;
        assert!(matches!(
            Deck::from_json_str(json),
            Err(Error::Malformed(MalformedDeckError::TableArity { found: 3, .. }))
        ));
    }

    #[test]
    fn test_format_from_extension() {
        assert_eq!(DeckFormat::from_path(Path::new("a/deck.JSON")), DeckFormat::Json);
        assert_eq!(DeckFormat::from_path(Path::new("deck.yml")), DeckFormat::Yaml);
    }

    #[test]
    fn test_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("deck.yaml");
        std::fs::write(&path, SAMPLE).unwrap();
        assert_eq!(Deck::from_path(&path).unwrap().len(), 2);
        assert!(matches!(
            Deck::from_path(dir.path().join("missing.yaml")),
            Err(Error::Io(_))
        ));
    }
}
