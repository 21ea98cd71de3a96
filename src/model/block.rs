//! Content blocks: the closed set of things a slide can contain.

use serde::{Deserialize, Serialize};

/// One typed unit of slide content.
///
/// The variant set is closed; renderers match on it exhaustively, so adding a
/// kind is a compile error in every consumer until it is handled.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", deny_unknown_fields)]
pub enum ContentBlock {
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "is_false")]
        bold: bool,
        #[serde(default, skip_serializing_if = "is_false")]
        italic: bool,
        #[serde(default)]
        size: TextSize,
        #[serde(default)]
        align: TextAlign,
    },
    Bullet {
        items: Vec<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        icon: Option<String>,
    },
    /// Rendered with a 1-based `"{n}. "` prefix per item
    Numbered { items: Vec<String> },
    /// Every row must have one cell per header
    Table {
        headers: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Highlight {
        text: String,
        #[serde(default)]
        color: Accent,
    },
    /// Vertical gap only; emits no visible geometry
    Spacer {
        #[serde(default)]
        size: SpacerSize,
    },
    Stat {
        value: String,
        label: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        trend: Option<Trend>,
    },
    StatsRow { stats: Vec<StatItem> },
    IconBox {
        icon: String,
        title: String,
        description: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        color: Option<Accent>,
    },
    Comparison {
        left: ComparisonPanel,
        right: ComparisonPanel,
    },
    Diagram {
        variant: DiagramVariant,
        data: Vec<String>,
    },
    Quote {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        author: Option<String>,
    },
    Cta {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        subtext: Option<String>,
    },
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Discriminant of a [`ContentBlock`], used to tag rendered output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockKind {
    Text,
    Bullet,
    Numbered,
    Table,
    Highlight,
    Spacer,
    Stat,
    StatsRow,
    IconBox,
    Comparison,
    Diagram,
    Quote,
    Cta,
}

impl BlockKind {
    pub const ALL: [BlockKind; 13] = [
        BlockKind::Text,
        BlockKind::Bullet,
        BlockKind::Numbered,
        BlockKind::Table,
        BlockKind::Highlight,
        BlockKind::Spacer,
        BlockKind::Stat,
        BlockKind::StatsRow,
        BlockKind::IconBox,
        BlockKind::Comparison,
        BlockKind::Diagram,
        BlockKind::Quote,
        BlockKind::Cta,
    ];

    /// The serialized `type` tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Bullet => "bullet",
            Self::Numbered => "numbered",
            Self::Table => "table",
            Self::Highlight => "highlight",
            Self::Spacer => "spacer",
            Self::Stat => "stat",
            Self::StatsRow => "stats-row",
            Self::IconBox => "icon-box",
            Self::Comparison => "comparison",
            Self::Diagram => "diagram",
            Self::Quote => "quote",
            Self::Cta => "cta",
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == tag)
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ContentBlock {
    /// Every authored string in the block, including icon names.
    pub fn strings(&self) -> Vec<&str> {
        match self {
            Self::Text { text, .. } | Self::Highlight { text, .. } => vec![text.as_str()],
            Self::Bullet { items, icon } => {
                items.iter().map(String::as_str).chain(icon.as_deref()).collect()
            },
            Self::Numbered { items } | Self::Diagram { data: items, .. } => {
                items.iter().map(String::as_str).collect()
            },
            Self::Table { headers, rows } => headers
                .iter()
                .chain(rows.iter().flatten())
                .map(String::as_str)
                .collect(),
            Self::Spacer { .. } => Vec::new(),
            Self::Stat { value, label, .. } => vec![value.as_str(), label.as_str()],
            Self::StatsRow { stats } => stats
                .iter()
                .flat_map(|s| [Some(s.value.as_str()), Some(s.label.as_str()), s.icon.as_deref()])
                .flatten()
                .collect(),
            Self::IconBox {
                icon,
                title,
                description,
                ..
            } => vec![icon.as_str(), title.as_str(), description.as_str()],
            Self::Comparison { left, right } => [left, right]
                .into_iter()
                .flat_map(|panel| std::iter::once(&panel.title).chain(&panel.items))
                .map(String::as_str)
                .collect(),
            Self::Quote { text, author: extra } | Self::Cta { text, subtext: extra } => {
                std::iter::once(text.as_str()).chain(extra.as_deref()).collect()
            },
        }
    }

    pub fn kind(&self) -> BlockKind {
        match self {
            Self::Text { .. } => BlockKind::Text,
            Self::Bullet { .. } => BlockKind::Bullet,
            Self::Numbered { .. } => BlockKind::Numbered,
            Self::Table { .. } => BlockKind::Table,
            Self::Highlight { .. } => BlockKind::Highlight,
            Self::Spacer { .. } => BlockKind::Spacer,
            Self::Stat { .. } => BlockKind::Stat,
            Self::StatsRow { .. } => BlockKind::StatsRow,
            Self::IconBox { .. } => BlockKind::IconBox,
            Self::Comparison { .. } => BlockKind::Comparison,
            Self::Diagram { .. } => BlockKind::Diagram,
            Self::Quote { .. } => BlockKind::Quote,
            Self::Cta { .. } => BlockKind::Cta,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextSize {
    #[serde(rename = "sm")]
    Sm,
    #[default]
    #[serde(rename = "md")]
    Md,
    #[serde(rename = "lg")]
    Lg,
    #[serde(rename = "xl")]
    Xl,
    #[serde(rename = "2xl")]
    Xxl,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Semantic accent colour carried by callout-style blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Accent {
    #[default]
    Teal,
    Red,
    Amber,
    Green,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpacerSize {
    #[default]
    Sm,
    Md,
    Lg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StatItem {
    pub value: String,
    pub label: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelColor {
    Red,
    Green,
}

impl From<PanelColor> for Accent {
    fn from(color: PanelColor) -> Self {
        match color {
            PanelColor::Red => Accent::Red,
            PanelColor::Green => Accent::Green,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComparisonPanel {
    pub title: String,
    pub items: Vec<String>,
    pub color: PanelColor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DiagramVariant {
    Flow,
    Stack,
    Timeline,
    Hub,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_tags_match_serde() {
        let block = ContentBlock::StatsRow { stats: Vec::new() };
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(json, r#"{"type":"stats-row","stats":[]}"#);
        assert_eq!(BlockKind::from_tag("stats-row"), Some(block.kind()));
    }

    #[test]
    fn test_strings_cover_every_field() {
        let quote = ContentBlock::Quote {
            text: "Ship it".to_string(),
            author: Some("Ops".to_string()),
        };
        assert_eq!(quote.strings(), ["Ship it", "Ops"]);

        let table = ContentBlock::Table {
            headers: vec!["A".to_string()],
            rows: vec![vec!["1".to_string()], vec!["2".to_string()]],
        };
        assert_eq!(table.strings(), ["A", "1", "2"]);

        let row = ContentBlock::StatsRow {
            stats: vec![StatItem {
                value: "47".to_string(),
                label: "Programs".to_string(),
                icon: None,
            }],
        };
        assert_eq!(row.strings(), ["47", "Programs"]);
    }

    #[test]
    fn test_text_defaults() {
        let block: ContentBlock = serde_json::from_str(r#"{"type":"text","text":"hi"}"#).unwrap();
        assert_eq!(
            block,
            ContentBlock::Text {
                text: "hi".to_string(),
                bold: false,
                italic: false,
                size: TextSize::Md,
                align: TextAlign::Left,
            }
        );
    }

    #[test]
    fn test_closed_enums_reject_unknown_values() {
        assert!(serde_json::from_str::<ContentBlock>(r#"{"type":"video","src":"a.mp4"}"#).is_err());
        assert!(
            serde_json::from_str::<ContentBlock>(r#"{"type":"highlight","text":"x","color":"pink"}"#)
                .is_err()
        );
        assert!(
            serde_json::from_str::<ContentBlock>(r#"{"type":"text","text":"x","size":"3xl"}"#)
                .is_err()
        );
    }

    #[test]
    fn test_two_xl_tag() {
        let size: TextSize = serde_json::from_str(r#""2xl""#).unwrap();
        assert_eq!(size, TextSize::Xxl);
    }
}
