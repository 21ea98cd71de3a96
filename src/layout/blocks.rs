//! Per-block placement: block kind to primitives at a given cursor.

use super::geometry::{Fill, Line, Primitive, Rect, Run, ShapeKind, TableGrid, TextBox, TextStyle};
use super::glyph::{self, icon_glyph};
use crate::model::{
    Accent, BlockKind, ComparisonPanel, ContentBlock, DiagramVariant, SpacerSize, StatItem,
    TextSize, Trend,
};
use crate::theme::{Rgb, Theme};
use tracing::warn;

const TEXT_HEIGHT: f64 = 0.5;
const TEXT_ADVANCE: f64 = 0.6;
const BULLET_PITCH: f64 = 0.35;
const NUMBERED_PITCH: f64 = 0.45;
const LIST_GAP: f64 = 0.2;
const TABLE_ROW: f64 = 0.4;
const TABLE_GAP: f64 = 0.3;
const TILE_HEIGHT: f64 = 1.2;
const TILE_ADVANCE: f64 = 1.5;
const SINGLE_TILE_WIDTH: f64 = 3.0;
const PANEL_HEIGHT: f64 = 2.5;
const PANEL_ADVANCE: f64 = 2.8;
const PANEL_GAP: f64 = 0.4;
const FLOW_BOX: f64 = 1.4;
const FLOW_GAP: f64 = 0.3;
const FLOW_HEIGHT: f64 = 0.8;
const FLOW_ADVANCE: f64 = 1.2;
const STACK_PITCH: f64 = 0.6;
const STACK_WIDTH: f64 = 6.0;
const HUB_BAND: f64 = 1.8;
const HUB_SATELLITES: usize = 4;
const ICON_BOX_HEIGHT: f64 = 1.0;
const ICON_BOX_ADVANCE: f64 = 1.3;
const QUOTE_HEIGHT: f64 = 1.0;
const CTA_HEIGHT: f64 = 1.5;
const CTA_ADVANCE: f64 = 1.8;

/// Geometry of one content block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockLayout {
    /// Position in the slide's `content`
    pub index: usize,
    pub kind: BlockKind,
    /// Reserved band; may extend past the canvas
    pub frame: Rect,
    pub primitives: Vec<Primitive>,
}

impl BlockLayout {
    /// Visible text in paint order: text boxes, then table header and body
    /// cells row by row.
    pub fn texts(&self) -> Vec<String> {
        let mut out = Vec::new();
        for primitive in &self.primitives {
            match primitive {
                Primitive::Text(text) => out.push(text.text()),
                Primitive::Table(table) => {
                    out.extend(table.headers.iter().cloned());
                    for row in &table.rows {
                        out.extend(row.iter().cloned());
                    }
                }
                Primitive::Fill(_) | Primitive::Line(_) => {}
            }
        }
        out
    }

    /// Spacers and empty blocks emit nothing.
    pub fn is_visible(&self) -> bool {
        !self.primitives.is_empty()
    }
}

pub fn text_size_pt(size: TextSize) -> f64 {
    match size {
        TextSize::Sm => 11.0,
        TextSize::Md => 13.0,
        TextSize::Lg => 16.0,
        TextSize::Xl => 20.0,
        TextSize::Xxl => 24.0,
    }
}

pub fn spacer_height(size: SpacerSize) -> f64 {
    match size {
        SpacerSize::Sm => 0.2,
        SpacerSize::Md => 0.35,
        SpacerSize::Lg => 0.5,
    }
}

/// Places blocks inside the usable band of one slide.
pub(super) struct BlockPlacer<'t> {
    pub theme: &'t Theme,
    /// Base text colour from the slide background
    pub foreground: Rgb,
    /// Left edge of the usable band
    pub left: f64,
    pub width: f64,
}

impl<'t> BlockPlacer<'t> {
    /// Lay out `block` at `y`, returning its geometry and cursor advance.
    pub fn place(&self, index: usize, block: &ContentBlock, y: f64) -> (BlockLayout, f64) {
        let mut out = Vec::new();
        let (height, advance) = match block {
            ContentBlock::Text {
                text,
                bold,
                italic,
                size,
                align,
            } => {
                let mut style = TextStyle::new(text_size_pt(*size), self.foreground).align(*align);
                style.bold = *bold;
                style.italic = *italic;
                out.push(self.text(self.band(y, TEXT_HEIGHT), vec![Run::plain(text)], style));
                (TEXT_HEIGHT, TEXT_ADVANCE)
            }
            ContentBlock::Bullet { items, icon } => {
                let marker = match icon {
                    Some(name) => format!("{} ", icon_glyph(name)),
                    None => glyph::BULLET.to_string(),
                };
                let teal = self.theme.palette.teal;
                for (i, item) in items.iter().enumerate() {
                    let rect = self.band(y + i as f64 * BULLET_PITCH, BULLET_PITCH);
                    let runs = vec![Run::colored(marker.clone(), teal), Run::plain(item)];
                    out.push(self.text(rect, runs, TextStyle::new(14.0, self.foreground)));
                }
                let h = items.len() as f64 * BULLET_PITCH;
                (h, h + LIST_GAP)
            }
            ContentBlock::Numbered { items } => {
                let teal = self.theme.palette.teal;
                for (i, item) in items.iter().enumerate() {
                    let rect = self.band(y + i as f64 * NUMBERED_PITCH, NUMBERED_PITCH);
                    let runs = vec![
                        Run::colored(format!("{}. ", i + 1), teal).bold(),
                        Run::plain(item),
                    ];
                    out.push(self.text(rect, runs, TextStyle::new(14.0, self.foreground)));
                }
                let h = items.len() as f64 * NUMBERED_PITCH;
                (h, h + LIST_GAP)
            }
            ContentBlock::Table { headers, rows } => {
                let h = TABLE_ROW * (rows.len() + 1) as f64;
                if !headers.is_empty() {
                    let palette = &self.theme.palette;
                    out.push(Primitive::Table(TableGrid {
                        rect: self.band(y, h),
                        headers: headers.clone(),
                        rows: rows.clone(),
                        row_height: TABLE_ROW,
                        size_pt: 12.0,
                        header_fill: palette.navy,
                        header_ink: palette.white,
                        body_fills: [palette.white, palette.light_gray],
                        body_ink: palette.dark_gray,
                    }));
                }
                (h, h + TABLE_GAP)
            }
            ContentBlock::Highlight { text, color } => {
                let tint = self.theme.tints.get(*color);
                let rect = self.band(y, TEXT_HEIGHT);
                out.push(fill(rect, ShapeKind::RoundRect, tint.fill));
                let style = TextStyle::new(14.0, tint.ink).bold();
                out.push(self.text(rect.inset(0.2, 0.0), vec![Run::plain(text)], style));
                (TEXT_HEIGHT, TEXT_ADVANCE)
            }
            ContentBlock::Spacer { size } => {
                let h = spacer_height(*size);
                (h, h)
            }
            ContentBlock::Stat { value, label, trend } => {
                let rect = Rect::new(self.left, y, SINGLE_TILE_WIDTH, TILE_HEIGHT);
                let trend = trend.map(|t| self.trend_run(t));
                self.tile(&mut out, rect, None, value, label, trend);
                (TILE_HEIGHT, TILE_ADVANCE)
            }
            ContentBlock::StatsRow { stats } => {
                self.stats_row(&mut out, stats, y);
                (TILE_HEIGHT, TILE_ADVANCE)
            }
            ContentBlock::IconBox {
                icon,
                title,
                description,
                color,
            } => {
                self.icon_box(&mut out, y, icon, title, description, color.unwrap_or(Accent::Amber));
                (ICON_BOX_HEIGHT, ICON_BOX_ADVANCE)
            }
            ContentBlock::Comparison { left, right } => {
                let panel_w = (self.width - PANEL_GAP) / 2.0;
                self.panel(&mut out, Rect::new(self.left, y, panel_w, PANEL_HEIGHT), left);
                let right_x = self.left + panel_w + PANEL_GAP;
                self.panel(&mut out, Rect::new(right_x, y, panel_w, PANEL_HEIGHT), right);
                (PANEL_HEIGHT, PANEL_ADVANCE)
            }
            ContentBlock::Diagram { variant, data } => match variant {
                DiagramVariant::Flow | DiagramVariant::Timeline => {
                    self.flow(&mut out, *variant, data, y);
                    (FLOW_HEIGHT, FLOW_ADVANCE)
                }
                DiagramVariant::Stack => {
                    self.stack(&mut out, data, y);
                    let h = data.len() as f64 * STACK_PITCH;
                    (h, h + TABLE_GAP)
                }
                DiagramVariant::Hub => {
                    self.hub(&mut out, data, y);
                    (HUB_BAND, HUB_BAND)
                }
            },
            ContentBlock::Quote { text, author } => {
                let inner = Rect::new(self.left + 0.5, y, self.width - 1.0, QUOTE_HEIGHT);
                let style = TextStyle::new(20.0, self.foreground).italic().centered();
                let quoted = format!("\u{201c}{}\u{201d}", text);
                out.push(self.text(inner, vec![Run::plain(quoted)], style));
                match author {
                    Some(author) => {
                        let rect = Rect::new(inner.x, y + QUOTE_HEIGHT, inner.w, 0.4);
                        let style = TextStyle::new(14.0, self.theme.palette.teal).centered();
                        out.push(self.text(rect, vec![Run::plain(format!("— {}", author))], style));
                        (QUOTE_HEIGHT + 0.4, 1.5)
                    }
                    None => (QUOTE_HEIGHT, 1.2),
                }
            }
            ContentBlock::Cta { text, subtext } => {
                let palette = &self.theme.palette;
                let band = self.band(y, CTA_HEIGHT);
                out.push(fill(band, ShapeKind::RoundRect, palette.teal));
                let style = TextStyle::new(24.0, palette.white).bold().centered();
                let text_rect = Rect::new(band.x, y + 0.25, band.w, 0.6);
                out.push(self.text(text_rect, vec![Run::plain(text)], style));
                if let Some(subtext) = subtext {
                    let rect = Rect::new(band.x, y + 0.9, band.w, 0.4);
                    let style = TextStyle::new(14.0, palette.white).centered();
                    out.push(self.text(rect, vec![Run::plain(subtext)], style));
                }
                (CTA_HEIGHT, CTA_ADVANCE)
            }
        };

        let layout = BlockLayout {
            index,
            kind: block.kind(),
            frame: self.band(y, height),
            primitives: out,
        };
        (layout, advance)
    }

    fn band(&self, y: f64, h: f64) -> Rect {
        Rect::new(self.left, y, self.width, h)
    }

    fn text(&self, rect: Rect, runs: Vec<Run>, style: TextStyle) -> Primitive {
        Primitive::Text(TextBox { rect, runs, style })
    }

    fn tile_fill(&self) -> Rgb {
        if self.foreground.is_light() {
            self.theme.palette.tile_dark
        } else {
            self.theme.palette.light_gray
        }
    }

    fn trend_run(&self, trend: Trend) -> Run {
        let palette = &self.theme.palette;
        let (glyph, color) = match trend {
            Trend::Up => (glyph::TREND_UP, palette.green),
            Trend::Down => (glyph::TREND_DOWN, palette.red),
            Trend::Neutral => (glyph::TREND_FLAT, palette.muted),
        };
        Run::colored(format!(" {}", glyph), color)
    }

    fn tile(
        &self,
        out: &mut Vec<Primitive>,
        rect: Rect,
        icon: Option<&str>,
        value: &str,
        label: &str,
        trend: Option<Run>,
    ) {
        let teal = self.theme.palette.teal;
        out.push(fill(rect, ShapeKind::RoundRect, self.tile_fill()));
        if let Some(name) = icon {
            let icon_rect = Rect::new(rect.x, rect.y + 0.02, rect.w, 0.28);
            let style = TextStyle::new(14.0, teal).centered();
            out.push(self.text(icon_rect, vec![Run::plain(icon_glyph(name))], style));
        }
        let mut runs = vec![Run::plain(value)];
        runs.extend(trend);
        let value_rect = Rect::new(rect.x, rect.y + 0.2, rect.w, 0.55);
        out.push(self.text(value_rect, runs, TextStyle::new(32.0, teal).bold().centered()));
        let label_rect = Rect::new(rect.x, rect.y + 0.8, rect.w, 0.3);
        let style = TextStyle::new(11.0, self.foreground).centered();
        out.push(self.text(label_rect, vec![Run::plain(label)], style));
    }

    fn stats_row(&self, out: &mut Vec<Primitive>, stats: &[StatItem], y: f64) {
        if stats.is_empty() {
            return;
        }
        let slot = self.width / stats.len() as f64;
        for (i, stat) in stats.iter().enumerate() {
            let rect = Rect::new(self.left + i as f64 * slot + 0.1, y, slot - 0.2, TILE_HEIGHT);
            self.tile(out, rect, stat.icon.as_deref(), &stat.value, &stat.label, None);
        }
    }

    fn icon_box(
        &self,
        out: &mut Vec<Primitive>,
        y: f64,
        icon: &str,
        title: &str,
        description: &str,
        color: Accent,
    ) {
        let palette = &self.theme.palette;
        let tint = self.theme.tints.get(color);
        let rect = Rect::new(self.left + 0.5, y, self.width - 1.0, ICON_BOX_HEIGHT);
        out.push(fill(rect, ShapeKind::RoundRect, tint.fill));

        let badge = Rect::new(rect.x + 0.2, y + 0.2, 0.6, 0.6);
        out.push(fill(badge, ShapeKind::Ellipse, palette.accent_color(color)));
        let style = TextStyle::new(18.0, palette.white).centered();
        out.push(self.text(badge, vec![Run::plain(icon_glyph(icon))], style));

        let text_x = badge.right() + 0.2;
        let text_w = rect.right() - text_x - 0.2;
        let style = TextStyle::new(16.0, tint.ink).bold();
        out.push(self.text(Rect::new(text_x, y + 0.12, text_w, 0.35), vec![Run::plain(title)], style));
        let style = TextStyle::new(12.0, palette.dark_gray);
        let desc_rect = Rect::new(text_x, y + 0.5, text_w, 0.4);
        out.push(self.text(desc_rect, vec![Run::plain(description)], style));
    }

    fn panel(&self, out: &mut Vec<Primitive>, rect: Rect, panel: &ComparisonPanel) {
        let accent = Accent::from(panel.color);
        let tint = self.theme.tints.get(accent);
        let ink = self.theme.palette.accent_color(accent);
        out.push(fill(rect, ShapeKind::RoundRect, tint.fill));

        let inner_x = rect.x + 0.2;
        let inner_w = rect.w - 0.4;
        let style = TextStyle::new(16.0, ink).bold();
        let title_rect = Rect::new(inner_x, rect.y + 0.15, inner_w, 0.35);
        out.push(self.text(title_rect, vec![Run::plain(&panel.title)], style));
        for (i, item) in panel.items.iter().enumerate() {
            let item_rect = Rect::new(inner_x, rect.y + 0.55 + i as f64 * 0.4, inner_w, 0.35);
            let runs = vec![Run::colored(glyph::BULLET, ink), Run::plain(item)];
            let style = TextStyle::new(13.0, self.theme.palette.dark_gray);
            out.push(self.text(item_rect, runs, style));
        }
    }

    fn flow(&self, out: &mut Vec<Primitive>, variant: DiagramVariant, data: &[String], y: f64) {
        if data.is_empty() {
            return;
        }
        let palette = &self.theme.palette;
        let n = data.len() as f64;
        let total = n * FLOW_BOX + (n - 1.0) * FLOW_GAP;
        let start = self.left + ((self.width - total) / 2.0).max(0.0);
        let (shape, color) = match variant {
            DiagramVariant::Timeline => (ShapeKind::Ellipse, palette.navy),
            _ => (ShapeKind::RoundRect, palette.teal),
        };

        for (i, label) in data.iter().enumerate() {
            let rect = Rect::new(start + i as f64 * (FLOW_BOX + FLOW_GAP), y, FLOW_BOX, FLOW_HEIGHT);
            out.push(fill(rect, shape, color));
            let style = TextStyle::new(12.0, palette.white).bold().centered();
            out.push(self.text(rect.inset(0.05, 0.0), vec![Run::plain(label)], style));
            if i + 1 < data.len() {
                out.push(Primitive::Line(Line {
                    from: (rect.right(), rect.center_y()),
                    to: (rect.right() + FLOW_GAP, rect.center_y()),
                    color: palette.muted,
                }));
            }
        }
    }

    fn stack(&self, out: &mut Vec<Primitive>, data: &[String], y: f64) {
        let palette = &self.theme.palette;
        let x = self.left + ((self.width - STACK_WIDTH) / 2.0).max(0.0);
        for (i, label) in data.iter().enumerate() {
            let rect = Rect::new(x, y + i as f64 * STACK_PITCH, STACK_WIDTH, STACK_PITCH - 0.1);
            let color = if i % 2 == 0 { palette.navy } else { palette.teal };
            out.push(fill(rect, ShapeKind::Rect, color));
            let style = TextStyle::new(14.0, palette.white).bold().centered();
            out.push(self.text(rect, vec![Run::plain(label)], style));
        }
    }

    /// Centre node plus up to four satellites in NE, NW, SE, SW order.
    fn hub(&self, out: &mut Vec<Primitive>, data: &[String], y: f64) {
        let palette = &self.theme.palette;
        if data.len() > HUB_SATELLITES {
            warn!(
                dropped = data.len() - HUB_SATELLITES,
                "hub diagram keeps the first {} satellites",
                HUB_SATELLITES
            );
        }

        let cx = self.theme.width / 2.0;
        let centre = Rect::new(cx - 1.0, y + 0.4, 2.0, 1.0);
        let (sat_w, sat_h) = (1.8, 0.6);
        let east = cx + 1.4;
        let west = cx - 1.4 - sat_w;
        let slots = [(east, y), (west, y), (east, y + 1.2), (west, y + 1.2)];
        let satellites: Vec<_> = data.iter().zip(slots).collect();

        for (_, (sx, sy)) in &satellites {
            let anchor_x = if *sx > cx { *sx } else { sx + sat_w };
            out.push(Primitive::Line(Line {
                from: (cx, centre.center_y()),
                to: (anchor_x, sy + sat_h / 2.0),
                color: palette.muted,
            }));
        }

        out.push(fill(centre, ShapeKind::Ellipse, palette.navy));
        let style = TextStyle::new(14.0, palette.white).bold().centered();
        out.push(self.text(centre, vec![Run::plain(&self.theme.hub_label)], style));

        for (label, (sx, sy)) in satellites {
            let rect = Rect::new(sx, sy, sat_w, sat_h);
            out.push(fill(rect, ShapeKind::RoundRect, palette.teal));
            let style = TextStyle::new(12.0, palette.white).centered();
            out.push(self.text(rect, vec![Run::plain(label)], style));
        }
    }
}

fn fill(rect: Rect, shape: ShapeKind, color: Rgb) -> Primitive {
    Primitive::Fill(Fill { rect, shape, color })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{PanelColor, TextAlign};

    fn placer(theme: &Theme) -> BlockPlacer<'_> {
        BlockPlacer {
            theme,
            foreground: theme.palette.dark_gray,
            left: 0.5,
            width: 9.0,
        }
    }

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_text_block() {
        let theme = Theme::default();
        let block = ContentBlock::Text {
            text: "Hello".to_string(),
            bold: true,
            italic: false,
            size: TextSize::Xl,
            align: TextAlign::Center,
        };
        let (layout, advance) = placer(&theme).place(0, &block, 1.1);
        assert_eq!(advance, TEXT_ADVANCE);
        assert_eq!(layout.frame, Rect::new(0.5, 1.1, 9.0, 0.5));
        match &layout.primitives[0] {
            Primitive::Text(text) => {
                assert_eq!(text.style.size_pt, 20.0);
                assert!(text.style.bold);
                assert_eq!(text.style.align, TextAlign::Center);
                assert_eq!(text.style.color, theme.palette.dark_gray);
            }
            other => panic!("unexpected primitive {:?}", other),
        }
    }

    #[test]
    fn test_numbered_prefix() {
        let theme = Theme::default();
        let block = ContentBlock::Numbered {
            items: strings(&["Plan", "Build", "Run"]),
        };
        let (layout, advance) = placer(&theme).place(2, &block, 1.0);
        assert_eq!(layout.texts(), strings(&["1. Plan", "2. Build", "3. Run"]));
        assert!((advance - (3.0 * NUMBERED_PITCH + LIST_GAP)).abs() < 1e-9);
    }

    #[test]
    fn test_table_height() {
        let theme = Theme::default();
        let block = ContentBlock::Table {
            headers: strings(&["Today", "Tomorrow"]),
            rows: vec![strings(&["a", "b"]), strings(&["c", "d"])],
        };
        let (layout, advance) = placer(&theme).place(0, &block, 1.1);
        assert!((layout.frame.h - 1.2).abs() < 1e-9);
        assert!((advance - 1.5).abs() < 1e-9);
        assert_eq!(layout.texts(), strings(&["Today", "Tomorrow", "a", "b", "c", "d"]));
    }

    #[test]
    fn test_spacer_is_invisible() {
        let theme = Theme::default();
        let block = ContentBlock::Spacer {
            size: SpacerSize::Lg,
        };
        let (layout, advance) = placer(&theme).place(0, &block, 2.0);
        assert!(!layout.is_visible());
        assert_eq!(advance, 0.5);
    }

    #[test]
    fn test_stats_row_equal_tiles() {
        let theme = Theme::default();
        let stats = ["80%", "$4.2M", "47"]
            .iter()
            .map(|v| StatItem {
                value: v.to_string(),
                label: "x".to_string(),
                icon: None,
            })
            .collect();
        let (layout, _) = placer(&theme).place(0, &ContentBlock::StatsRow { stats }, 1.0);
        let tiles: Vec<Rect> = layout
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Fill(f) => Some(f.rect),
                _ => None,
            })
            .collect();
        assert_eq!(tiles.len(), 3);
        assert!(tiles.iter().all(|t| (t.w - tiles[0].w).abs() < 1e-9));
        assert!(tiles.iter().all(|t| t.y == 1.0));
        assert!((tiles[1].x - tiles[0].x - 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_hub_drops_extra_satellites() {
        let theme = Theme::default();
        let block = ContentBlock::Diagram {
            variant: DiagramVariant::Hub,
            data: strings(&["Dev", "Sec", "Ops", "Risk", "Extra"]),
        };
        let (layout, advance) = placer(&theme).place(0, &block, 1.0);
        assert_eq!(advance, HUB_BAND);
        assert_eq!(
            layout.texts(),
            strings(&["Siloed Approach", "Dev", "Sec", "Ops", "Risk"])
        );
        let satellites: Vec<Rect> = layout
            .primitives
            .iter()
            .filter_map(|p| match p {
                Primitive::Fill(f) if f.shape == ShapeKind::RoundRect => Some(f.rect),
                _ => None,
            })
            .collect();
        // NE, NW, SE, SW
        assert!(satellites[0].x > 5.0 && satellites[0].y == 1.0);
        assert!(satellites[1].x < 5.0 && satellites[1].y == 1.0);
        assert!(satellites[2].x > 5.0 && satellites[2].y > 1.0);
        assert!(satellites[3].x < 5.0 && satellites[3].y > 1.0);
    }

    #[test]
    fn test_comparison_panels_share_band() {
        let theme = Theme::default();
        let panel = |title: &str, color| ComparisonPanel {
            title: title.to_string(),
            items: strings(&["one", "two"]),
            color,
        };
        let block = ContentBlock::Comparison {
            left: panel("Before", PanelColor::Red),
            right: panel("After", PanelColor::Green),
        };
        let (layout, advance) = placer(&theme).place(0, &block, 1.7);
        assert_eq!(advance, PANEL_ADVANCE);
        assert_eq!(
            layout.texts(),
            strings(&["Before", "• one", "• two", "After", "• one", "• two"])
        );
    }

    #[test]
    fn test_quote_with_author() {
        let theme = Theme::default();
        let block = ContentBlock::Quote {
            text: "Ship it".to_string(),
            author: Some("Ops".to_string()),
        };
        let (layout, advance) = placer(&theme).place(0, &block, 1.0);
        assert_eq!(advance, 1.5);
        assert_eq!(layout.texts(), strings(&["\u{201c}Ship it\u{201d}", "— Ops"]));
    }

    #[test]
    fn test_stat_trend_glyph() {
        let theme = Theme::default();
        let block = ContentBlock::Stat {
            value: "12".to_string(),
            label: "Days".to_string(),
            trend: Some(Trend::Down),
        };
        let (layout, _) = placer(&theme).place(0, &block, 1.0);
        assert_eq!(layout.texts(), strings(&["12 ▼", "Days"]));
    }
}
