//! Layout engine shared by the viewer and the deck writer.
//!
//! Given a slide and a [`Theme`], the engine produces a [`SlideLayout`]: the
//! background, chrome, header and one [`BlockLayout`] per content block, all
//! in canvas inches. Renderers only paint what they receive here, which keeps
//! the terminal view and the exported deck in step.
//!
//! Blocks flow top to bottom with a running cursor. Content that runs past the
//! bottom edge is laid out off-canvas and logged; it is never clipped, shrunk
//! or paginated.

mod blocks;
mod geometry;
mod glyph;

pub use blocks::{BlockLayout, spacer_height, text_size_pt};
pub use geometry::{Fill, Line, Primitive, Rect, Run, ShapeKind, TableGrid, TextBox, TextStyle};
pub use glyph::icon_glyph;

use crate::model::{Background, Deck, Slide, TextAlign};
use crate::theme::{Rgb, Theme};
use blocks::BlockPlacer;
use tracing::{debug, warn};

/// Side margin of the usable band
pub const MARGIN: f64 = 0.5;
const HEADER_BAR: f64 = 0.9;
const CONTENT_TOP: f64 = 1.1;
const SUBTITLE_HEIGHT: f64 = 0.6;
const CENTERED_TITLE: f64 = 0.8;
const CENTERED_TOP: f64 = 0.3;
const HEADER_GAP: f64 = 0.2;
const FOOTER_BAR: f64 = 0.08;
const FOOTER_BAND: f64 = 0.12;

/// Slide background treatment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundFill {
    Solid(Rgb),
    /// Top to bottom linear gradient
    Gradient(Rgb, Rgb),
}

impl BackgroundFill {
    /// Representative single colour, for targets without gradients.
    pub fn base(&self) -> Rgb {
        match self {
            Self::Solid(color) | Self::Gradient(color, _) => *color,
        }
    }
}

/// Computed geometry for one slide.
#[derive(Debug, Clone, PartialEq)]
pub struct SlideLayout {
    pub slide_id: u32,
    pub background: BackgroundFill,
    /// Base text colour derived from the background
    pub foreground: Rgb,
    pub centered: bool,
    /// Accent bars drawn under everything else
    pub chrome: Vec<Fill>,
    pub title: TextBox,
    pub subtitle: Option<TextBox>,
    pub blocks: Vec<BlockLayout>,
    pub page_number: TextBox,
    /// Some block extends past the bottom of the canvas
    pub overflow: bool,
}

impl SlideLayout {
    /// Blocks that emit geometry, in content order.
    pub fn visible_blocks(&self) -> impl Iterator<Item = &BlockLayout> {
        self.blocks.iter().filter(|b| b.is_visible())
    }
}

/// Computes slide geometry for a theme.
#[derive(Debug, Clone, Copy)]
pub struct LayoutEngine<'t> {
    theme: &'t Theme,
}

impl<'t> LayoutEngine<'t> {
    pub fn new(theme: &'t Theme) -> Self {
        Self { theme }
    }

    pub fn theme(&self) -> &'t Theme {
        self.theme
    }

    /// Lay out every slide of `deck` in order.
    pub fn layout_deck(&self, deck: &Deck) -> Vec<SlideLayout> {
        deck.slides()
            .iter()
            .map(|slide| self.layout_slide(slide, deck.len()))
            .collect()
    }

    /// Lay out `slide` as one of `total` pages.
    pub fn layout_slide(&self, slide: &Slide, total: usize) -> SlideLayout {
        let theme = self.theme;
        let palette = &theme.palette;
        let foreground = theme.foreground(slide.background);
        let centered = slide.layout.is_centered();
        let width = theme.width - 2.0 * MARGIN;

        let placer = BlockPlacer {
            theme,
            foreground,
            left: MARGIN,
            width,
        };

        let (title, subtitle, chrome, top) = if centered {
            let header_h = CENTERED_TITLE
                + if slide.subtitle.is_some() {
                    SUBTITLE_HEIGHT
                } else {
                    0.0
                };
            let body: f64 = slide
                .content
                .iter()
                .enumerate()
                .map(|(i, block)| placer.place(i, block, 0.0).1)
                .sum();
            let total_h = header_h + HEADER_GAP + body;
            let y0 = ((theme.height - total_h) / 2.0).max(CENTERED_TOP);

            let title = TextBox {
                rect: Rect::new(MARGIN, y0, width, CENTERED_TITLE),
                runs: vec![Run::plain(&slide.title)],
                style: TextStyle::new(36.0, foreground).bold().centered(),
            };
            let subtitle = slide.subtitle.as_ref().map(|text| TextBox {
                rect: Rect::new(MARGIN, y0 + CENTERED_TITLE, width, SUBTITLE_HEIGHT - 0.1),
                runs: vec![Run::plain(text)],
                style: TextStyle::new(20.0, palette.teal).centered(),
            });
            let band = Fill {
                rect: Rect::new(0.0, theme.height - FOOTER_BAND, theme.width, FOOTER_BAND),
                shape: ShapeKind::Rect,
                color: palette.teal,
            };
            (title, subtitle, vec![band], y0 + header_h + HEADER_GAP)
        } else {
            let bar = Fill {
                rect: Rect::new(0.0, 0.0, theme.width, HEADER_BAR),
                shape: ShapeKind::Rect,
                color: palette.navy,
            };
            let footer = Fill {
                rect: Rect::new(0.0, theme.height - FOOTER_BAR, theme.width, FOOTER_BAR),
                shape: ShapeKind::Rect,
                color: palette.teal,
            };
            let title = TextBox {
                rect: Rect::new(MARGIN, 0.15, width, 0.6),
                runs: vec![Run::plain(&slide.title)],
                style: TextStyle::new(28.0, palette.white).bold(),
            };
            let subtitle = slide.subtitle.as_ref().map(|text| TextBox {
                rect: Rect::new(MARGIN, CONTENT_TOP, width, 0.4),
                runs: vec![Run::plain(text)],
                style: TextStyle::new(18.0, palette.teal),
            });
            let top = CONTENT_TOP
                + if subtitle.is_some() {
                    SUBTITLE_HEIGHT
                } else {
                    0.0
                };
            (title, subtitle, vec![bar, footer], top)
        };

        let mut cursor = top;
        let mut blocks = Vec::with_capacity(slide.content.len());
        for (i, block) in slide.content.iter().enumerate() {
            let (layout, advance) = placer.place(i, block, cursor);
            blocks.push(layout);
            cursor += advance;
        }

        let bottom = blocks
            .iter()
            .filter(|b| b.is_visible())
            .flat_map(|b| b.primitives.iter().map(|p| p.bounds().bottom()))
            .fold(0.0_f64, f64::max);
        let overflow = bottom > theme.height;
        if overflow {
            warn!(
                slide = slide.id,
                bottom, canvas = theme.height, "content runs past the bottom of the slide"
            );
        }

        let page_number = TextBox {
            rect: Rect::new(theme.width - 1.5, theme.height - 0.45, 1.0, 0.3),
            runs: vec![Run::plain(format!("{} / {}", slide.id, total))],
            style: TextStyle::new(10.0, palette.muted).align(TextAlign::Right),
        };

        debug!(slide = slide.id, blocks = blocks.len(), "slide laid out");

        SlideLayout {
            slide_id: slide.id,
            background: self.background(slide.background),
            foreground,
            centered,
            chrome,
            title,
            subtitle,
            blocks,
            page_number,
            overflow,
        }
    }

    fn background(&self, background: Option<Background>) -> BackgroundFill {
        let palette = &self.theme.palette;
        match background {
            Some(Background::Dark) => BackgroundFill::Solid(palette.navy),
            Some(Background::Accent) => BackgroundFill::Solid(palette.accent),
            Some(Background::Gradient) => {
                BackgroundFill::Gradient(palette.gradient_start, palette.gradient_end)
            }
            Some(Background::Light) | None => BackgroundFill::Solid(palette.white),
        }
    }
}
