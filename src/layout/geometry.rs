//! Target-agnostic drawing primitives in canvas inches.

use crate::model::TextAlign;
use crate::theme::Rgb;

/// Axis-aligned rectangle, origin top-left, in inches.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub w: f64,
    pub h: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> f64 {
        self.x + self.w
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.h
    }

    pub fn center_y(&self) -> f64 {
        self.y + self.h / 2.0
    }

    /// Shrink by `dx` on the left and right and `dy` on the top and bottom.
    pub fn inset(&self, dx: f64, dy: f64) -> Self {
        Self::new(
            self.x + dx,
            self.y + dy,
            (self.w - 2.0 * dx).max(0.0),
            (self.h - 2.0 * dy).max(0.0),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Rect,
    RoundRect,
    Ellipse,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub rect: Rect,
    pub shape: ShapeKind,
    pub color: Rgb,
}

/// A styled span inside a paragraph.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    /// Overrides the paragraph colour
    pub color: Option<Rgb>,
    pub bold: bool,
}

impl Run {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
            bold: false,
        }
    }

    pub fn colored(text: impl Into<String>, color: Rgb) -> Self {
        Self {
            text: text.into(),
            color: Some(color),
            bold: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size_pt: f64,
    pub bold: bool,
    pub italic: bool,
    pub color: Rgb,
    pub align: TextAlign,
}

impl TextStyle {
    pub fn new(size_pt: f64, color: Rgb) -> Self {
        Self {
            size_pt,
            bold: false,
            italic: false,
            color,
            align: TextAlign::Left,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }

    pub fn centered(self) -> Self {
        self.align(TextAlign::Center)
    }
}

/// A single-paragraph text frame.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBox {
    pub rect: Rect,
    pub runs: Vec<Run>,
    pub style: TextStyle,
}

impl TextBox {
    /// Concatenated run text as it appears on the page.
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

/// Table with a header row and uniformly sized columns.
#[derive(Debug, Clone, PartialEq)]
pub struct TableGrid {
    pub rect: Rect,
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub row_height: f64,
    pub size_pt: f64,
    pub header_fill: Rgb,
    pub header_ink: Rgb,
    pub body_fills: [Rgb; 2],
    pub body_ink: Rgb,
}

impl TableGrid {
    pub fn columns(&self) -> usize {
        self.headers.len()
    }

    pub fn column_width(&self) -> f64 {
        self.rect.w / self.columns().max(1) as f64
    }

    /// Header plus body rows.
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }
}

/// Straight connector between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub from: (f64, f64),
    pub to: (f64, f64),
    pub color: Rgb,
}

impl Line {
    /// Bounding box plus the flips needed to draw `from` → `to` inside it.
    pub fn bounds(&self) -> (Rect, bool, bool) {
        let (x1, y1) = self.from;
        let (x2, y2) = self.to;
        let rect = Rect::new(x1.min(x2), y1.min(y2), (x2 - x1).abs(), (y2 - y1).abs());
        (rect, x2 < x1, y2 < y1)
    }
}

/// One drawable unit emitted by the layout engine.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Fill(Fill),
    Text(TextBox),
    Table(TableGrid),
    Line(Line),
}

impl Primitive {
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Fill(fill) => fill.rect,
            Self::Text(text) => text.rect,
            Self::Table(table) => table.rect,
            Self::Line(line) => line.bounds().0,
        }
    }
}
