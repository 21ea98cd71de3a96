//! Terminal painter.
//!
//! Pure drawing: functions here read a [`ViewFrame`] and write to a ratatui
//! frame or buffer, never touching session state. Slide geometry comes from
//! the shared layout, scaled from canvas inches to terminal cells.

use super::frame::ViewFrame;
use super::keys::Action;
use crate::layout::{self, Fill, Primitive, SlideLayout, TableGrid, TextBox};
use crate::model::{BlockKind, TextAlign};
use crate::theme::{Rgb, Theme};
use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Widget, Wrap};

const STATUS_HEIGHT: u16 = 1;
const CONTROLS_HEIGHT: u16 = 1;
const NOTES_HEIGHT: u16 = 5;
const THUMB_HEIGHT: u16 = 3;
const THUMB_WIDTH: u16 = 16;
const BUTTON_GAP: u16 = 2;

/// Clickable controls along the bottom row, left to right.
const BUTTONS: [(&str, Action); 4] = [
    ("◀ prev", Action::Prev),
    ("next ▶", Action::Next),
    ("[f] fullscreen", Action::ToggleFullscreen),
    ("[n] notes", Action::ToggleNotes),
];

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f64 = 2.0;

/// Texts painted for one content block, in paint order.
pub type PaintedBlock = (BlockKind, Vec<String>);

fn color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}

/// Screen regions for one redraw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenAreas {
    pub status: Rect,
    pub slide: Rect,
    pub notes: Rect,
    pub controls: Rect,
    /// Visible thumbnails as `(slide index, area)`
    pub thumbnails: Vec<(usize, Rect)>,
    pub buttons: Vec<Button>,
}

/// One control on the bottom row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    pub label: &'static str,
    pub action: Action,
    pub area: Rect,
    /// Prev/next are disabled at the deck boundaries
    pub enabled: bool,
}

impl ScreenAreas {
    /// Action for a click at `position`, if it lands on an enabled control.
    pub fn hit_test(&self, position: Position) -> Option<Action> {
        let thumbnail = self
            .thumbnails
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(index, _)| Action::GoTo(*index));
        thumbnail.or_else(|| {
            self.buttons
                .iter()
                .find(|b| b.enabled && b.area.contains(position))
                .map(|b| b.action)
        })
    }
}

/// Split the terminal for `view`. Fullscreen gives the slide everything.
pub fn screen_areas(area: Rect, view: &ViewFrame<'_>, theme: &Theme) -> ScreenAreas {
    if view.fullscreen {
        return ScreenAreas {
            status: Rect::default(),
            slide: fit_canvas(area, theme),
            notes: Rect::default(),
            controls: Rect::default(),
            thumbnails: Vec::new(),
            buttons: Vec::new(),
        };
    }

    let notes_height = if view.notes.is_some() { NOTES_HEIGHT } else { 0 };
    let [status, body, notes, strip, controls] = Layout::vertical([
        Constraint::Length(STATUS_HEIGHT),
        Constraint::Min(3),
        Constraint::Length(notes_height),
        Constraint::Length(THUMB_HEIGHT),
        Constraint::Length(CONTROLS_HEIGHT),
    ])
    .areas(area);

    ScreenAreas {
        status,
        slide: fit_canvas(body, theme),
        notes,
        controls,
        thumbnails: thumbnail_areas(strip, view.total, view.index),
        buttons: button_areas(controls, view),
    }
}

/// Lay the controls out from the left edge of `row`, clipped to its width.
pub fn button_areas(row: Rect, view: &ViewFrame<'_>) -> Vec<Button> {
    let mut x = row.x;
    let mut buttons = Vec::with_capacity(BUTTONS.len());
    for (label, action) in BUTTONS {
        let width = (Span::raw(label).width() as u16).min(row.right().saturating_sub(x));
        if width == 0 || row.height == 0 {
            break;
        }
        let enabled = match action {
            Action::Prev => view.can_prev,
            Action::Next => view.can_next,
            _ => true,
        };
        buttons.push(Button {
            label,
            action,
            area: Rect::new(x, row.y, width, 1),
            enabled,
        });
        x = x.saturating_add(width + BUTTON_GAP);
    }
    buttons
}

/// Largest area of the canvas aspect ratio that fits in `area`, centred.
pub fn fit_canvas(area: Rect, theme: &Theme) -> Rect {
    let ratio = theme.height / theme.width / CELL_ASPECT;
    let mut width = f64::from(area.width);
    let mut height = (width * ratio).round();
    if height > f64::from(area.height) {
        height = f64::from(area.height);
        width = (height / ratio).round().min(f64::from(area.width));
    }
    let (width, height) = (width as u16, height as u16);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Thumbnail slots along `strip`, scrolled so that `active` stays visible.
pub fn thumbnail_areas(strip: Rect, count: usize, active: usize) -> Vec<(usize, Rect)> {
    let fit = usize::from((strip.width / THUMB_WIDTH).max(1));
    let first = (active + 1).saturating_sub(fit);
    (first..count.min(first + fit))
        .enumerate()
        .map(|(slot, index)| {
            let x = strip.x + slot as u16 * THUMB_WIDTH;
            let width = THUMB_WIDTH.min(strip.right().saturating_sub(x));
            (index, Rect::new(x, strip.y, width, strip.height))
        })
        .filter(|(_, rect)| !rect.is_empty())
        .collect()
}

/// Draw the whole viewer.
pub fn render(frame: &mut Frame, view: &ViewFrame<'_>, theme: &Theme) {
    let areas = screen_areas(frame.area(), view, theme);
    let muted = Style::default().fg(color(theme.palette.muted));

    frame.render_widget(
        SlideCanvas::new(view.layout, theme).dimmed(view.transitioning),
        areas.slide,
    );
    if view.fullscreen {
        return;
    }

    let status = Line::from(vec![
        Span::styled(view.title, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(view.position(), muted),
    ]);
    frame.render_widget(Paragraph::new(status), areas.status);

    if let Some(notes) = view.notes {
        frame.render_widget(
            Paragraph::new(notes)
                .wrap(Wrap { trim: false })
                .block(Block::bordered().title(" Notes ").border_style(muted)),
            areas.notes,
        );
    }

    let teal = color(theme.palette.teal);
    for (index, area) in &areas.thumbnails {
        let Some(thumb) = view.thumbnails.get(*index) else {
            continue;
        };
        let border = if thumb.active {
            Style::default().fg(teal).add_modifier(Modifier::BOLD)
        } else {
            muted
        };
        frame.render_widget(
            Paragraph::new(format!("{} {}", thumb.number, thumb.title))
                .block(Block::bordered().border_style(border)),
            *area,
        );
    }

    for button in &areas.buttons {
        let style = if button.enabled {
            Style::default().fg(teal)
        } else {
            muted.add_modifier(Modifier::DIM)
        };
        frame.render_widget(Paragraph::new(Span::styled(button.label, style)), button.area);
    }
}

/// Paints one [`SlideLayout`] into a buffer area.
#[derive(Debug, Clone, Copy)]
pub struct SlideCanvas<'a> {
    layout: &'a SlideLayout,
    width_in: f64,
    height_in: f64,
    dimmed: bool,
}

impl<'a> SlideCanvas<'a> {
    pub fn new(layout: &'a SlideLayout, theme: &Theme) -> Self {
        Self {
            layout,
            width_in: theme.width,
            height_in: theme.height,
            dimmed: false,
        }
    }

    /// Fade the slide, used while a transition is pending.
    pub fn dimmed(mut self, dimmed: bool) -> Self {
        self.dimmed = dimmed;
        self
    }

    /// Paint into `buf` and return the texts of every visible block.
    ///
    /// Content below the canvas is clipped by the area, not reflowed.
    pub fn paint(&self, area: Rect, buf: &mut Buffer) -> Vec<PaintedBlock> {
        let area = area.intersection(buf.area);
        let scale = Scale {
            area,
            sx: f64::from(area.width) / self.width_in,
            sy: f64::from(area.height) / self.height_in,
        };
        let layout = self.layout;

        buf.set_style(area, Style::default().bg(color(layout.background.base())));
        for fill in &layout.chrome {
            scale.fill(buf, fill);
        }
        scale.text(buf, &layout.title);
        if let Some(subtitle) = &layout.subtitle {
            scale.text(buf, subtitle);
        }

        let mut painted = Vec::with_capacity(layout.blocks.len());
        for block in layout.visible_blocks() {
            let mut texts = Vec::new();
            for primitive in &block.primitives {
                match primitive {
                    Primitive::Fill(fill) => scale.fill(buf, fill),
                    Primitive::Text(text) => {
                        scale.text(buf, text);
                        texts.push(text.text());
                    },
                    Primitive::Table(grid) => {
                        scale.table(buf, grid);
                        texts.extend(grid.headers.iter().cloned());
                        texts.extend(grid.rows.iter().flatten().cloned());
                    },
                    Primitive::Line(line) => scale.line(buf, line),
                }
            }
            painted.push((block.kind, texts));
        }

        scale.text(buf, &layout.page_number);

        if self.dimmed {
            buf.set_style(area, Style::default().add_modifier(Modifier::DIM));
        }
        painted
    }
}

impl Widget for SlideCanvas<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.paint(area, buf);
    }
}

/// Inch to cell mapping for one canvas area.
struct Scale {
    area: Rect,
    sx: f64,
    sy: f64,
}

impl Scale {
    fn col(&self, x: f64) -> i32 {
        (x * self.sx).round() as i32 + i32::from(self.area.x)
    }

    fn row(&self, y: f64) -> i32 {
        (y * self.sy).round() as i32 + i32::from(self.area.y)
    }

    /// Cell rectangle for `rect`, at least one cell in each direction,
    /// clipped to the canvas.
    fn cells(&self, rect: &layout::Rect) -> Option<Rect> {
        let x0 = self.col(rect.x);
        let y0 = self.row(rect.y);
        let x1 = self.col(rect.right()).max(x0 + 1);
        let y1 = self.row(rect.bottom()).max(y0 + 1);

        let left = x0.max(i32::from(self.area.left()));
        let top = y0.max(i32::from(self.area.top()));
        let right = x1.min(i32::from(self.area.right()));
        let bottom = y1.min(i32::from(self.area.bottom()));
        if left >= right || top >= bottom {
            return None;
        }
        Some(Rect::new(
            left as u16,
            top as u16,
            (right - left) as u16,
            (bottom - top) as u16,
        ))
    }

    fn fill(&self, buf: &mut Buffer, fill: &Fill) {
        if let Some(cells) = self.cells(&fill.rect) {
            buf.set_style(cells, Style::default().bg(color(fill.color)));
        }
    }

    fn text(&self, buf: &mut Buffer, text: &TextBox) {
        let Some(cells) = self.cells(&text.rect) else {
            return;
        };
        let style = &text.style;
        let mut base = Style::default();
        if style.italic {
            base = base.add_modifier(Modifier::ITALIC);
        }
        let spans: Vec<Span<'_>> = text
            .runs
            .iter()
            .map(|run| {
                let mut s = base.fg(color(run.color.unwrap_or(style.color)));
                if style.bold || run.bold {
                    s = s.add_modifier(Modifier::BOLD);
                }
                Span::styled(run.text.as_str(), s)
            })
            .collect();
        let line = Line::from(spans);

        let width = u16::try_from(line.width()).unwrap_or(u16::MAX).min(cells.width);
        let offset = match style.align {
            TextAlign::Left => 0,
            TextAlign::Center => (cells.width - width) / 2,
            TextAlign::Right => cells.width - width,
        };
        let y = cells.y + cells.height.saturating_sub(1) / 2;
        buf.set_line(cells.x + offset, y, &line, cells.width - offset);
    }

    fn table(&self, buf: &mut Buffer, grid: &TableGrid) {
        let columns = grid.columns().max(1);
        let column_width = grid.rect.w / columns as f64;
        let rows = std::iter::once((&grid.headers, true)).chain(grid.rows.iter().map(|r| (r, false)));

        for (r, (cells, header)) in rows.enumerate() {
            let (fill, ink) = if header {
                (grid.header_fill, grid.header_ink)
            } else {
                (grid.body_fills[(r - 1) % 2], grid.body_ink)
            };
            let y = grid.rect.y + r as f64 * grid.row_height;
            for (c, cell) in cells.iter().enumerate() {
                let rect = layout::Rect::new(
                    grid.rect.x + c as f64 * column_width,
                    y,
                    column_width,
                    grid.row_height,
                );
                let Some(area) = self.cells(&rect) else {
                    continue;
                };
                let mut style = Style::default().bg(color(fill)).fg(color(ink));
                if header {
                    style = style.add_modifier(Modifier::BOLD);
                }
                buf.set_style(area, style);
                let text_y = area.y + area.height.saturating_sub(1) / 2;
                buf.set_stringn(area.x + 1, text_y, cell, usize::from(area.width.saturating_sub(2)), style);
            }
        }
    }

    fn line(&self, buf: &mut Buffer, line: &layout::Line) {
        let (x0, y0) = (self.col(line.from.0), self.row(line.from.1));
        let (x1, y1) = (self.col(line.to.0), self.row(line.to.1));
        let fg = color(line.color);

        let horizontal = (x1 - x0).abs() >= (y1 - y0).abs();
        let points: Vec<(i32, i32, &str)> = if horizontal {
            let step = if x1 >= x0 { 1 } else { -1 };
            let head = if step > 0 { "▶" } else { "◀" };
            (0..=(x1 - x0).abs())
                .map(|i| {
                    let x = x0 + i * step;
                    (x, y0, if x == x1 { head } else { "─" })
                })
                .collect()
        } else {
            let step = if y1 >= y0 { 1 } else { -1 };
            let head = if step > 0 { "▼" } else { "▲" };
            (0..=(y1 - y0).abs())
                .map(|i| {
                    let y = y0 + i * step;
                    (x0, y, if y == y1 { head } else { "│" })
                })
                .collect()
        };

        for (x, y, symbol) in points {
            let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
                continue;
            };
            if !self.area.contains((x, y).into()) {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_symbol(symbol).set_fg(fg);
            }
        }
    }
}
