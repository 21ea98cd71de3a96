//! Deck export: paints [`SlideLayout`]s onto a [`MutablePresentation`] and
//! persists the package.
//!
//! Shapes that belong to a content block are named `"{kind} {index}"` (for
//! example `stats-row 0`), which is what [`super::outline`] keys on when a
//! written deck is read back.

use super::pres::MutablePresentation;
use crate::error::{ExportIoError, Result};
use crate::layout::{LayoutEngine, Primitive, SlideLayout};
use crate::model::Deck;
use crate::theme::Theme;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

/// Writes decks for one theme.
#[derive(Debug, Clone, Copy)]
pub struct DeckWriter<'t> {
    engine: LayoutEngine<'t>,
}

impl<'t> DeckWriter<'t> {
    pub fn new(theme: &'t Theme) -> Self {
        Self {
            engine: LayoutEngine::new(theme),
        }
    }

    /// Build the in-memory presentation, one page per slide in deck order.
    pub fn build(&self, deck: &Deck) -> MutablePresentation {
        let theme = self.engine.theme();
        let mut pres = MutablePresentation::new(theme);
        pres.set_properties(deck.meta().clone(), deck.display_title());

        for (slide, layout) in deck.slides().iter().zip(self.engine.layout_deck(deck)) {
            let page = pres.add_slide();
            paint(page, &layout, &theme.font_family);
            if let Some(notes) = slide.notes() {
                page.set_notes(notes);
            }
            debug!(slide = slide.id, shapes = page.shapes().len(), "slide written");
        }
        pres
    }

    /// Render `deck` to package bytes.
    pub fn render(&self, deck: &Deck) -> Result<Vec<u8>> {
        self.build(deck).to_bytes(self.engine.theme())
    }

    /// Render `deck` and write it to `path`, returning the artifact size.
    ///
    /// The package is written to a temporary file in the destination
    /// directory and renamed into place, so readers never observe a partial
    /// artifact. Nothing is left behind on failure.
    pub fn write_to(&self, deck: &Deck, path: &Path) -> Result<usize> {
        let bytes = self.render(deck)?;
        write_atomic(path, &bytes)?;
        info!(
            path = %path.display(),
            slides = deck.len(),
            bytes = bytes.len(),
            "deck exported"
        );
        Ok(bytes.len())
    }
}

/// Render `deck` with `theme` to package bytes.
pub fn render(deck: &Deck, theme: &Theme) -> Result<Vec<u8>> {
    DeckWriter::new(theme).render(deck)
}

/// Render and atomically write `deck` to `path`.
pub fn export(deck: &Deck, theme: &Theme, path: impl AsRef<Path>) -> Result<usize> {
    DeckWriter::new(theme).write_to(deck, path.as_ref())
}

/// [`export`] on the blocking pool, for callers inside a tokio runtime.
pub async fn export_async(deck: Deck, theme: Theme, path: PathBuf) -> Result<usize> {
    tokio::task::spawn_blocking(move || export(&deck, &theme, &path))
        .await
        .map_err(std::io::Error::other)?
}

fn write_atomic(path: &Path, bytes: &[u8]) -> std::result::Result<(), ExportIoError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let fail = |err| ExportIoError::new(path, err);

    let mut tmp = NamedTempFile::new_in(dir).map_err(fail)?;
    tmp.write_all(bytes).map_err(fail)?;
    tmp.as_file().sync_all().map_err(fail)?;
    tmp.persist(path).map_err(|err| fail(err.error))?;
    Ok(())
}

fn paint(page: &mut super::slide::MutableSlide, layout: &SlideLayout, font: &str) {
    page.set_background(layout.background);

    for (i, fill) in layout.chrome.iter().enumerate() {
        page.add_auto_shape(chrome_name(layout.centered, i), fill);
    }

    page.add_text_box("title", &layout.title, font);
    if let Some(subtitle) = &layout.subtitle {
        page.add_text_box("subtitle", subtitle, font);
    }

    for block in layout.visible_blocks() {
        let name = format!("{} {}", block.kind, block.index);
        for primitive in &block.primitives {
            match primitive {
                Primitive::Fill(fill) => page.add_auto_shape(name.as_str(), fill),
                Primitive::Text(text) => page.add_text_box(name.as_str(), text, font),
                Primitive::Table(grid) => page.add_table(name.as_str(), grid, font),
                Primitive::Line(line) => page.add_connector(name.as_str(), line),
            }
        }
    }

    page.add_text_box("page-number", &layout.page_number, font);
}

fn chrome_name(centered: bool, i: usize) -> &'static str {
    match (centered, i) {
        (true, _) => "footer-band",
        (false, 0) => "header-bar",
        (false, _) => "footer-bar",
    }
}
