//! Interactive terminal viewer.
//!
//! The viewer is split the same way as any Elm-style TUI:
//!
//! - [`Session`] holds navigation state and is the only thing that mutates
//! - [`ViewFrame`] is a pure projection of the session over the deck
//! - [`paint`] draws a frame with ratatui, reading the shared slide layouts
//! - [`terminal`] owns the terminal and runs the event loop
//!
//! Layouts are computed once when the viewer is created, from the same
//! [`LayoutEngine`] the deck writer uses.

mod frame;
mod keys;
pub mod paint;
mod session;
pub mod terminal;

pub use frame::{Thumbnail, ViewFrame};
pub use keys::{Action, map_key};
pub use session::{Session, Ticket};

use crate::layout::{LayoutEngine, SlideLayout};
use crate::model::Deck;
use crate::theme::Theme;
use std::time::Instant;

/// A deck mounted for viewing.
#[derive(Debug)]
pub struct Viewer<'a> {
    deck: &'a Deck,
    theme: &'a Theme,
    layouts: Vec<SlideLayout>,
    session: Session,
}

impl<'a> Viewer<'a> {
    /// Lay out `deck` and start a session on its first slide.
    pub fn mount(deck: &'a Deck, theme: &'a Theme) -> Self {
        Self {
            deck,
            theme,
            layouts: LayoutEngine::new(theme).layout_deck(deck),
            session: Session::mount(deck.len(), theme.transition()),
        }
    }

    pub fn deck(&self) -> &'a Deck {
        self.deck
    }

    pub fn theme(&self) -> &'a Theme {
        self.theme
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    pub fn layouts(&self) -> &[SlideLayout] {
        &self.layouts
    }

    /// Apply `action`. Returns `false` when the viewer should close.
    pub fn handle(&mut self, action: Action, now: Instant) -> bool {
        if action == Action::Quit {
            return false;
        }
        self.session.apply(action, now);
        true
    }

    /// Advance pending transitions; returns `true` if the slide changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.session.tick(now)
    }

    /// Current view, or `None` if the deck is empty.
    pub fn frame(&self) -> Option<ViewFrame<'_>> {
        ViewFrame::compose(&self.session, self.deck, &self.layouts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ContentBlock, LayoutKind, Slide, StatItem};
    use ratatui::buffer::Buffer;
    use ratatui::layout::Rect;

    fn stat(value: &str, label: &str) -> StatItem {
        StatItem {
            value: value.to_string(),
            label: label.to_string(),
            icon: None,
        }
    }

    #[test]
    fn test_two_slide_scenario() {
        let deck = Deck::new(vec![
            Slide::new(1, "Impact", LayoutKind::Title)
                .with_background(crate::model::Background::Dark)
                .with_block(ContentBlock::StatsRow {
                    stats: vec![
                        stat("80%", "Faster ATO"),
                        stat("$4.2M", "Annual Savings"),
                        stat("47", "Programs Unified"),
                    ],
                }),
            Slide::new(2, "Shift", LayoutKind::Table)
                .with_background(crate::model::Background::Light)
                .with_block(ContentBlock::Table {
                    headers: vec!["Today".to_string(), "Tomorrow".to_string()],
                    rows: vec![
                        vec!["Manual".to_string(), "Automated".to_string()],
                        vec!["Annual".to_string(), "Continuous".to_string()],
                    ],
                }),
        ])
        .unwrap();
        let theme = Theme::default();
        let mut viewer = Viewer::mount(&deck, &theme);
        let now = Instant::now();

        let frame = viewer.frame().unwrap();
        assert_eq!(frame.index, 0);
        assert_eq!(frame.thumbnails.len(), 2);
        let stats = &frame.layout.blocks[0];
        let widths: Vec<f64> = stats
            .primitives
            .iter()
            .filter_map(|p| match p {
                crate::layout::Primitive::Fill(f) => Some(f.rect.w),
                _ => None,
            })
            .collect();
        assert_eq!(widths.len(), 3);
        assert!(widths.iter().all(|w| (w - widths[0]).abs() < 1e-9));

        let area = Rect::new(0, 0, 100, 28);
        let mut buf = Buffer::empty(area);
        let painted = paint::SlideCanvas::new(frame.layout, &theme).paint(area, &mut buf);
        assert_eq!(painted.len(), 1);
        assert!(painted[0].1.contains(&"$4.2M".to_string()));

        assert!(viewer.handle(Action::Next, now));
        viewer.tick(now + theme.transition());
        let frame = viewer.frame().unwrap();
        assert_eq!(frame.index, 1);
        match &frame.layout.blocks[0].primitives[0] {
            crate::layout::Primitive::Table(grid) => {
                assert_eq!(grid.columns(), 2);
                assert_eq!(grid.row_count(), 3);
            },
            other => panic!("expected a table, got {:?}", other),
        }

        assert!(viewer.handle(Action::Next, now));
        assert!(!viewer.session().is_transitioning());
        assert_eq!(viewer.session().current_index(), 1);

        assert!(!viewer.handle(Action::Quit, now));
    }
}
