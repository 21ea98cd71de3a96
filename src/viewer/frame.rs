//! What the viewer shows for a given session state, independent of the
//! terminal.

use super::session::Session;
use crate::layout::SlideLayout;
use crate::model::Deck;

/// One entry of the thumbnail strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Thumbnail<'a> {
    /// 1-based slide number
    pub number: usize,
    pub title: &'a str,
    /// Marks the slide on screen
    pub active: bool,
}

/// Everything a painter needs for one redraw.
#[derive(Debug, Clone)]
pub struct ViewFrame<'a> {
    pub layout: &'a SlideLayout,
    pub title: &'a str,
    /// 0-based index of the slide on screen
    pub index: usize,
    pub total: usize,
    pub can_prev: bool,
    pub can_next: bool,
    pub fullscreen: bool,
    /// Fading out towards another slide
    pub transitioning: bool,
    pub show_notes: bool,
    /// Notes to display; only set when notes are shown and the slide has some
    pub notes: Option<&'a str>,
    pub thumbnails: Vec<Thumbnail<'a>>,
}

impl<'a> ViewFrame<'a> {
    /// Compose the frame for `session` over `deck` and its precomputed layouts.
    ///
    /// Returns `None` if the session points past the deck.
    pub fn compose(session: &Session, deck: &'a Deck, layouts: &'a [SlideLayout]) -> Option<Self> {
        let index = session.current_index();
        let slide = deck.get(index)?;
        let layout = layouts.get(index)?;

        let thumbnails = deck
            .slides()
            .iter()
            .enumerate()
            .map(|(i, s)| Thumbnail {
                number: i + 1,
                title: &s.title,
                active: i == index,
            })
            .collect();

        Some(Self {
            layout,
            title: &slide.title,
            index,
            total: deck.len(),
            can_prev: session.can_prev(),
            can_next: session.can_next(),
            fullscreen: session.is_fullscreen(),
            transitioning: session.is_transitioning(),
            show_notes: session.show_notes(),
            notes: if session.show_notes() {
                slide.notes()
            } else {
                None
            },
            thumbnails,
        })
    }

    /// `"current / total"` indicator, 1-based.
    pub fn position(&self) -> String {
        format!("{} / {}", self.index + 1, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LayoutEngine;
    use crate::model::{LayoutKind, Slide};
    use crate::theme::Theme;
    use std::time::{Duration, Instant};

    fn deck() -> Deck {
        Deck::new(vec![
            Slide::new(1, "One", LayoutKind::Title).with_notes("Speak slowly"),
            Slide::new(2, "Two", LayoutKind::Content),
            Slide::new(3, "Three", LayoutKind::Conclusion).with_notes("   "),
        ])
        .unwrap()
    }

    #[test]
    fn test_notes_hidden_by_default() {
        let deck = deck();
        let theme = Theme::default();
        let layouts = LayoutEngine::new(&theme).layout_deck(&deck);
        let mut session = Session::mount(deck.len(), Duration::ZERO);

        let frame = ViewFrame::compose(&session, &deck, &layouts).unwrap();
        assert!(!frame.show_notes);
        assert_eq!(frame.notes, None);

        session.toggle_notes();
        let frame = ViewFrame::compose(&session, &deck, &layouts).unwrap();
        assert_eq!(frame.notes, Some("Speak slowly"));

        let now = Instant::now();
        session.next(now);
        session.tick(now);
        let frame = ViewFrame::compose(&session, &deck, &layouts).unwrap();
        assert!(frame.show_notes);
        assert_eq!(frame.notes, None);

        session.go_to(2, now);
        session.tick(now);
        let frame = ViewFrame::compose(&session, &deck, &layouts).unwrap();
        assert_eq!(frame.notes, None);
    }

    #[test]
    fn test_thumbnail_highlight_follows_session() {
        let deck = deck();
        let theme = Theme::default();
        let layouts = LayoutEngine::new(&theme).layout_deck(&deck);
        let mut session = Session::mount(deck.len(), Duration::ZERO);
        let now = Instant::now();
        session.go_to(1, now);
        session.tick(now);

        let frame = ViewFrame::compose(&session, &deck, &layouts).unwrap();
        let active: Vec<usize> = frame
            .thumbnails
            .iter()
            .filter(|t| t.active)
            .map(|t| t.number)
            .collect();
        assert_eq!(active, vec![2]);
        assert_eq!(frame.thumbnails.len(), 3);
        assert_eq!(frame.position(), "2 / 3");
        assert!(frame.can_prev && frame.can_next);
    }
}
