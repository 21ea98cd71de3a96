//! Viewer session state and navigation.

use super::keys::Action;
use std::time::{Duration, Instant};
use tracing::debug;

/// Identifies one scheduled transition.
///
/// Only the most recently issued ticket can complete; older ones are stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy)]
struct PendingTransition {
    target: usize,
    ticket: Ticket,
    due: Instant,
}

/// Navigation state of one viewer.
///
/// Moving to another slide is two-phase: [`go_to`](Self::go_to) marks the
/// session as transitioning and the index only changes once the transition
/// delay has elapsed (see [`tick`](Self::tick)). A newer `go_to` replaces the
/// pending one, so the last request always wins.
#[derive(Debug, Clone)]
pub struct Session {
    len: usize,
    current: usize,
    fullscreen: bool,
    show_notes: bool,
    delay: Duration,
    pending: Option<PendingTransition>,
    issued: u64,
}

impl Session {
    /// Start at the first of `len` slides.
    pub fn mount(len: usize, delay: Duration) -> Self {
        Self {
            len,
            current: 0,
            fullscreen: false,
            show_notes: false,
            delay,
            pending: None,
            issued: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 0-based index of the slide on screen
    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn show_notes(&self) -> bool {
        self.show_notes
    }

    pub fn is_transitioning(&self) -> bool {
        self.pending.is_some()
    }

    /// Slide the pending transition will land on.
    pub fn pending_target(&self) -> Option<usize> {
        self.pending.map(|p| p.target)
    }

    /// When the pending transition is due.
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.map(|p| p.due)
    }

    pub fn can_prev(&self) -> bool {
        self.current > 0
    }

    pub fn can_next(&self) -> bool {
        self.current + 1 < self.len
    }

    /// Schedule a move to `index`.
    ///
    /// Out-of-range indices and the current index are ignored. Returns the
    /// ticket of the scheduled transition.
    pub fn go_to(&mut self, index: usize, now: Instant) -> Option<Ticket> {
        if index >= self.len || index == self.current {
            return None;
        }
        self.issued += 1;
        let ticket = Ticket(self.issued);
        if let Some(previous) = self.pending {
            debug!(from = previous.target, to = index, "pending transition replaced");
        }
        self.pending = Some(PendingTransition {
            target: index,
            ticket,
            due: now + self.delay,
        });
        Some(ticket)
    }

    pub fn next(&mut self, now: Instant) -> Option<Ticket> {
        self.go_to(self.current + 1, now)
    }

    pub fn prev(&mut self, now: Instant) -> Option<Ticket> {
        let index = self.current.checked_sub(1)?;
        self.go_to(index, now)
    }

    /// Finish the transition identified by `ticket`.
    ///
    /// Returns `false` for a stale ticket, leaving the state untouched.
    pub fn complete(&mut self, ticket: Ticket) -> bool {
        match self.pending {
            Some(pending) if pending.ticket == ticket => {
                self.current = pending.target;
                self.pending = None;
                debug!(index = self.current, "slide shown");
                true
            },
            _ => false,
        }
    }

    /// Complete the pending transition if its delay has elapsed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.pending {
            Some(pending) if now >= pending.due => self.complete(pending.ticket),
            _ => false,
        }
    }

    pub fn toggle_fullscreen(&mut self) {
        self.fullscreen = !self.fullscreen;
    }

    /// Leave fullscreen; never enters it.
    pub fn exit_fullscreen(&mut self) {
        self.fullscreen = false;
    }

    pub fn toggle_notes(&mut self) {
        self.show_notes = !self.show_notes;
    }

    /// Apply a user action at time `now`.
    pub fn apply(&mut self, action: Action, now: Instant) {
        match action {
            Action::Next => {
                self.next(now);
            },
            Action::Prev => {
                self.prev(now);
            },
            Action::First => {
                self.go_to(0, now);
            },
            Action::Last => {
                self.go_to(self.len.saturating_sub(1), now);
            },
            Action::GoTo(index) => {
                self.go_to(index, now);
            },
            Action::ToggleFullscreen => self.toggle_fullscreen(),
            Action::ExitFullscreen => self.exit_fullscreen(),
            Action::ToggleNotes => self.toggle_notes(),
            Action::Quit => {},
        }
    }
}
