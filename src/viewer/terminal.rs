//! Terminal lifecycle and the viewer event loop.
//!
//! The terminal is restored on normal exit, on error and on panic.

use super::paint::{self, screen_areas};
use super::{Viewer, map_key};
use crate::error::Result;
use crate::model::Deck;
use crate::theme::Theme;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, MouseButton, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Position;
use std::io::{self, Stdout};
use std::panic;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Poll interval while nothing is animating.
const IDLE_POLL: Duration = Duration::from_millis(250);

type Backend = CrosstermBackend<Stdout>;

/// Enter raw mode and the alternate screen.
fn setup_terminal() -> Result<Terminal<Backend>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Undo [`setup_terminal`]. Safe to call more than once.
pub fn restore_terminal() -> Result<()> {
    let _ = execute!(io::stdout(), DisableMouseCapture);
    execute!(io::stdout(), LeaveAlternateScreen)?;
    disable_raw_mode()?;
    Ok(())
}

/// Restore the terminal before the default panic message is printed.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));
}

/// Show `deck` until the user quits.
pub fn run(deck: &Deck, theme: &Theme) -> Result<()> {
    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let mut viewer = Viewer::mount(deck, theme);
    info!(slides = deck.len(), "viewer started");

    let result = event_loop(&mut terminal, &mut viewer);
    restore_terminal()?;
    result
}

fn event_loop(terminal: &mut Terminal<Backend>, viewer: &mut Viewer<'_>) -> Result<()> {
    let theme = viewer.theme();
    let mut dirty = true;

    loop {
        let now = Instant::now();
        if viewer.tick(now) {
            dirty = true;
        }

        if dirty {
            if let Some(view) = viewer.frame() {
                terminal.draw(|frame| paint::render(frame, &view, theme))?;
            }
            dirty = false;
        }

        // Wake up exactly when a pending transition is due.
        let timeout = viewer
            .session()
            .deadline()
            .map_or(IDLE_POLL, |due| due.saturating_duration_since(Instant::now()));
        if !event::poll(timeout)? {
            continue;
        }

        let action = match event::read()? {
            Event::Key(key) => map_key(key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let area = ratatui::layout::Rect::new(0, 0, size.width, size.height);
                viewer.frame().and_then(|view| {
                    screen_areas(area, &view, theme).hit_test(Position::new(mouse.column, mouse.row))
                })
            },
            Event::Resize(..) => {
                dirty = true;
                None
            },
            _ => None,
        };

        if let Some(action) = action {
            debug!(?action, "input");
            if !viewer.handle(action, Instant::now()) {
                break;
            }
            dirty = true;
        }
    }

    Ok(())
}
