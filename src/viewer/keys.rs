//! Keyboard bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Something the user asked the viewer to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Next,
    Prev,
    First,
    Last,
    /// Activate the thumbnail at this 0-based index
    GoTo(usize),
    ToggleFullscreen,
    /// Leave fullscreen (idempotent)
    ExitFullscreen,
    ToggleNotes,
    Quit,
}

/// Translate a key press into an action.
///
/// | Key | Action |
/// |---|---|
/// | `→`, `Space` | next slide |
/// | `←` | previous slide |
/// | `Home` / `End` | first / last slide |
/// | `1`..`9` | jump to that slide |
/// | `f`, `F` | toggle fullscreen |
/// | `Esc` | leave fullscreen |
/// | `n`, `N` | toggle speaker notes |
/// | `q`, `Ctrl+C` | quit |
pub fn map_key(key: KeyEvent) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Right | KeyCode::Char(' ') => Some(Action::Next),
        KeyCode::Left => Some(Action::Prev),
        KeyCode::Home => Some(Action::First),
        KeyCode::End => Some(Action::Last),
        KeyCode::Char('f' | 'F') => Some(Action::ToggleFullscreen),
        KeyCode::Esc => Some(Action::ExitFullscreen),
        KeyCode::Char('n' | 'N') => Some(Action::ToggleNotes),
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|d| Action::GoTo(d as usize - 1)),
        _ => None,
    }
}
