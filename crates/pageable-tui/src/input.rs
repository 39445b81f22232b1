use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pageable_core::Key;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Navigation key handed to the pager's keyboard controller
    Pager(Key),
    Next,
    Prev,
    /// Jump to a 1-based page
    Page(usize),
    First,
    Last,
    ToggleInfinite,
    ToggleOrientation,
    ToggleSlideshow,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Up, _) => Action::Pager(Key::ArrowUp),
        (KeyCode::Down, _) => Action::Pager(Key::ArrowDown),
        (KeyCode::Left, _) => Action::Pager(Key::ArrowLeft),
        (KeyCode::Right, _) => Action::Pager(Key::ArrowRight),
        (KeyCode::PageUp, _) => Action::Pager(Key::PageUp),
        (KeyCode::PageDown, _) => Action::Pager(Key::PageDown),

        // vi-style
        (KeyCode::Char('j'), KeyModifiers::NONE) | (KeyCode::Char(' '), KeyModifiers::NONE) => {
            Action::Next
        }
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::Prev,
        (KeyCode::Char('g'), KeyModifiers::NONE) | (KeyCode::Home, _) => Action::First,
        (KeyCode::Char('G'), _) | (KeyCode::End, _) => Action::Last,

        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::Page(c.to_digit(10).map_or(1, |d| d as usize))
        }

        (KeyCode::Char('i'), KeyModifiers::NONE) => Action::ToggleInfinite,
        (KeyCode::Char('o'), KeyModifiers::NONE) => Action::ToggleOrientation,
        (KeyCode::Char('s'), KeyModifiers::NONE) => Action::ToggleSlideshow,

        _ => Action::None,
    }
}
