//! Text input handling
//!
//! Plush names and card messages are edited inline on the Adornments step.
//! Every keystroke produces the complete new text, which the app writes
//! straight back into the selection.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::catalog::AdornKind;

/// Longest accepted plush toy name
pub const MAX_PLUSH_NAME_LEN: usize = 40;

/// Longest accepted card message
pub const MAX_CARD_TEXT_LEN: usize = 200;

/// Result of feeding a key to a text field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputResult {
    /// The key edited the text; carries the full new value
    Updated(String),
    /// The key is an editing key but changed nothing (e.g. field full)
    Unchanged,
    /// Not an editing key; let the keybindings handle it
    NotHandled,
}

/// Character limit for the text attached to `kind`, if it takes text
pub fn max_len_for(kind: AdornKind) -> Option<usize> {
    match kind {
        AdornKind::SmallPlushToy => Some(MAX_PLUSH_NAME_LEN),
        AdornKind::Card => Some(MAX_CARD_TEXT_LEN),
        AdornKind::Ribbons | AdornKind::NaturalFoliage => None,
    }
}

/// Apply `key` to `current`.
///
/// Printable characters (including space) append, Backspace removes the last
/// character. Control/Alt chords are never treated as text.
pub fn edit_text(current: &str, key: &KeyEvent, max_len: usize) -> InputResult {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return InputResult::NotHandled;
    }

    match key.code {
        KeyCode::Char(c) if !c.is_control() => {
            if current.chars().count() >= max_len {
                return InputResult::Unchanged;
            }
            let mut value = current.to_string();
            value.push(c);
            InputResult::Updated(value)
        }
        KeyCode::Backspace => {
            let mut value = current.to_string();
            match value.pop() {
                Some(_) => InputResult::Updated(value),
                None => InputResult::Unchanged,
            }
        }
        _ => InputResult::NotHandled,
    }
}
