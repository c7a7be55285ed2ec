use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavCommand {
    Next,
    Prev,
}

/// Arrow keys and space step through the deck.
#[must_use]
pub fn nav_command_for_key(key: &Key) -> Option<NavCommand> {
    match key {
        Key::ArrowDown | Key::ArrowRight => Some(NavCommand::Next),
        Key::Character(value) if value == " " => Some(NavCommand::Next),
        Key::ArrowUp | Key::ArrowLeft => Some(NavCommand::Prev),
        _ => None,
    }
}
