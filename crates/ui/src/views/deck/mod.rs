mod intent;
mod keyboard;
mod view;

pub use intent::{DeckIntent, apply_intent};
pub use keyboard::{NavCommand, nav_command_for_key};
pub use view::{PresentationView, SlideLinkView};

#[cfg(test)]
pub(crate) use view::DeckTestHandles;
