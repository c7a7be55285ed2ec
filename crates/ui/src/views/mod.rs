mod deck;
mod slides;

pub use deck::{
    DeckIntent, NavCommand, PresentationView, SlideLinkView, apply_intent, nav_command_for_key,
};

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;
