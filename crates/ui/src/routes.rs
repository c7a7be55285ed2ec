use dioxus::prelude::*;
use dioxus_router::Routable;

use crate::views::{PresentationView, SlideLinkView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/", PresentationView)] Presentation {},
    #[route("/slide/:number", SlideLinkView)] SlideLink { number: usize },
}
