use blackbox_core::model::Slide;
use dioxus::prelude::*;

#[component]
pub fn TitleSlide() -> Element {
    let slide = Slide::Title;
    rsx! {
        section { class: "slide-body slide-title",
            h1 { class: "slide-title__heading",
                "The First"
                br {}
                span { class: "accent", "Black Box" }
            }
            p { class: "slide-title__subtitle", "{slide.caption()}" }
            div { class: "slide-title__tag", "v1.0 · Interactive Presentation" }
            p { class: "slide-title__hint", "Begin ↓" }
        }
    }
}
