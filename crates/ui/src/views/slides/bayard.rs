use blackbox_core::model::Slide;
use dioxus::prelude::*;

const PORTRAIT_URL: &str = "https://upload.wikimedia.org/wikipedia/commons/5/58/Hippolyte_Bayard_-_Autoportrait_en_noy%C3%A9_-_1840.jpg";

#[component]
pub fn BayardSlide() -> Element {
    let slide = Slide::Bayard;
    let mut debug = use_signal(|| false);
    let filter = if debug() {
        "sepia(0.3) contrast(1.1)"
    } else {
        "sepia(0.5) contrast(0.9)"
    };

    rsx! {
        section { class: "slide-body slide-bayard",
            header { class: "slide-header",
                h2 { "Historical Glitch" }
                p { class: "slide-caption", "{slide.caption()}" }
            }
            figure { class: if debug() { "bayard-frame glitch-active" } else { "bayard-frame" },
                img {
                    src: PORTRAIT_URL,
                    alt: "Hippolyte Bayard - Self Portrait as a Drowned Man, 1840",
                    style: "filter: {filter};",
                }
                if debug() {
                    div { class: "bayard-debug",
                        p { class: "bayard-debug__header", "DEBUG_MODE // HISTORICAL_ANALYSIS" }
                        h3 { "Hippolyte Bayard" }
                        p { "French inventor · Pioneer of photography · 1801-1887" }
                        p {
                            "In 1840, Bayard staged this photograph of himself as a corpse to protest the French government recognizing Daguerre as the sole inventor of photography."
                        }
                        blockquote {
                            "\"The corpse which you see here is that of M. Bayard. The Government, which has been only too generous to M. Daguerre, has said it can do nothing for M. Bayard, and the poor wretch has drowned himself.\""
                        }
                        p { class: "bayard-debug__note",
                            "Bayard was very much alive and continued working for another 40+ years."
                        }
                    }
                } else {
                    figcaption {
                        h3 { "Self-Portrait as a Drowned Man" }
                        p { "Hippolyte Bayard · Direct positive print · 1840" }
                    }
                }
            }
            button {
                class: if debug() { "btn btn-debug btn-debug--active" } else { "btn btn-debug" },
                r#type: "button",
                onclick: move |_| debug.set(!debug()),
                if debug() { "EXIT DEBUG MODE" } else { "DEBUG" }
            }
        }
    }
}
