use blackbox_core::model::Slide;
use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Hotspot {
    id: &'static str,
    x: u8,
    y: u8,
    title: &'static str,
    description: &'static str,
}

const GRAIN_HOTSPOTS: [Hotspot; 3] = [
    Hotspot {
        id: "halide",
        x: 30,
        y: 40,
        title: "Random Silver Halide Distribution",
        description: "Film grain is created by microscopic silver halide crystals that are randomly distributed in the emulsion. This natural randomness creates organic, pleasing texture.",
    },
    Hotspot {
        id: "iso",
        x: 70,
        y: 30,
        title: "Film ISO Sensitivity",
        description: "Higher ISO films have larger silver halide crystals, producing more visible grain but capturing light more efficiently in low-light conditions.",
    },
    Hotspot {
        id: "chemical",
        x: 50,
        y: 70,
        title: "Chemical Development Process",
        description: "The development process chemically transforms exposed silver halide into metallic silver, with each crystal developing independently.",
    },
];

const NOISE_HOTSPOTS: [Hotspot; 3] = [
    Hotspot {
        id: "snr",
        x: 30,
        y: 35,
        title: "Sensor Signal-to-Noise Ratio",
        description: "Digital noise appears when the signal from photons is weak relative to the electronic interference in the sensor circuitry.",
    },
    Hotspot {
        id: "amplification",
        x: 65,
        y: 45,
        title: "ISO Amplification",
        description: "Unlike film, digital ISO amplifies the sensor signal electronically, also amplifying noise in the process.",
    },
    Hotspot {
        id: "interpolation",
        x: 50,
        y: 75,
        title: "Pixel Interpolation",
        description: "Bayer pattern sensors require mathematical interpolation to reconstruct color, which can introduce color noise patterns.",
    },
];

fn find_hotspot(id: &str) -> Option<Hotspot> {
    GRAIN_HOTSPOTS
        .iter()
        .chain(NOISE_HOTSPOTS.iter())
        .find(|hotspot| hotspot.id == id)
        .copied()
}

#[component]
pub fn GrainNoiseSlide() -> Element {
    let slide = Slide::GrainNoise;
    let active = use_signal(|| None::<&'static str>);
    let details = active().and_then(find_hotspot);

    rsx! {
        section { class: "slide-body slide-grain",
            header { class: "slide-header",
                h2 { "Grain " span { class: "muted", "vs." } " Noise" }
                p { class: "slide-caption", "{slide.caption()}" }
            }
            div { class: "grain-compare",
                HotspotPanel { kind: "Analog", heading: "Film Grain", hotspots: GRAIN_HOTSPOTS.to_vec(), active }
                HotspotPanel { kind: "Digital", heading: "Sensor Noise", hotspots: NOISE_HOTSPOTS.to_vec(), active }
            }
            if let Some(hotspot) = details {
                aside { class: "hotspot-details",
                    h3 { "{hotspot.title}" }
                    p { "{hotspot.description}" }
                }
            }
        }
    }
}

#[component]
fn HotspotPanel(
    kind: &'static str,
    heading: &'static str,
    hotspots: Vec<Hotspot>,
    active: Signal<Option<&'static str>>,
) -> Element {
    rsx! {
        div { class: "grain-panel",
            span { class: "grain-panel__kind", "{kind}" }
            h3 { "{heading}" }
            div { class: "grain-panel__image",
                for hotspot in hotspots {
                    button {
                        key: "{hotspot.id}",
                        class: if active() == Some(hotspot.id) { "hotspot hotspot--active" } else { "hotspot" },
                        r#type: "button",
                        style: "left: {hotspot.x}%; top: {hotspot.y}%;",
                        aria_label: "{hotspot.title}",
                        onclick: move |_| {
                            let mut active = active;
                            if active() == Some(hotspot.id) {
                                active.set(None);
                            } else {
                                active.set(Some(hotspot.id));
                            }
                        },
                    }
                }
            }
        }
    }
}
