use blackbox_core::model::Slide;
use dioxus::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Photo {
    src: &'static str,
    alt: &'static str,
    punctum_x: u8,
    punctum_y: u8,
    punctum: &'static str,
}

const GALLERY: [Photo; 6] = [
    Photo {
        src: "https://images.unsplash.com/photo-1516589178581-6cd7833ae3b2?w=800",
        alt: "Portrait with dramatic shadows",
        punctum_x: 45,
        punctum_y: 35,
        punctum: "The slight tension in the hands reveals inner turmoil beneath composed exterior",
    },
    Photo {
        src: "https://images.unsplash.com/photo-1534235826754-0a3572d1d6d5?w=800",
        alt: "Street scene",
        punctum_x: 70,
        punctum_y: 60,
        punctum: "A forgotten newspaper, evidence of a moment already passed",
    },
    Photo {
        src: "https://images.unsplash.com/photo-1509909756405-be0199881695?w=800",
        alt: "Architectural detail",
        punctum_x: 30,
        punctum_y: 50,
        punctum: "The worn edge of the stair, thousands of footsteps crystallized in stone",
    },
    Photo {
        src: "https://images.unsplash.com/photo-1533228876829-65c94e7b5025?w=800",
        alt: "Abstract light and shadow",
        punctum_x: 55,
        punctum_y: 40,
        punctum: "Where light meets dark, the boundary of knowing and mystery",
    },
    Photo {
        src: "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=800",
        alt: "Misty landscape",
        punctum_x: 50,
        punctum_y: 70,
        punctum: "The solitary tree, resisting the vastness of an indifferent sky",
    },
    Photo {
        src: "https://images.unsplash.com/photo-1493225457124-a3eb161ffa5f?w=800",
        alt: "Musical instrument detail",
        punctum_x: 40,
        punctum_y: 55,
        punctum: "Worn keys speak of countless melodies, each leaving invisible traces",
    },
];

#[component]
pub fn PortfolioSlide() -> Element {
    let slide = Slide::Portfolio;
    let punctum = use_signal(|| None::<usize>);

    rsx! {
        section { class: "slide-body slide-portfolio",
            header { class: "slide-header",
                h2 { "Artist Portfolio" }
                p { class: "slide-caption", "{slide.caption()}" }
                p { class: "portfolio-hint", "Click a photograph to reveal its punctum." }
            }
            div { class: "portfolio-gallery",
                for (index, photo) in GALLERY.into_iter().enumerate() {
                    PortfolioFrame { key: "{index}", index, photo, punctum }
                }
            }
        }
    }
}

#[component]
fn PortfolioFrame(index: usize, photo: Photo, punctum: Signal<Option<usize>>) -> Element {
    let active = punctum() == Some(index);
    rsx! {
        figure { class: if active { "portfolio-frame portfolio-frame--punctum" } else { "portfolio-frame" },
            onclick: move |_| {
                let mut punctum = punctum;
                if active {
                    punctum.set(None);
                } else {
                    punctum.set(Some(index));
                }
            },
            img { src: photo.src, alt: photo.alt, loading: "lazy" }
            if active {
                span {
                    class: "punctum-marker",
                    style: "left: {photo.punctum_x}%; top: {photo.punctum_y}%;",
                }
                figcaption { class: "punctum-text", "{photo.punctum}" }
            }
        }
    }
}
