use std::time::Duration;

use blackbox_core::model::Slide;
use dioxus::document::eval;
use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::slides::{
    BayardSlide, GrainNoiseSlide, HardwareLabSlide, PortfolioSlide, TitleSlide,
};
use crate::vm::{DotState, SlideDotVm, map_lab, map_slide_shell};

use super::intent::{DeckIntent, apply_intent};
use super::keyboard::nav_command_for_key;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

/// How often lab timers are polled while the deck is open.
const TICK_INTERVAL: Duration = Duration::from_millis(100);

const DECK_ROOT_ID: &str = "deck-root";

/// Keyboard navigation listens on the deck root, so it must hold focus.
pub(crate) fn focus_deck_script() -> String {
    format!("document.getElementById({DECK_ROOT_ID:?})?.focus();")
}

#[component]
pub fn PresentationView() -> Element {
    rsx! { SlideDeck { start: None } }
}

/// Deep link entry: `number` is 1-based and still subject to gating.
#[component]
pub fn SlideLinkView(number: usize) -> Element {
    rsx! { SlideDeck { start: Some(number) } }
}

#[component]
fn SlideDeck(start: Option<usize>) -> Element {
    let ctx = use_context::<AppContext>();
    let presentation = ctx.presentation();

    let snapshot = use_signal(|| presentation.try_snapshot());
    let mut focus_deck = use_signal(|| true);

    {
        let presentation = presentation.clone();
        use_hook(move || {
            let mut snapshot = snapshot;
            spawn(async move {
                let next = match start {
                    Some(number) => {
                        let target = isize::try_from(number).unwrap_or(isize::MAX) - 1;
                        let nav = presentation.go_to(target).await;
                        if !nav.outcome.is_moved() {
                            tracing::debug!(number, "deep link ignored");
                        }
                        nav.snapshot
                    }
                    None => presentation.snapshot().await,
                };
                snapshot.set(Some(next));
            });
        });
    }

    {
        let presentation = presentation.clone();
        use_future(move || {
            let presentation = presentation.clone();
            let mut snapshot = snapshot;
            async move {
                loop {
                    tokio::time::sleep(TICK_INTERVAL).await;
                    if let Some(next) = presentation.tick().await {
                        snapshot.set(Some(next));
                    }
                }
            }
        });
    }

    let dispatch = {
        let presentation = presentation.clone();
        use_callback(move |intent: DeckIntent| {
            let presentation = presentation.clone();
            let mut snapshot = snapshot;
            let mut focus_deck = focus_deck;
            spawn(async move {
                let next = apply_intent(&presentation, intent).await;
                snapshot.set(Some(next));
                if intent.is_navigation() {
                    focus_deck.set(true);
                }
            });
        })
    };

    use_effect(move || {
        // Re-run once the deck has rendered for the new snapshot.
        let rendered = snapshot.read().is_some();
        if !rendered || !focus_deck() {
            return;
        }
        focus_deck.set(false);
        let _ = eval(&focus_deck_script());
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<DeckTestHandles>() {
                handles.register(dispatch);
            }
        }
    }

    let on_key = use_callback(move |evt: KeyboardEvent| {
        if let Some(command) = nav_command_for_key(&evt.data.key()) {
            evt.prevent_default();
            dispatch.call(command.into());
        }
    });

    let Some(current) = snapshot.read().clone() else {
        return rsx! {
            div { class: "deck deck--loading",
                p { "Loading..." }
            }
        };
    };
    let shell = map_slide_shell(&current);
    let slide = shell.slide;

    rsx! {
        div {
            class: "deck",
            id: DECK_ROOT_ID,
            tabindex: "0",
            autofocus: true,
            onkeydown: on_key,
            div { class: "{shell.transition_class}",
                match slide {
                    Slide::Title => rsx! { TitleSlide {} },
                    Slide::HardwareLab => rsx! {
                        HardwareLabSlide { vm: map_lab(&current), on_intent: dispatch }
                    },
                    Slide::GrainNoise => rsx! { GrainNoiseSlide {} },
                    Slide::Bayard => rsx! { BayardSlide {} },
                    Slide::Portfolio => rsx! { PortfolioSlide {} },
                }
            }

            if shell.show_prev {
                button {
                    class: "deck-arrow deck-arrow--prev",
                    r#type: "button",
                    aria_label: "Previous slide",
                    onclick: move |_| dispatch.call(DeckIntent::Prev),
                    "‹"
                }
            }
            if shell.show_next {
                button {
                    class: "deck-arrow deck-arrow--next",
                    r#type: "button",
                    aria_label: "Next slide",
                    onclick: move |_| dispatch.call(DeckIntent::Next),
                    "›"
                }
            }

            nav { class: "deck-dots", aria_label: "Slides",
                for (position, dot) in shell.dots.clone().into_iter().enumerate() {
                    SlideDot { key: "{position}", dot, on_intent: dispatch }
                }
            }

            footer { class: "deck-footer",
                span { class: "deck-title", "{slide.title()}" }
                span { class: "deck-counter", "{shell.counter_current} / {shell.counter_total}" }
                button {
                    class: "deck-reset",
                    r#type: "button",
                    onclick: move |_| dispatch.call(DeckIntent::Reset),
                    "Reset progress"
                }
            }
        }
    }
}

#[component]
fn SlideDot(dot: SlideDotVm, on_intent: Callback<DeckIntent>) -> Element {
    let index = dot.index;
    rsx! {
        button {
            class: dot.state.class(),
            r#type: "button",
            aria_label: "{dot.aria_label}",
            disabled: dot.state == DotState::Locked,
            onclick: move |_| on_intent.call(DeckIntent::GoTo(index)),
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct DeckTestHandles {
    dispatch: Rc<RefCell<Option<Callback<DeckIntent>>>>,
}

#[cfg(test)]
impl DeckTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<DeckIntent>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
    }

    pub(crate) fn dispatch(&self) -> Callback<DeckIntent> {
        (*self.dispatch.borrow()).expect("deck dispatch registered")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_script_targets_deck_root() {
        assert_eq!(
            focus_deck_script(),
            r#"document.getElementById("deck-root")?.focus();"#
        );
    }
}
