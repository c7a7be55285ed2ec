use blackbox_core::model::{Challenge, Slide};
use dioxus::prelude::*;

use crate::views::deck::DeckIntent;
use crate::vm::{CameraTabVm, LabVm, PinholeVm, SlrVm, ViewCameraVm};

#[component]
pub fn HardwareLabSlide(vm: LabVm, on_intent: Callback<DeckIntent>) -> Element {
    let slide = Slide::HardwareLab;
    rsx! {
        section { class: "slide-body slide-lab",
            header { class: "slide-header",
                h2 { "{slide.title()}" }
                p { class: "slide-caption", "{slide.caption()}" }
            }
            div { class: "lab-tabs", role: "tablist",
                for (position, tab) in vm.tabs.clone().into_iter().enumerate() {
                    CameraTab { key: "{position}", tab, on_intent }
                }
            }
            div { class: "lab-stage",
                match vm.selected {
                    Challenge::Pinhole => rsx! { PinholePanel { vm: vm.pinhole.clone(), on_intent } },
                    Challenge::ViewCamera => rsx! { ViewCameraPanel { vm: vm.view_camera.clone(), on_intent } },
                    Challenge::Slr => rsx! { SlrPanel { vm: vm.slr.clone(), on_intent } },
                }
            }
            p { class: if vm.all_mastered { "lab-progress lab-progress--done" } else { "lab-progress" },
                if vm.all_mastered {
                    "All cameras mastered. The rest of the deck is open."
                } else {
                    "{vm.mastered_label}"
                }
            }
        }
    }
}

#[component]
fn CameraTab(tab: CameraTabVm, on_intent: Callback<DeckIntent>) -> Element {
    let challenge = tab.challenge;
    rsx! {
        button {
            class: if tab.selected { "lab-tab lab-tab--selected" } else { "lab-tab" },
            r#type: "button",
            role: "tab",
            aria_selected: "{tab.selected}",
            onclick: move |_| on_intent.call(DeckIntent::SelectCamera(challenge)),
            span { class: "lab-tab__label", "{tab.label}" }
            span { class: "lab-tab__era", "{tab.era}" }
            if tab.mastered {
                span { class: "lab-tab__check", aria_label: "mastered", "✓" }
            }
        }
    }
}

#[component]
fn PinholePanel(vm: PinholeVm, on_intent: Callback<DeckIntent>) -> Element {
    rsx! {
        div { class: "lab-panel lab-panel--pinhole",
            div { class: "pinhole-preview", style: "filter: {vm.preview_filter};" }
            label { class: "lab-control",
                span { "Aperture" }
                input {
                    r#type: "range",
                    min: "0",
                    max: "1",
                    step: "0.01",
                    value: "{vm.aperture}",
                    oninput: move |evt| {
                        if let Ok(value) = evt.value().parse::<f64>() {
                            on_intent.call(DeckIntent::SetAperture(value));
                        }
                    },
                }
                span { class: "lab-control__value", "{vm.aperture_label}" }
            }
            p { class: if vm.optimal { "lab-status lab-status--ok" } else { "lab-status" }, "{vm.status}" }
        }
    }
}

#[component]
fn ViewCameraPanel(vm: ViewCameraVm, on_intent: Callback<DeckIntent>) -> Element {
    let tilt = vm.tilt;
    let shift = vm.shift;
    rsx! {
        div { class: "lab-panel lab-panel--view-camera",
            div { class: if vm.corrected { "view-preview view-preview--corrected" } else { "view-preview" } }
            div { class: "lab-control",
                span { "Tilt" }
                button {
                    class: "lab-toggle",
                    r#type: "button",
                    role: "switch",
                    aria_checked: "{tilt}",
                    onclick: move |_| on_intent.call(DeckIntent::SetTilt(!tilt)),
                }
            }
            div { class: "lab-control",
                span { "Shift" }
                button {
                    class: "lab-toggle",
                    r#type: "button",
                    role: "switch",
                    aria_checked: "{shift}",
                    onclick: move |_| on_intent.call(DeckIntent::SetShift(!shift)),
                }
            }
            dl { class: "lab-readout",
                dt { "Perspective" }
                dd { "{vm.perspective_label}" }
                dt { "Focus plane" }
                dd { "{vm.focus_label}" }
            }
        }
    }
}

#[component]
fn SlrPanel(vm: SlrVm, on_intent: Callback<DeckIntent>) -> Element {
    rsx! {
        div { class: "lab-panel lab-panel--slr",
            div { class: if vm.subject_blurred { "slr-subject slr-subject--blurred" } else { "slr-subject" } }
            label { class: "lab-control",
                span { "Shutter" }
                input {
                    r#type: "range",
                    min: "0",
                    max: "{vm.max_index}",
                    step: "1",
                    value: "{vm.speed_index}",
                    oninput: move |evt| {
                        if let Ok(index) = evt.value().parse::<usize>() {
                            on_intent.call(DeckIntent::SetShutter(index));
                        }
                    },
                }
            }
            ol { class: "slr-speeds",
                for (index, label) in vm.speed_labels.iter().enumerate() {
                    li {
                        key: "{index}",
                        class: if index == vm.speed_index { "slr-speed slr-speed--active" } else { "slr-speed" },
                        "{label}"
                    }
                }
            }
            button {
                class: "btn btn-shoot",
                r#type: "button",
                disabled: vm.shooting,
                onclick: move |_| on_intent.call(DeckIntent::Shoot),
                "{vm.shoot_label}"
            }
            if let Some(result) = vm.result_label {
                p { class: if vm.subject_blurred { "slr-result slr-result--blur" } else { "slr-result slr-result--ok" },
                    "{result}"
                }
            }
            if let Some(hint) = vm.result_hint {
                p { class: "slr-hint", "{hint}" }
            }
        }
    }
}
