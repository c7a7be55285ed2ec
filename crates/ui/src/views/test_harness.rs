use std::sync::Arc;

use blackbox_core::Clock;
use blackbox_core::lab::LabTuning;
use blackbox_core::time::manual_clock;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::PresentationService;
use storage::repository::{DEFAULT_PROGRESS_KEY, Storage};

use crate::context::{UiApp, build_app_context};
use crate::views::deck::{DeckIntent, DeckTestHandles};
use crate::views::{PresentationView, SlideLinkView};

struct TestApp {
    presentation: Arc<PresentationService>,
}

impl UiApp for TestApp {
    fn presentation(&self) -> Arc<PresentationService> {
        Arc::clone(&self.presentation)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeckEntry {
    Root,
    Link(usize),
}

#[derive(Props, Clone)]
struct DeckHarnessProps {
    app: Arc<TestApp>,
    entry: DeckEntry,
    handles: DeckTestHandles,
}

impl PartialEq for DeckHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn DeckRouterHarness(props: DeckHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.entry);
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    match use_context::<DeckEntry>() {
        DeckEntry::Root => rsx! { PresentationView {} },
        DeckEntry::Link(number) => rsx! { SlideLinkView { number } },
    }
}

pub struct DeckHarness {
    pub dom: VirtualDom,
    pub storage: Storage,
    pub clock: Clock,
    pub presentation: Arc<PresentationService>,
    handles: DeckTestHandles,
}

impl DeckHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Lets spawned service calls finish and re-renders.
    pub async fn settle(&mut self) {
        for _ in 0..3 {
            self.drive_async().await;
        }
    }

    pub async fn dispatch(&mut self, intent: DeckIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        self.settle().await;
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub async fn setup_deck_harness(entry: DeckEntry) -> DeckHarness {
    setup_deck_harness_with_storage(entry, Storage::in_memory()).await
}

pub async fn setup_deck_harness_with_storage(entry: DeckEntry, storage: Storage) -> DeckHarness {
    let clock = manual_clock();
    let presentation = Arc::new(
        PresentationService::load(
            clock.clone(),
            storage.progress(DEFAULT_PROGRESS_KEY),
            LabTuning::default(),
        )
        .await,
    );
    let handles = DeckTestHandles::default();
    let app = Arc::new(TestApp {
        presentation: Arc::clone(&presentation),
    });

    let dom = VirtualDom::new_with_props(
        DeckRouterHarness,
        DeckHarnessProps {
            app,
            entry,
            handles: handles.clone(),
        },
    );

    let mut harness = DeckHarness {
        dom,
        storage,
        clock,
        presentation,
        handles,
    };
    harness.rebuild();
    harness.settle().await;
    harness
}
