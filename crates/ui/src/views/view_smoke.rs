use blackbox_core::model::Challenge;
use chrono::Duration;
use storage::repository::{DEFAULT_PROGRESS_KEY, Storage};

use super::deck::DeckIntent;
use super::test_harness::{DeckEntry, setup_deck_harness, setup_deck_harness_with_storage};

#[tokio::test(flavor = "current_thread")]
async fn fresh_deck_renders_title_slide() {
    let harness = setup_deck_harness(DeckEntry::Root).await;
    let html = harness.render();
    assert!(html.contains("01 / 05"), "missing counter in {html}");
    assert!(html.contains("Black Box"), "missing title in {html}");
    assert!(html.contains("Go to slide 5"), "missing dots in {html}");
    assert!(html.contains("dot current"), "missing current dot in {html}");
    assert!(html.contains("dot locked"), "missing locked dot in {html}");
    assert!(html.contains("Next slide"), "missing next arrow in {html}");
    assert!(!html.contains("Previous slide"), "unexpected prev arrow in {html}");
    assert!(html.contains("id=\"deck-root\""), "missing deck root in {html}");
    assert!(html.contains("autofocus"), "deck root should take focus: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn next_lands_on_lab_and_stops_at_gate() {
    let mut harness = setup_deck_harness(DeckEntry::Root).await;
    harness.dispatch(DeckIntent::Next).await;
    let html = harness.render();
    assert!(html.contains("02 / 05"), "missing counter in {html}");
    assert!(html.contains("Hardware Evolution Lab"), "missing lab in {html}");
    assert!(html.contains("0 / 3 mastered"), "missing mastery in {html}");
    assert!(html.contains("Previous slide"), "missing prev arrow in {html}");
    assert!(!html.contains("Next slide"), "gate should hide next arrow in {html}");

    harness.dispatch(DeckIntent::Next).await;
    assert!(harness.render().contains("02 / 05"));
}

#[tokio::test(flavor = "current_thread")]
async fn locked_dot_does_not_move() {
    let mut harness = setup_deck_harness(DeckEntry::Root).await;
    harness.dispatch(DeckIntent::GoTo(3)).await;
    let html = harness.render();
    assert!(html.contains("01 / 05"), "moved past the gate: {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn deep_link_respects_gating() {
    let harness = setup_deck_harness(DeckEntry::Link(2)).await;
    assert!(harness.render().contains("02 / 05"));

    let harness = setup_deck_harness(DeckEntry::Link(4)).await;
    assert!(harness.render().contains("01 / 05"));

    let harness = setup_deck_harness(DeckEntry::Link(0)).await;
    assert!(harness.render().contains("01 / 05"));
}

#[tokio::test(flavor = "current_thread")]
async fn mastering_the_lab_opens_the_deck() {
    let mut harness = setup_deck_harness(DeckEntry::Root).await;
    harness.dispatch(DeckIntent::Next).await;
    harness.dispatch(DeckIntent::SetAperture(0.5)).await;
    let html = harness.render();
    assert!(html.contains("Sharp image"), "missing pinhole status in {html}");

    harness.dispatch(DeckIntent::SetTilt(true)).await;
    harness.dispatch(DeckIntent::SetShift(true)).await;
    harness.dispatch(DeckIntent::SetShutter(3)).await;
    harness.dispatch(DeckIntent::Shoot).await;

    harness.clock.advance(Duration::milliseconds(1100));
    harness.presentation.tick().await;

    harness.dispatch(DeckIntent::SelectCamera(Challenge::Slr)).await;
    let html = harness.render();
    assert!(html.contains("All cameras mastered"), "missing unlock in {html}");
    assert!(html.contains("FROZEN! Perfect timing."), "missing slr result in {html}");

    harness.dispatch(DeckIntent::Next).await;
    let html = harness.render();
    assert!(html.contains("03 / 05"), "missing counter in {html}");
    assert!(html.contains("Silver Halide"), "missing grain slide in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn reset_returns_to_title() {
    let mut harness = setup_deck_harness(DeckEntry::Root).await;
    harness.dispatch(DeckIntent::Next).await;
    harness.dispatch(DeckIntent::Reset).await;
    let html = harness.render();
    assert!(html.contains("01 / 05"), "missing counter in {html}");

    let record = harness
        .storage
        .progress(DEFAULT_PROGRESS_KEY)
        .load()
        .await
        .expect("load")
        .expect("record");
    assert_eq!(record.current_slide, 0);
}

#[tokio::test(flavor = "current_thread")]
async fn position_survives_reopen() {
    let storage = Storage::in_memory();
    let mut harness = setup_deck_harness_with_storage(DeckEntry::Root, storage.clone()).await;
    harness.dispatch(DeckIntent::Next).await;
    drop(harness);

    let harness = setup_deck_harness_with_storage(DeckEntry::Root, storage).await;
    assert!(harness.render().contains("02 / 05"));
}
