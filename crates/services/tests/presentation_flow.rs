use blackbox_core::model::{Challenge, Progress};
use blackbox_core::navigator::{NavOutcome, Rejection};
use services::{AppServices, Clock};
use storage::repository::{DEFAULT_PROGRESS_KEY, Storage};

#[tokio::test]
async fn gated_walkthrough_matches_scenario() {
    let storage = Storage::in_memory();
    let app = AppServices::from_storage(&storage, DEFAULT_PROGRESS_KEY, Clock::system()).await;
    let svc = app.presentation();

    let nav = svc.go_to(2).await;
    assert_eq!(nav.outcome, NavOutcome::Rejected(Rejection::Locked));
    assert_eq!(nav.snapshot.current, 0);

    svc.set_challenge_completed(Challenge::Pinhole, true).await;
    svc.set_challenge_completed(Challenge::ViewCamera, true).await;
    svc.set_challenge_completed(Challenge::Slr, true).await;

    let nav = svc.go_to(2).await;
    assert!(nav.outcome.is_moved());
    assert_eq!(nav.snapshot.current, 2);

    // Idempotent repeats keep the deck unlocked.
    let snap = svc.set_challenge_completed(Challenge::Slr, true).await;
    assert!(snap.unlocked[2]);
}

#[tokio::test]
async fn position_and_mastery_survive_restart() {
    let storage = Storage::in_memory();
    {
        let app = AppServices::from_storage(&storage, DEFAULT_PROGRESS_KEY, Clock::system()).await;
        let svc = app.presentation();
        for challenge in Challenge::ALL {
            svc.set_challenge_completed(challenge, true).await;
        }
        svc.go_to(4).await;
        svc.go_prev().await;
    }

    let app = AppServices::from_storage(&storage, DEFAULT_PROGRESS_KEY, Clock::system()).await;
    let snap = app.presentation().snapshot().await;
    assert_eq!(snap.current, 3);
    assert_eq!(snap.direction, None);
    assert!(snap.progress.all_cameras_mastered());
}

#[tokio::test]
async fn reset_is_persisted_for_the_next_session() {
    let storage = Storage::in_memory();
    let app = AppServices::from_storage(&storage, DEFAULT_PROGRESS_KEY, Clock::system()).await;
    let svc = app.presentation();
    svc.set_challenge_completed(Challenge::Pinhole, true).await;
    svc.go_next().await;
    svc.reset().await;

    let reopened =
        AppServices::from_storage(&storage, DEFAULT_PROGRESS_KEY, Clock::system()).await;
    let snap = reopened.presentation().snapshot().await;
    assert_eq!(snap.progress, Progress::new());
    assert_eq!(snap.current, 0);
    assert!(!snap.unlocked[2]);
}

#[tokio::test]
async fn separate_keys_track_separate_audiences() {
    let storage = Storage::in_memory();
    let first = AppServices::from_storage(&storage, "audience-a", Clock::system()).await;
    first.presentation().go_next().await;

    let second = AppServices::from_storage(&storage, "audience-b", Clock::system()).await;
    assert_eq!(second.progress_key(), "audience-b");
    assert_eq!(second.presentation().snapshot().await.current, 0);
}
