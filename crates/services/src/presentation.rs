use blackbox_core::Clock;
use blackbox_core::lab::{HardwareLab, LabTuning};
use blackbox_core::model::{Challenge, Progress, SLIDE_COUNT};
use blackbox_core::navigator::{Direction, NavOutcome, SlideNavigator, UnlockPolicy};
use storage::repository::ProgressRepository;
use tokio::sync::Mutex;

use crate::progress_store::ProgressStore;

/// Everything a view needs to render the deck at one instant.
#[derive(Clone, Debug, PartialEq)]
pub struct PresentationSnapshot {
    pub current: usize,
    pub total: usize,
    pub direction: Option<Direction>,
    pub can_advance: bool,
    pub can_retreat: bool,
    pub unlocked: Vec<bool>,
    pub progress: Progress,
    pub lab: HardwareLab,
}

/// Outcome of a navigation request plus the state after it.
#[derive(Clone, Debug, PartialEq)]
pub struct Navigation {
    pub outcome: NavOutcome,
    pub snapshot: PresentationSnapshot,
}

struct PresentationState {
    store: ProgressStore,
    navigator: SlideNavigator,
    lab: HardwareLab,
}

impl PresentationState {
    fn snapshot(&self) -> PresentationSnapshot {
        let total = self.navigator.total();
        PresentationSnapshot {
            current: self.navigator.current(),
            total,
            direction: self.navigator.direction(),
            can_advance: self.navigator.can_advance(&self.store),
            can_retreat: self.navigator.can_retreat(),
            unlocked: (0..total)
                .map(|index| self.store.is_slide_unlocked(index))
                .collect(),
            progress: self.store.progress().clone(),
            lab: self.lab.clone(),
        }
    }

    /// Keeps the navigator on the store's slide after a store-side move
    /// (relock or reset).
    fn follow_store(&mut self) {
        if self.navigator.current() != self.store.current_slide() {
            self.navigator.jump_to(self.store.current_slide());
        }
    }

    async fn record_move(&mut self, outcome: NavOutcome) {
        match outcome {
            NavOutcome::Moved { from, to, direction } => {
                tracing::debug!(from, to, ?direction, "slide changed");
                if !self.store.set_current_slide(to).await {
                    self.follow_store();
                }
            }
            NavOutcome::Rejected(reason) => {
                tracing::debug!(?reason, current = self.navigator.current(), "navigation rejected");
            }
        }
    }
}

/// Drives the deck: gated navigation, camera mastery, and the lab mini games.
///
/// All mutations go through one lock so a persist never interleaves with
/// another change.
pub struct PresentationService {
    clock: Clock,
    state: Mutex<PresentationState>,
}

impl PresentationService {
    /// Load persisted progress and resume on the stored slide.
    pub async fn load(clock: Clock, repo: ProgressRepository, tuning: LabTuning) -> Self {
        let store = ProgressStore::load(repo, SLIDE_COUNT).await;
        let navigator = SlideNavigator::resume(SLIDE_COUNT, store.current_slide());
        Self {
            clock,
            state: Mutex::new(PresentationState {
                store,
                navigator,
                lab: HardwareLab::new(tuning),
            }),
        }
    }

    pub async fn snapshot(&self) -> PresentationSnapshot {
        self.state.lock().await.snapshot()
    }

    /// Non-blocking snapshot for synchronous callers; `None` while a mutation holds the lock.
    #[must_use]
    pub fn try_snapshot(&self) -> Option<PresentationSnapshot> {
        self.state.try_lock().ok().map(|state| state.snapshot())
    }

    pub async fn is_slide_unlocked(&self, index: usize) -> bool {
        self.state.lock().await.store.is_slide_unlocked(index)
    }

    /// Request slide `target`; rejected if out of range or locked.
    pub async fn go_to(&self, target: isize) -> Navigation {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        let outcome = state.navigator.go_to(target, &state.store);
        state.record_move(outcome).await;
        Navigation {
            outcome,
            snapshot: state.snapshot(),
        }
    }

    pub async fn go_next(&self) -> Navigation {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        let outcome = state.navigator.go_next(&state.store);
        state.record_move(outcome).await;
        Navigation {
            outcome,
            snapshot: state.snapshot(),
        }
    }

    pub async fn go_prev(&self) -> Navigation {
        let mut guard = self.state.lock().await;
        let state = &mut *guard;
        let outcome = state.navigator.go_prev(&state.store);
        state.record_move(outcome).await;
        Navigation {
            outcome,
            snapshot: state.snapshot(),
        }
    }

    pub async fn set_challenge_completed(
        &self,
        challenge: Challenge,
        completed: bool,
    ) -> PresentationSnapshot {
        let mut state = self.state.lock().await;
        state.store.set_challenge_completed(challenge, completed).await;
        state.follow_store();
        state.snapshot()
    }

    /// Back to the title slide with nothing mastered. Lab controls reset too.
    pub async fn reset(&self) -> PresentationSnapshot {
        let mut state = self.state.lock().await;
        state.store.reset().await;
        state.navigator = SlideNavigator::new(state.navigator.total());
        let tuning = state.lab.tuning().clone();
        state.lab = HardwareLab::new(tuning);
        state.snapshot()
    }

    pub async fn select_camera(&self, challenge: Challenge) -> PresentationSnapshot {
        let mut state = self.state.lock().await;
        state.lab.select(challenge);
        state.snapshot()
    }

    pub async fn set_aperture(&self, value: f64) -> PresentationSnapshot {
        let now = self.clock.now();
        let mut state = self.state.lock().await;
        let mastery = state.store.progress().camera_mastery();
        state.lab.set_aperture(value, now, &mastery);
        state.snapshot()
    }

    pub async fn set_tilt(&self, on: bool) -> PresentationSnapshot {
        let now = self.clock.now();
        let mut state = self.state.lock().await;
        let mastery = state.store.progress().camera_mastery();
        state.lab.set_tilt(on, now, &mastery);
        state.snapshot()
    }

    pub async fn set_shift(&self, on: bool) -> PresentationSnapshot {
        let now = self.clock.now();
        let mut state = self.state.lock().await;
        let mastery = state.store.progress().camera_mastery();
        state.lab.set_shift(on, now, &mastery);
        state.snapshot()
    }

    pub async fn set_shutter_index(&self, index: usize) -> PresentationSnapshot {
        let mut state = self.state.lock().await;
        state.lab.set_shutter_index(index);
        state.snapshot()
    }

    pub async fn shoot(&self) -> PresentationSnapshot {
        let now = self.clock.now();
        let mut state = self.state.lock().await;
        if !state.lab.shoot(now) {
            tracing::debug!("shutter pressed while a shot is in flight");
        }
        state.snapshot()
    }

    /// Advance lab timers to the clock's now and apply any mastery they
    /// produce. Returns a snapshot only when something changed.
    pub async fn tick(&self) -> Option<PresentationSnapshot> {
        let now = self.clock.now();
        let mut state = self.state.lock().await;
        let before = state.lab.clone();
        let mastery = state.store.progress().camera_mastery();
        let mastered = state.lab.poll(now, &mastery);
        for challenge in &mastered {
            state.store.set_challenge_completed(*challenge, true).await;
        }
        if mastered.is_empty() && state.lab == before {
            return None;
        }
        state.follow_store();
        Some(state.snapshot())
    }
}

impl UnlockPolicy for PresentationSnapshot {
    fn is_slide_unlocked(&self, index: usize) -> bool {
        self.unlocked.get(index).copied().unwrap_or(false)
    }
}
