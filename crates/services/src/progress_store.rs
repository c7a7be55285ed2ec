use blackbox_core::model::{Challenge, Progress};
use blackbox_core::navigator::UnlockPolicy;
use storage::repository::{ProgressRecord, ProgressRepository};

/// Persisted source of truth for slide position and camera mastery.
///
/// Every operation is total. Persistence problems are logged and the store
/// carries on with its in-memory state.
pub struct ProgressStore {
    repo: ProgressRepository,
    total_slides: usize,
    progress: Progress,
}

impl ProgressStore {
    /// Load stored progress, falling back to the initial state when the
    /// record is missing, unreadable, or corrupt.
    pub async fn load(repo: ProgressRepository, total_slides: usize) -> Self {
        let progress = match repo.load().await {
            Ok(Some(record)) => record.into_progress(total_slides),
            Ok(None) => Progress::new(),
            Err(err) => {
                tracing::warn!(key = repo.key(), error = %err, "stored progress unusable, starting fresh");
                Progress::new()
            }
        };
        tracing::debug!(
            key = repo.key(),
            slide = progress.current_slide(),
            mastered = progress.camera_mastery().completed_count(),
            "progress loaded"
        );
        Self {
            repo,
            total_slides,
            progress,
        }
    }

    #[must_use]
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    #[must_use]
    pub fn total_slides(&self) -> usize {
        self.total_slides
    }

    #[must_use]
    pub fn current_slide(&self) -> usize {
        self.progress.current_slide()
    }

    #[must_use]
    pub fn is_slide_unlocked(&self, index: usize) -> bool {
        self.progress.is_slide_unlocked(index)
    }

    #[must_use]
    pub fn all_cameras_mastered(&self) -> bool {
        self.progress.all_cameras_mastered()
    }

    /// Record the current slide. Locked or out-of-range indices are rejected
    /// and nothing is persisted; returns whether the index was accepted.
    pub async fn set_current_slide(&mut self, index: usize) -> bool {
        if let Err(reason) = self.progress.set_current_slide(index, self.total_slides) {
            tracing::debug!(index, ?reason, "slide change rejected");
            return false;
        }
        self.persist().await;
        true
    }

    /// Update one challenge flag. Setting the value it already has changes nothing.
    pub async fn set_challenge_completed(&mut self, challenge: Challenge, completed: bool) {
        let was_unlocked = self.progress.deck_unlocked();
        if !self.progress.set_challenge_completed(challenge, completed) {
            return;
        }
        tracing::info!(%challenge, completed, "camera mastery updated");
        if self.progress.deck_unlocked() != was_unlocked {
            tracing::info!(unlocked = self.progress.deck_unlocked(), "gated slides toggled");
        }
        self.persist().await;
    }

    pub async fn reset(&mut self) {
        self.progress.reset();
        tracing::info!(key = self.repo.key(), "progress reset");
        self.persist().await;
    }

    async fn persist(&self) {
        let record = ProgressRecord::from_progress(&self.progress);
        if let Err(err) = self.repo.save(&record).await {
            tracing::warn!(key = self.repo.key(), error = %err, "failed to persist progress");
        }
    }
}

impl UnlockPolicy for ProgressStore {
    fn is_slide_unlocked(&self, index: usize) -> bool {
        self.progress.is_slide_unlocked(index)
    }
}
