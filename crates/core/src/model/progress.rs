use serde::{Deserialize, Serialize};

use crate::model::Challenge;
use crate::navigator::{Rejection, UnlockPolicy, check_target};

/// Slides below this index are reachable without any challenge.
pub const ALWAYS_UNLOCKED: usize = 2;

/// Completion flags for the hardware-lab cameras.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraMastery {
    pub pinhole: bool,
    pub view_camera: bool,
    pub slr: bool,
}

impl CameraMastery {
    #[must_use]
    pub fn get(&self, challenge: Challenge) -> bool {
        match challenge {
            Challenge::Pinhole => self.pinhole,
            Challenge::ViewCamera => self.view_camera,
            Challenge::Slr => self.slr,
        }
    }

    pub fn set(&mut self, challenge: Challenge, completed: bool) {
        match challenge {
            Challenge::Pinhole => self.pinhole = completed,
            Challenge::ViewCamera => self.view_camera = completed,
            Challenge::Slr => self.slr = completed,
        }
    }

    #[must_use]
    pub fn all(&self) -> bool {
        self.pinhole && self.view_camera && self.slr
    }

    #[must_use]
    pub fn completed_count(&self) -> usize {
        Challenge::ALL
            .into_iter()
            .filter(|challenge| self.get(*challenge))
            .count()
    }
}

/// Position in the deck plus challenge completion, with derived unlock flags.
///
/// The current slide is always unlocked: every mutation that could break this
/// either gets rejected or moves the position back to an unlocked slide.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Progress {
    current_slide: usize,
    camera_mastery: CameraMastery,
    lab_unlocked: bool,
    deck_unlocked: bool,
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress {
    /// First-use state: title slide, nothing mastered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            current_slide: 0,
            camera_mastery: CameraMastery::default(),
            lab_unlocked: true,
            deck_unlocked: false,
        }
    }

    /// Rebuild progress from a persisted record.
    ///
    /// Unlock flags are always recomputed from `camera_mastery`. A stored
    /// position that is out of range or locked falls back to the first slide.
    #[must_use]
    pub fn from_persisted(current_slide: i64, camera_mastery: CameraMastery, total: usize) -> Self {
        let mut progress = Self {
            current_slide: 0,
            camera_mastery,
            lab_unlocked: true,
            deck_unlocked: camera_mastery.all(),
        };
        let target = usize::try_from(current_slide).ok();
        if let Ok(index) = check_target(target, total, &progress) {
            progress.current_slide = index;
        }
        progress
    }

    #[must_use]
    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    #[must_use]
    pub fn camera_mastery(&self) -> CameraMastery {
        self.camera_mastery
    }

    #[must_use]
    pub fn all_cameras_mastered(&self) -> bool {
        self.camera_mastery.all()
    }

    /// Persisted as `slide2Unlocked`; the lab is always reachable.
    #[must_use]
    pub fn lab_unlocked(&self) -> bool {
        self.lab_unlocked
    }

    /// Persisted as `slide3Unlocked`; gates every slide after the lab.
    #[must_use]
    pub fn deck_unlocked(&self) -> bool {
        self.deck_unlocked
    }

    #[must_use]
    pub fn is_slide_unlocked(&self, index: usize) -> bool {
        index < ALWAYS_UNLOCKED || self.deck_unlocked
    }

    /// Move to `index` if it is inside the deck and unlocked.
    ///
    /// # Errors
    ///
    /// Returns the `Rejection` reason and leaves the position unchanged.
    pub fn set_current_slide(&mut self, index: usize, total: usize) -> Result<(), Rejection> {
        self.current_slide = check_target(Some(index), total, &*self)?;
        Ok(())
    }

    /// Record a challenge result and recompute the unlock flags.
    ///
    /// Returns `true` if anything changed. Clearing a flag while standing on
    /// a gated slide moves the position back to the last ungated slide.
    pub fn set_challenge_completed(&mut self, challenge: Challenge, completed: bool) -> bool {
        if self.camera_mastery.get(challenge) == completed {
            return false;
        }
        self.camera_mastery.set(challenge, completed);
        self.deck_unlocked = self.camera_mastery.all();
        if !self.is_slide_unlocked(self.current_slide) {
            self.current_slide = ALWAYS_UNLOCKED - 1;
        }
        true
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl UnlockPolicy for Progress {
    fn is_slide_unlocked(&self, index: usize) -> bool {
        Progress::is_slide_unlocked(self, index)
    }
}
