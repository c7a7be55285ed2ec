//! Hardware-lab mini games that feed camera mastery.
//!
//! Thresholds and delays live in [`LabTuning`]; the progress model only sees
//! which challenge was mastered.

mod pinhole;
mod slr;
mod timer;
mod view_camera;

use chrono::{DateTime, Utc};

use crate::model::{CameraMastery, Challenge};

pub use pinhole::{PinholeLab, PinholeTuning};
pub use slr::{ShotResult, ShotState, SlrLab, SlrTuning};
pub use timer::MasteryTimer;
pub use view_camera::{ViewCameraLab, ViewCameraTuning};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LabTuning {
    pub pinhole: PinholeTuning,
    pub view_camera: ViewCameraTuning,
    pub slr: SlrTuning,
}

/// Interactive state of the lab slide: selected camera plus each camera's controls.
#[derive(Clone, Debug, PartialEq)]
pub struct HardwareLab {
    tuning: LabTuning,
    selected: Challenge,
    pinhole: PinholeLab,
    view_camera: ViewCameraLab,
    slr: SlrLab,
}

impl Default for HardwareLab {
    fn default() -> Self {
        Self::new(LabTuning::default())
    }
}

impl HardwareLab {
    #[must_use]
    pub fn new(tuning: LabTuning) -> Self {
        Self {
            tuning,
            selected: Challenge::Pinhole,
            pinhole: PinholeLab::default(),
            view_camera: ViewCameraLab::default(),
            slr: SlrLab::default(),
        }
    }

    #[must_use]
    pub fn tuning(&self) -> &LabTuning {
        &self.tuning
    }

    #[must_use]
    pub fn selected(&self) -> Challenge {
        self.selected
    }

    #[must_use]
    pub fn pinhole(&self) -> &PinholeLab {
        &self.pinhole
    }

    #[must_use]
    pub fn view_camera(&self) -> &ViewCameraLab {
        &self.view_camera
    }

    #[must_use]
    pub fn slr(&self) -> &SlrLab {
        &self.slr
    }

    pub fn select(&mut self, challenge: Challenge) {
        self.selected = challenge;
    }

    pub fn set_aperture(&mut self, value: f64, now: DateTime<Utc>, mastery: &CameraMastery) {
        self.pinhole
            .set_aperture(value, now, &self.tuning.pinhole, mastery.pinhole);
    }

    pub fn set_tilt(&mut self, on: bool, now: DateTime<Utc>, mastery: &CameraMastery) {
        self.view_camera
            .set_tilt(on, now, &self.tuning.view_camera, mastery.view_camera);
    }

    pub fn set_shift(&mut self, on: bool, now: DateTime<Utc>, mastery: &CameraMastery) {
        self.view_camera
            .set_shift(on, now, &self.tuning.view_camera, mastery.view_camera);
    }

    pub fn set_shutter_index(&mut self, index: usize) {
        self.slr.set_speed_index(index, &self.tuning.slr);
    }

    pub fn shoot(&mut self, now: DateTime<Utc>) -> bool {
        self.slr.shoot(now, &self.tuning.slr)
    }

    /// True while any timer or shot is in flight.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.pinhole.is_pending() || self.view_camera.is_pending() || self.slr.is_shooting()
    }

    /// Advances every game to `now` and returns the challenges mastered since
    /// the last poll.
    pub fn poll(&mut self, now: DateTime<Utc>, mastery: &CameraMastery) -> Vec<Challenge> {
        let mut mastered = Vec::new();
        if self
            .pinhole
            .poll(now, &self.tuning.pinhole, mastery.pinhole)
        {
            mastered.push(Challenge::Pinhole);
        }
        if self
            .view_camera
            .poll(now, &self.tuning.view_camera, mastery.view_camera)
        {
            mastered.push(Challenge::ViewCamera);
        }
        if self.slr.poll(now, mastery.slr) {
            mastered.push(Challenge::Slr);
        }
        mastered
    }
}
