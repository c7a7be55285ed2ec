use chrono::{DateTime, Duration, Utc};

use super::timer::MasteryTimer;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ViewCameraTuning {
    pub mastery_delay: Duration,
}

impl Default for ViewCameraTuning {
    fn default() -> Self {
        Self {
            mastery_delay: Duration::milliseconds(500),
        }
    }
}

/// Bellows movements: engage both tilt and shift to master the view camera.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewCameraLab {
    tilt: bool,
    shift: bool,
    timer: MasteryTimer,
}

impl ViewCameraLab {
    #[must_use]
    pub fn tilt(&self) -> bool {
        self.tilt
    }

    #[must_use]
    pub fn shift(&self) -> bool {
        self.shift
    }

    #[must_use]
    pub fn is_corrected(&self) -> bool {
        self.tilt && self.shift
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    pub fn set_tilt(
        &mut self,
        on: bool,
        now: DateTime<Utc>,
        tuning: &ViewCameraTuning,
        mastered: bool,
    ) {
        self.tilt = on;
        self.sync(now, tuning, mastered);
    }

    pub fn set_shift(
        &mut self,
        on: bool,
        now: DateTime<Utc>,
        tuning: &ViewCameraTuning,
        mastered: bool,
    ) {
        self.shift = on;
        self.sync(now, tuning, mastered);
    }

    pub fn sync(&mut self, now: DateTime<Utc>, tuning: &ViewCameraTuning, mastered: bool) {
        if self.is_corrected() && !mastered {
            self.timer.arm(now, tuning.mastery_delay);
        } else {
            self.timer.cancel();
        }
    }

    pub fn poll(&mut self, now: DateTime<Utc>, tuning: &ViewCameraTuning, mastered: bool) -> bool {
        self.sync(now, tuning, mastered);
        self.timer.fire(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn needs_tilt_and_shift() {
        let tuning = ViewCameraTuning::default();
        let now = fixed_now();
        let mut lab = ViewCameraLab::default();
        lab.set_tilt(true, now, &tuning, false);
        assert!(!lab.is_pending());
        lab.set_shift(true, now, &tuning, false);
        assert!(lab.is_pending());
        assert!(!lab.poll(now + Duration::milliseconds(499), &tuning, false));
        assert!(lab.poll(now + Duration::milliseconds(500), &tuning, false));
    }

    #[test]
    fn releasing_a_movement_supersedes_mastery() {
        let tuning = ViewCameraTuning::default();
        let now = fixed_now();
        let mut lab = ViewCameraLab::default();
        lab.set_tilt(true, now, &tuning, false);
        lab.set_shift(true, now, &tuning, false);
        lab.set_tilt(false, now + Duration::milliseconds(200), &tuning, false);
        assert!(!lab.poll(now + Duration::seconds(1), &tuning, false));
    }
}
