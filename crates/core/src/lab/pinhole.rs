use chrono::{DateTime, Duration, Utc};

use super::timer::MasteryTimer;

#[derive(Clone, Debug, PartialEq)]
pub struct PinholeTuning {
    pub optimal_min: f64,
    pub optimal_max: f64,
    /// Blur per unit of aperture below `optimal_min` (diffraction).
    pub blur_below: f64,
    /// Blur per unit of aperture above `optimal_max` (overlapping rays).
    pub blur_above: f64,
    /// Apertures below this let in no usable light.
    pub dark_below: f64,
    pub brightness_base: f64,
    pub brightness_max: f64,
    pub mastery_delay: Duration,
}

impl Default for PinholeTuning {
    fn default() -> Self {
        Self {
            optimal_min: 0.35,
            optimal_max: 0.65,
            blur_below: 20.0,
            blur_above: 30.0,
            dark_below: 0.2,
            brightness_base: 0.5,
            brightness_max: 1.5,
            mastery_delay: Duration::milliseconds(1000),
        }
    }
}

/// Aperture-size game: hold the hole in the sweet spot until mastery fires.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PinholeLab {
    aperture: f64,
    timer: MasteryTimer,
}

impl PinholeLab {
    #[must_use]
    pub fn aperture(&self) -> f64 {
        self.aperture
    }

    /// Sets the aperture, clamped to `[0, 1]`. Non-finite input is ignored.
    pub fn set_aperture(
        &mut self,
        value: f64,
        now: DateTime<Utc>,
        tuning: &PinholeTuning,
        mastered: bool,
    ) {
        if !value.is_finite() {
            return;
        }
        self.aperture = value.clamp(0.0, 1.0);
        self.sync(now, tuning, mastered);
    }

    #[must_use]
    pub fn is_optimal(&self, tuning: &PinholeTuning) -> bool {
        (tuning.optimal_min..=tuning.optimal_max).contains(&self.aperture)
    }

    #[must_use]
    pub fn blur(&self, tuning: &PinholeTuning) -> f64 {
        if self.aperture < tuning.optimal_min {
            (tuning.optimal_min - self.aperture) * tuning.blur_below
        } else if self.aperture > tuning.optimal_max {
            (self.aperture - tuning.optimal_max) * tuning.blur_above
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn brightness(&self, tuning: &PinholeTuning) -> f64 {
        if self.aperture < tuning.dark_below {
            0.0
        } else {
            (tuning.brightness_base + self.aperture).min(tuning.brightness_max)
        }
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.timer.is_pending()
    }

    /// Arms the mastery timer while the aperture is optimal and cancels it otherwise.
    pub fn sync(&mut self, now: DateTime<Utc>, tuning: &PinholeTuning, mastered: bool) {
        if self.is_optimal(tuning) && !mastered {
            self.timer.arm(now, tuning.mastery_delay);
        } else {
            self.timer.cancel();
        }
    }

    /// Returns `true` when the pinhole has just been mastered.
    pub fn poll(&mut self, now: DateTime<Utc>, tuning: &PinholeTuning, mastered: bool) -> bool {
        self.sync(now, tuning, mastered);
        self.timer.fire(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    fn lab_at(aperture: f64) -> PinholeLab {
        let mut lab = PinholeLab::default();
        lab.set_aperture(aperture, fixed_now(), &PinholeTuning::default(), false);
        lab
    }

    #[test]
    fn sweet_spot_is_inclusive() {
        let tuning = PinholeTuning::default();
        assert!(lab_at(0.35).is_optimal(&tuning));
        assert!(lab_at(0.65).is_optimal(&tuning));
        assert!(!lab_at(0.34).is_optimal(&tuning));
        assert_eq!(lab_at(0.5).blur(&tuning), 0.0);
    }

    #[test]
    fn blur_grows_faster_above_the_sweet_spot() {
        let tuning = PinholeTuning::default();
        assert!((lab_at(0.25).blur(&tuning) - 2.0).abs() < 1e-9);
        assert!((lab_at(0.75).blur(&tuning) - 3.0).abs() < 1e-9);
    }

    #[test]
    fn brightness_is_dark_then_capped() {
        let tuning = PinholeTuning::default();
        assert_eq!(lab_at(0.1).brightness(&tuning), 0.0);
        assert!((lab_at(0.5).brightness(&tuning) - 1.0).abs() < 1e-9);
        assert!((lab_at(1.0).brightness(&tuning) - 1.5).abs() < 1e-9);
    }

    #[test]
    fn aperture_is_clamped() {
        assert_eq!(lab_at(3.0).aperture(), 1.0);
        assert_eq!(lab_at(-1.0).aperture(), 0.0);
        assert_eq!(lab_at(f64::NAN).aperture(), 0.0);
    }

    #[test]
    fn mastery_needs_the_full_delay() {
        let tuning = PinholeTuning::default();
        let now = fixed_now();
        let mut lab = lab_at(0.5);
        assert!(lab.is_pending());
        assert!(!lab.poll(now + Duration::milliseconds(999), &tuning, false));
        assert!(lab.poll(now + Duration::milliseconds(1000), &tuning, false));
    }

    #[test]
    fn leaving_the_sweet_spot_supersedes_mastery() {
        let tuning = PinholeTuning::default();
        let now = fixed_now();
        let mut lab = lab_at(0.5);
        lab.set_aperture(0.9, now + Duration::milliseconds(500), &tuning, false);
        assert!(!lab.is_pending());
        assert!(!lab.poll(now + Duration::seconds(2), &tuning, false));
    }

    #[test]
    fn already_mastered_does_not_arm() {
        let tuning = PinholeTuning::default();
        let mut lab = PinholeLab::default();
        lab.set_aperture(0.5, fixed_now(), &tuning, true);
        assert!(!lab.is_pending());
    }
}
