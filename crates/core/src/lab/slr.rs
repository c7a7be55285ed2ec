use chrono::{DateTime, Duration, Utc};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlrTuning {
    /// Shutter speeds as denominators of a second, slowest first.
    pub shutter_speeds: Vec<u32>,
    /// Slowest shutter that freezes the moving subject.
    pub required_speed: u32,
    pub develop_delay: Duration,
    pub result_hold: Duration,
}

impl Default for SlrTuning {
    fn default() -> Self {
        Self {
            shutter_speeds: vec![15, 60, 125, 500],
            required_speed: 500,
            develop_delay: Duration::milliseconds(300),
            result_hold: Duration::milliseconds(2000),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShotResult {
    Success,
    Blur,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ShotState {
    #[default]
    Idle,
    Exposing {
        develop_at: DateTime<Utc>,
        clear_at: DateTime<Utc>,
        result: ShotResult,
    },
    Developed {
        clear_at: DateTime<Utc>,
        result: ShotResult,
    },
}

/// Shutter-speed game: freeze the moving subject.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlrLab {
    speed_index: usize,
    shot: ShotState,
}

impl SlrLab {
    #[must_use]
    pub fn speed_index(&self) -> usize {
        self.speed_index
    }

    #[must_use]
    pub fn shot(&self) -> ShotState {
        self.shot
    }

    /// The developed result, once the exposure delay has passed.
    #[must_use]
    pub fn result(&self) -> Option<ShotResult> {
        match self.shot {
            ShotState::Developed { result, .. } => Some(result),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_shooting(&self) -> bool {
        !matches!(self.shot, ShotState::Idle)
    }

    pub fn set_speed_index(&mut self, index: usize, tuning: &SlrTuning) {
        let last = tuning.shutter_speeds.len().saturating_sub(1);
        self.speed_index = index.min(last);
    }

    #[must_use]
    pub fn shutter_speed(&self, tuning: &SlrTuning) -> u32 {
        tuning
            .shutter_speeds
            .get(self.speed_index)
            .copied()
            .unwrap_or_default()
    }

    /// Presses the shutter. Ignored while a previous shot is still showing.
    pub fn shoot(&mut self, now: DateTime<Utc>, tuning: &SlrTuning) -> bool {
        if self.is_shooting() {
            return false;
        }
        let result = if self.shutter_speed(tuning) >= tuning.required_speed {
            ShotResult::Success
        } else {
            ShotResult::Blur
        };
        self.shot = ShotState::Exposing {
            develop_at: now + tuning.develop_delay,
            clear_at: now + tuning.result_hold,
            result,
        };
        true
    }

    /// Advances the shot. Returns `true` when a successful shot has just
    /// developed and the SLR was not yet mastered.
    pub fn poll(&mut self, now: DateTime<Utc>, mastered: bool) -> bool {
        let mut just_mastered = false;
        if let ShotState::Exposing {
            develop_at,
            clear_at,
            result,
        } = self.shot
        {
            if develop_at <= now {
                just_mastered = result == ShotResult::Success && !mastered;
                self.shot = ShotState::Developed { clear_at, result };
            }
        }
        if let ShotState::Developed { clear_at, .. } = self.shot {
            if clear_at <= now {
                self.shot = ShotState::Idle;
            }
        }
        just_mastered
    }
}
