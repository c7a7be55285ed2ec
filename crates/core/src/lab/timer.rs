use chrono::{DateTime, Duration, Utc};

/// One-shot deadline for a delayed mastery.
///
/// Arming an already pending timer keeps the original deadline, so a
/// condition that stays true does not push mastery further out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MasteryTimer {
    due_at: Option<DateTime<Utc>>,
}

impl MasteryTimer {
    pub fn arm(&mut self, now: DateTime<Utc>, delay: Duration) {
        if self.due_at.is_none() {
            self.due_at = Some(now + delay);
        }
    }

    pub fn cancel(&mut self) {
        self.due_at = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.due_at.is_some()
    }

    #[must_use]
    pub fn due_at(&self) -> Option<DateTime<Utc>> {
        self.due_at
    }

    /// Returns `true` once, when the deadline has passed.
    pub fn fire(&mut self, now: DateTime<Utc>) -> bool {
        match self.due_at {
            Some(due) if due <= now => {
                self.due_at = None;
                true
            }
            _ => false,
        }
    }
}
