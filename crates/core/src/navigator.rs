//! Gated slide-to-slide transitions over a fixed, ordered deck.

/// Decides whether a slide may be navigated to.
pub trait UnlockPolicy {
    fn is_slide_unlocked(&self, index: usize) -> bool;
}

impl<F> UnlockPolicy for F
where
    F: Fn(usize) -> bool,
{
    fn is_slide_unlocked(&self, index: usize) -> bool {
        self(index)
    }
}

/// Which way the last accepted transition went. Only used to pick a visual
/// transition variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    #[must_use]
    pub fn sign(self) -> i8 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    OutOfBounds,
    Locked,
}

/// Result of a navigation request. Rejections leave the navigator untouched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    Moved {
        from: usize,
        to: usize,
        direction: Direction,
    },
    Rejected(Rejection),
}

impl NavOutcome {
    #[must_use]
    pub fn is_moved(&self) -> bool {
        matches!(self, NavOutcome::Moved { .. })
    }
}

/// Checks `target` against `[0, total)` and the unlock policy.
///
/// # Errors
///
/// Returns the `Rejection` reason when the target is out of range or locked.
pub fn check_target(
    target: Option<usize>,
    total: usize,
    policy: &impl UnlockPolicy,
) -> Result<usize, Rejection> {
    let index = target
        .filter(|index| *index < total)
        .ok_or(Rejection::OutOfBounds)?;
    if !policy.is_slide_unlocked(index) {
        return Err(Rejection::Locked);
    }
    Ok(index)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideNavigator {
    total: usize,
    current: usize,
    direction: Option<Direction>,
}

impl SlideNavigator {
    #[must_use]
    pub fn new(total: usize) -> Self {
        Self {
            total,
            current: 0,
            direction: None,
        }
    }

    /// Starts at a previously persisted position. An out-of-range index
    /// falls back to the first slide.
    #[must_use]
    pub fn resume(total: usize, current: usize) -> Self {
        let current = if current < total { current } else { 0 };
        Self {
            total,
            current,
            direction: None,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    /// Requests a move to `target`. Negative targets are out of bounds.
    pub fn go_to(&mut self, target: isize, policy: &impl UnlockPolicy) -> NavOutcome {
        self.go_to_checked(usize::try_from(target).ok(), policy)
    }

    pub fn go_to_index(&mut self, target: usize, policy: &impl UnlockPolicy) -> NavOutcome {
        self.go_to_checked(Some(target), policy)
    }

    pub fn go_next(&mut self, policy: &impl UnlockPolicy) -> NavOutcome {
        self.go_to_checked(self.current.checked_add(1), policy)
    }

    pub fn go_prev(&mut self, policy: &impl UnlockPolicy) -> NavOutcome {
        self.go_to_checked(self.current.checked_sub(1), policy)
    }

    #[must_use]
    pub fn can_advance(&self, policy: &impl UnlockPolicy) -> bool {
        self.current + 1 < self.total && policy.is_slide_unlocked(self.current + 1)
    }

    /// Going back needs no unlock check: every earlier slide was unlocked
    /// when it was visited.
    #[must_use]
    pub fn can_retreat(&self) -> bool {
        self.current > 0
    }

    /// Moves to `index` without a transition, e.g. after a reset or relock.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.total {
            self.current = index;
            self.direction = None;
        }
    }

    fn go_to_checked(&mut self, target: Option<usize>, policy: &impl UnlockPolicy) -> NavOutcome {
        let to = match check_target(target, self.total, policy) {
            Ok(index) => index,
            Err(reason) => return NavOutcome::Rejected(reason),
        };
        let from = self.current;
        // Re-selecting the current slide counts as backward, like any non-forward move.
        let direction = if to > from {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current = to;
        self.direction = Some(direction);
        NavOutcome::Moved {
            from,
            to,
            direction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open(_: usize) -> bool {
        true
    }

    fn gated(index: usize) -> bool {
        index <= 1
    }

    #[test]
    fn starts_on_first_slide_without_direction() {
        let nav = SlideNavigator::new(5);
        assert_eq!(nav.current(), 0);
        assert_eq!(nav.direction(), None);
        assert!(!nav.can_retreat());
    }

    #[test]
    fn out_of_bounds_targets_are_rejected() {
        let mut nav = SlideNavigator::new(5);
        assert_eq!(
            nav.go_to(-1, &open),
            NavOutcome::Rejected(Rejection::OutOfBounds)
        );
        assert_eq!(
            nav.go_to(5, &open),
            NavOutcome::Rejected(Rejection::OutOfBounds)
        );
        assert_eq!(
            nav.go_to(isize::MIN, &open),
            NavOutcome::Rejected(Rejection::OutOfBounds)
        );
        assert_eq!(nav.current(), 0);
        assert_eq!(nav.direction(), None);
    }

    #[test]
    fn locked_target_is_rejected() {
        let mut nav = SlideNavigator::new(5);
        assert_eq!(nav.go_to(2, &gated), NavOutcome::Rejected(Rejection::Locked));
        assert_eq!(nav.current(), 0);
    }

    #[test]
    fn records_direction_of_accepted_moves() {
        let mut nav = SlideNavigator::new(5);
        let outcome = nav.go_to(3, &open);
        assert_eq!(
            outcome,
            NavOutcome::Moved {
                from: 0,
                to: 3,
                direction: Direction::Forward
            }
        );
        nav.go_prev(&open);
        assert_eq!(nav.current(), 2);
        assert_eq!(nav.direction(), Some(Direction::Backward));
        assert_eq!(Direction::Backward.sign(), -1);
    }

    #[test]
    fn reselecting_current_slide_is_backward() {
        let mut nav = SlideNavigator::new(5);
        let outcome = nav.go_to_index(0, &open);
        assert!(outcome.is_moved());
        assert_eq!(nav.direction(), Some(Direction::Backward));
    }

    #[test]
    fn can_advance_respects_gate_and_end() {
        let mut nav = SlideNavigator::new(5);
        assert!(nav.can_advance(&gated));
        nav.go_next(&gated);
        assert_eq!(nav.current(), 1);
        assert!(!nav.can_advance(&gated));
        assert!(nav.can_retreat());

        let mut nav = SlideNavigator::resume(5, 4);
        assert!(!nav.can_advance(&open));
        assert_eq!(
            nav.go_next(&open),
            NavOutcome::Rejected(Rejection::OutOfBounds)
        );
    }

    #[test]
    fn go_prev_from_first_slide_is_rejected() {
        let mut nav = SlideNavigator::new(3);
        assert_eq!(
            nav.go_prev(&open),
            NavOutcome::Rejected(Rejection::OutOfBounds)
        );
    }

    #[test]
    fn resume_falls_back_when_out_of_range() {
        assert_eq!(SlideNavigator::resume(5, 9).current(), 0);
        assert_eq!(SlideNavigator::resume(5, 3).current(), 3);
    }
}
