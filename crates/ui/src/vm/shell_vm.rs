use blackbox_core::model::Slide;
use blackbox_core::navigator::Direction;
use services::PresentationSnapshot;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DotState {
    Current,
    Unlocked,
    Locked,
}

impl DotState {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            DotState::Current => "dot current",
            DotState::Unlocked => "dot",
            DotState::Locked => "dot locked",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideDotVm {
    pub index: usize,
    pub state: DotState,
    pub aria_label: String,
}

/// Chrome around the current slide: counter, dots, arrows, transition.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SlideShellVm {
    pub slide: Slide,
    pub counter_current: String,
    pub counter_total: String,
    pub dots: Vec<SlideDotVm>,
    pub show_prev: bool,
    pub show_next: bool,
    pub transition_class: &'static str,
}

#[must_use]
pub fn map_slide_shell(snapshot: &PresentationSnapshot) -> SlideShellVm {
    let dots = snapshot
        .unlocked
        .iter()
        .enumerate()
        .map(|(index, unlocked)| {
            let state = if index == snapshot.current {
                DotState::Current
            } else if *unlocked {
                DotState::Unlocked
            } else {
                DotState::Locked
            };
            SlideDotVm {
                index,
                state,
                aria_label: format!("Go to slide {}", index + 1),
            }
        })
        .collect();

    let transition_class = match snapshot.direction {
        Some(Direction::Forward) => "slide enter-forward",
        Some(Direction::Backward) => "slide enter-backward",
        None => "slide",
    };

    SlideShellVm {
        slide: Slide::from_index(snapshot.current).unwrap_or(Slide::Title),
        counter_current: format!("{:02}", snapshot.current + 1),
        counter_total: format!("{:02}", snapshot.total),
        dots,
        show_prev: snapshot.can_retreat,
        show_next: snapshot.can_advance,
        transition_class,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackbox_core::lab::HardwareLab;
    use blackbox_core::model::Progress;

    fn snapshot(current: usize, unlocked: Vec<bool>) -> PresentationSnapshot {
        PresentationSnapshot {
            current,
            total: unlocked.len(),
            direction: Some(Direction::Forward),
            can_advance: unlocked.get(current + 1).copied().unwrap_or(false),
            can_retreat: current > 0,
            unlocked,
            progress: Progress::new(),
            lab: HardwareLab::default(),
        }
    }

    #[test]
    fn counter_is_zero_padded() {
        let vm = map_slide_shell(&snapshot(1, vec![true, true, false, false, false]));
        assert_eq!(vm.counter_current, "02");
        assert_eq!(vm.counter_total, "05");
        assert_eq!(vm.slide, Slide::HardwareLab);
        assert_eq!(vm.transition_class, "slide enter-forward");
    }

    #[test]
    fn dots_reflect_gating() {
        let vm = map_slide_shell(&snapshot(1, vec![true, true, false, false, false]));
        let states: Vec<DotState> = vm.dots.iter().map(|dot| dot.state).collect();
        assert_eq!(
            states,
            vec![
                DotState::Unlocked,
                DotState::Current,
                DotState::Locked,
                DotState::Locked,
                DotState::Locked
            ]
        );
        assert_eq!(vm.dots[2].aria_label, "Go to slide 3");
        assert!(vm.show_prev);
        assert!(!vm.show_next);
    }
}
