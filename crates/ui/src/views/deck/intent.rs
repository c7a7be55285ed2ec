use blackbox_core::model::Challenge;
use services::{PresentationService, PresentationSnapshot};

use super::keyboard::NavCommand;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DeckIntent {
    Next,
    Prev,
    GoTo(usize),
    Reset,
    SelectCamera(Challenge),
    SetAperture(f64),
    SetTilt(bool),
    SetShift(bool),
    SetShutter(usize),
    Shoot,
}

impl DeckIntent {
    /// Intents that change the slide position (or may, when gated).
    #[must_use]
    pub fn is_navigation(self) -> bool {
        matches!(
            self,
            DeckIntent::Next | DeckIntent::Prev | DeckIntent::GoTo(_) | DeckIntent::Reset
        )
    }
}

impl From<NavCommand> for DeckIntent {
    fn from(command: NavCommand) -> Self {
        match command {
            NavCommand::Next => DeckIntent::Next,
            NavCommand::Prev => DeckIntent::Prev,
        }
    }
}

/// Runs an intent against the service and returns the state to render next.
pub async fn apply_intent(
    presentation: &PresentationService,
    intent: DeckIntent,
) -> PresentationSnapshot {
    match intent {
        DeckIntent::Next => presentation.go_next().await.snapshot,
        DeckIntent::Prev => presentation.go_prev().await.snapshot,
        DeckIntent::GoTo(index) => {
            let target = isize::try_from(index).unwrap_or(isize::MAX);
            presentation.go_to(target).await.snapshot
        }
        DeckIntent::Reset => presentation.reset().await,
        DeckIntent::SelectCamera(challenge) => presentation.select_camera(challenge).await,
        DeckIntent::SetAperture(value) => presentation.set_aperture(value).await,
        DeckIntent::SetTilt(on) => presentation.set_tilt(on).await,
        DeckIntent::SetShift(on) => presentation.set_shift(on).await,
        DeckIntent::SetShutter(index) => presentation.set_shutter_index(index).await,
        DeckIntent::Shoot => presentation.shoot().await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blackbox_core::Clock;
    use blackbox_core::lab::LabTuning;
    use storage::repository::{DEFAULT_PROGRESS_KEY, Storage};

    async fn presentation() -> PresentationService {
        let storage = Storage::in_memory();
        PresentationService::load(
            Clock::system(),
            storage.progress(DEFAULT_PROGRESS_KEY),
            LabTuning::default(),
        )
        .await
    }

    #[tokio::test]
    async fn dot_click_on_locked_slide_keeps_position() {
        let svc = presentation().await;
        let snap = apply_intent(&svc, DeckIntent::GoTo(3)).await;
        assert_eq!(snap.current, 0);
        let snap = apply_intent(&svc, DeckIntent::GoTo(1)).await;
        assert_eq!(snap.current, 1);
    }

    #[tokio::test]
    async fn lab_intents_reach_the_lab() {
        let svc = presentation().await;
        apply_intent(&svc, DeckIntent::SelectCamera(Challenge::Slr)).await;
        let snap = apply_intent(&svc, DeckIntent::SetShutter(2)).await;
        assert_eq!(snap.lab.selected(), Challenge::Slr);
        assert_eq!(snap.lab.slr().speed_index(), 2);
        let snap = apply_intent(&svc, DeckIntent::SetTilt(true)).await;
        assert!(snap.lab.view_camera().tilt());
    }

    #[test]
    fn only_position_changes_count_as_navigation() {
        assert!(DeckIntent::Next.is_navigation());
        assert!(DeckIntent::GoTo(3).is_navigation());
        assert!(DeckIntent::Reset.is_navigation());
        assert!(!DeckIntent::SetAperture(0.5).is_navigation());
        assert!(!DeckIntent::Shoot.is_navigation());
    }

    #[test]
    fn nav_commands_map_to_intents() {
        assert_eq!(DeckIntent::from(NavCommand::Next), DeckIntent::Next);
        assert_eq!(DeckIntent::from(NavCommand::Prev), DeckIntent::Prev);
    }
}
