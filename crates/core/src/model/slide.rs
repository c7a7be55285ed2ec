/// The fixed, ordered slide sequence of the presentation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slide {
    Title,
    HardwareLab,
    GrainNoise,
    Bayard,
    Portfolio,
}

/// Number of slides in the deck.
pub const SLIDE_COUNT: usize = Slide::ALL.len();

impl Slide {
    pub const ALL: [Slide; 5] = [
        Slide::Title,
        Slide::HardwareLab,
        Slide::GrainNoise,
        Slide::Bayard,
        Slide::Portfolio,
    ];

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Slide::Title => "The Black Box",
            Slide::HardwareLab => "Hardware Evolution Lab",
            Slide::GrainNoise => "Grain vs. Noise",
            Slide::Bayard => "The First Staged Photograph",
            Slide::Portfolio => "Portfolio",
        }
    }

    #[must_use]
    pub fn caption(self) -> &'static str {
        match self {
            Slide::Title => "A short history of capturing light",
            Slide::HardwareLab => "Master all three cameras to continue",
            Slide::GrainNoise => "Silver halide crystals against sensor noise",
            Slide::Bayard => "Hippolyte Bayard, Self Portrait as a Drowned Man, 1840",
            Slide::Portfolio => "Studium and punctum in a small gallery",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indices_follow_declaration_order() {
        for (index, slide) in Slide::ALL.iter().enumerate() {
            assert_eq!(slide.index(), index);
            assert_eq!(Slide::from_index(index), Some(*slide));
        }
        assert_eq!(SLIDE_COUNT, 5);
    }

    #[test]
    fn out_of_range_index_has_no_slide() {
        assert_eq!(Slide::from_index(SLIDE_COUNT), None);
    }
}
