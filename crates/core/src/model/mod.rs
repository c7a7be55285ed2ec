mod challenge;
mod progress;
mod slide;

pub use challenge::{Challenge, ChallengeParseError};
pub use progress::{ALWAYS_UNLOCKED, CameraMastery, Progress};
pub use slide::{SLIDE_COUNT, Slide};
