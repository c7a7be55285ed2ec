use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A hardware-lab mini task that must be mastered to unlock the rest of the deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Challenge {
    #[serde(rename = "pinhole")]
    Pinhole,
    #[serde(rename = "viewCamera")]
    ViewCamera,
    #[serde(rename = "slr")]
    Slr,
}

impl Challenge {
    pub const ALL: [Challenge; 3] = [Challenge::Pinhole, Challenge::ViewCamera, Challenge::Slr];

    /// Stable identifier used in persisted state.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Challenge::Pinhole => "pinhole",
            Challenge::ViewCamera => "viewCamera",
            Challenge::Slr => "slr",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Challenge::Pinhole => "The Pinhole",
            Challenge::ViewCamera => "Sinar 4x5",
            Challenge::Slr => "Canon AE-1",
        }
    }

    /// Approximate era of the camera.
    #[must_use]
    pub fn era(self) -> &'static str {
        match self {
            Challenge::Pinhole => "~1500s",
            Challenge::ViewCamera => "~1850s",
            Challenge::Slr => "1976",
        }
    }
}

impl fmt::Display for Challenge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown challenge: {raw}")]
pub struct ChallengeParseError {
    raw: String,
}

impl FromStr for Challenge {
    type Err = ChallengeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Challenge::ALL
            .into_iter()
            .find(|challenge| challenge.id() == s.trim())
            .ok_or_else(|| ChallengeParseError { raw: s.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_persisted_ids() {
        assert_eq!(Challenge::ViewCamera.to_string(), "viewCamera");
        assert_eq!(Challenge::Slr.to_string(), "slr");
    }

    #[test]
    fn parses_known_ids() {
        let parsed: Challenge = "viewCamera".parse().unwrap();
        assert_eq!(parsed, Challenge::ViewCamera);
    }

    #[test]
    fn rejects_unknown_ids() {
        let err = "daguerreotype".parse::<Challenge>().unwrap_err();
        assert_eq!(err.to_string(), "unknown challenge: daguerreotype");
    }

    #[test]
    fn serde_matches_display() {
        let json = serde_json::to_string(&Challenge::Pinhole).unwrap();
        assert_eq!(json, "\"pinhole\"");
    }
}
