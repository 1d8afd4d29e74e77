//! Artifact kind value object

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::DomainError;

/// A requested output category for a given article
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// A question/answer pair for self-testing
    Flashcards,
    /// A multiple-choice question with three distractors
    Quiz,
    /// Bullet-point summarized notes
    Notes,
    /// A short story incorporating the article's concepts
    Story,
    /// An illustrative image (URL)
    Images,
}

impl ArtifactKind {
    /// All known kinds, in declaration order
    pub const ALL: [Self; 5] = [
        Self::Flashcards,
        Self::Quiz,
        Self::Notes,
        Self::Story,
        Self::Images,
    ];

    /// The wire name used in requests and response keys
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Flashcards => "flashcards",
            Self::Quiz => "quiz",
            Self::Notes => "notes",
            Self::Story => "story",
            Self::Images => "images",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ArtifactKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "flashcards" => Ok(Self::Flashcards),
            "quiz" => Ok(Self::Quiz),
            "notes" => Ok(Self::Notes),
            "story" => Ok(Self::Story),
            "images" => Ok(Self::Images),
            other => Err(DomainError::UnknownKind(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_str() {
        for kind in ArtifactKind::ALL {
            let parsed: ArtifactKind = kind.as_str().parse().unwrap();
            assert_eq!(parsed, kind);
        }
    }

    #[test]
    fn unknown_kind_is_rejected() {
        let result = "podcast".parse::<ArtifactKind>();
        assert!(matches!(result, Err(DomainError::UnknownKind(_))));
    }

    #[test]
    fn parse_is_case_sensitive() {
        assert!("Quiz".parse::<ArtifactKind>().is_err());
    }

    #[test]
    fn serde_uses_lowercase() {
        let json = serde_json::to_string(&ArtifactKind::Flashcards).unwrap();
        assert_eq!(json, r#""flashcards""#);

        let kind: ArtifactKind = serde_json::from_str(r#""story""#).unwrap();
        assert_eq!(kind, ArtifactKind::Story);
    }

    #[test]
    fn display_matches_wire_name() {
        assert_eq!(ArtifactKind::Images.to_string(), "images");
    }
}
