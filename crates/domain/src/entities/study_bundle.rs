//! Study artifacts generated from one article

use serde::{Deserialize, Serialize};

use crate::value_objects::ArtifactKind;

/// A question/answer pair for self-testing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flashcard {
    /// The generated question
    pub question: String,
    /// The concise answer
    pub answer: String,
}

/// A multiple-choice quiz question
///
/// On the success path `choices` holds four entries in randomized order,
/// containing `correct_answer` exactly once. On the degraded path the
/// shape is fixed by the generator instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quiz {
    pub question: String,
    pub correct_answer: String,
    pub choices: Vec<String>,
}

impl Quiz {
    /// How many times the correct answer appears among the choices
    pub fn correct_answer_count(&self) -> usize {
        self.choices
            .iter()
            .filter(|c| **c == self.correct_answer)
            .count()
    }
}

/// The keyed bundle of generated artifacts for one request
///
/// Kinds that were not requested serialize to no key at all, matching the
/// wire contract: `flashcard`, `quiz`, `notes`, `story`, `image`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StudyBundle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flashcard: Option<Flashcard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz: Option<Quiz>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub story: Option<String>,
    /// Image URL, or an empty string when generation failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl StudyBundle {
    /// Whether the bundle carries a value for the given kind
    pub const fn contains(&self, kind: ArtifactKind) -> bool {
        match kind {
            ArtifactKind::Flashcards => self.flashcard.is_some(),
            ArtifactKind::Quiz => self.quiz.is_some(),
            ArtifactKind::Notes => self.notes.is_some(),
            ArtifactKind::Story => self.story.is_some(),
            ArtifactKind::Images => self.image.is_some(),
        }
    }

    /// The kinds this bundle carries values for
    pub fn kinds(&self) -> Vec<ArtifactKind> {
        ArtifactKind::ALL
            .into_iter()
            .filter(|kind| self.contains(*kind))
            .collect()
    }
}
