//! Content generator - turns an article into study artifacts
//!
//! Every requested artifact kind maps to exactly one provider call chain.
//! Provider failures are contained per kind: the affected artifact degrades
//! to fixed placeholder content and the request as a whole still succeeds.

use std::{fmt, sync::Arc};

use domain::{ArtifactKind, DomainError, Flashcard, Quiz, StudyBundle};
use rand::seq::SliceRandom;
use tracing::{debug, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{CompletionPort, ImagePort},
};

const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

const QUESTION_PLACEHOLDER: &str = "An error occurred while generating the question.";
const ANSWER_PLACEHOLDER: &str = "Error";
const CHOICES_PLACEHOLDER: &str = "Error generating choices";
const CHOICE_PLACEHOLDER: &str = "Error generating choice";
const NOTES_PLACEHOLDER: &str = "An error occurred while generating summarized notes.";
const STORY_PLACEHOLDER: &str = "An error occurred while generating the story.";

/// Characters of the article embedded into the image prompt
const IMAGE_PROMPT_EXCERPT_CHARS: usize = 100;

/// Service that generates study artifacts from article text
pub struct StudyKitService {
    completion: Arc<dyn CompletionPort>,
    image: Arc<dyn ImagePort>,
}

impl fmt::Debug for StudyKitService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StudyKitService").finish_non_exhaustive()
    }
}

impl StudyKitService {
    /// Create a new content generator
    pub fn new(completion: Arc<dyn CompletionPort>, image: Arc<dyn ImagePort>) -> Self {
        Self { completion, image }
    }

    /// Produce one artifact per requested kind
    ///
    /// Rejects an empty article or an empty kind list before any provider
    /// call. Flashcards and quiz each trigger their own question/answer
    /// round-trip; no result is shared between them. Provider failures are
    /// degraded to placeholders, never propagated.
    #[instrument(skip(self, article), fields(article_len = article.len(), kinds = kinds.len()))]
    pub async fn generate_content(
        &self,
        article: &str,
        kinds: &[ArtifactKind],
    ) -> Result<StudyBundle, ApplicationError> {
        if article.trim().is_empty() {
            return Err(DomainError::EmptyArticle.into());
        }
        if kinds.is_empty() {
            return Err(DomainError::NoKindsRequested.into());
        }

        let mut bundle = StudyBundle::default();

        if kinds.contains(&ArtifactKind::Flashcards) {
            let quiz = self.generate_question_and_answer(article).await;
            bundle.flashcard = Some(Flashcard {
                question: quiz.question,
                answer: quiz.correct_answer,
            });
        }

        if kinds.contains(&ArtifactKind::Quiz) {
            bundle.quiz = Some(self.generate_question_and_answer(article).await);
        }

        if kinds.contains(&ArtifactKind::Notes) {
            bundle.notes = Some(self.generate_summarized_notes(article).await);
        }

        if kinds.contains(&ArtifactKind::Story) {
            bundle.story = Some(self.generate_story(article).await);
        }

        if kinds.contains(&ArtifactKind::Images) {
            let excerpt: String = article.chars().take(IMAGE_PROMPT_EXCERPT_CHARS).collect();
            let prompt = format!("Create an educational image about: {excerpt}");
            bundle.image = Some(self.generate_image(&prompt).await);
        }

        debug!(kinds = ?bundle.kinds(), "Study bundle assembled");

        Ok(bundle)
    }

    /// Generate a question, its concise answer, and a shuffled choice set
    ///
    /// The provider is expected to answer with the question on the first
    /// line and the answer on the rest. A response without a newline is
    /// treated the same as a provider failure and degrades to the sentinel.
    pub async fn generate_question_and_answer(&self, text: &str) -> Quiz {
        let prompt = format!(
            "Create a question and provide a concise answer based on the following text:\n\n{text}"
        );

        let content = match self
            .completion
            .complete_with_system(SYSTEM_PROMPT, &prompt, 150)
            .await
        {
            Ok(content) => content,
            Err(e) => {
                warn!(error = %e, "Error generating question and answers");
                return Self::degraded_quiz();
            },
        };

        let Some((question, correct_answer)) = split_question_answer(&content) else {
            warn!("Question response did not contain two newline-separated parts");
            return Self::degraded_quiz();
        };

        let choices = self.generate_choices(&question, &correct_answer).await;

        Quiz {
            question,
            correct_answer,
            choices,
        }
    }

    /// Generate three distractors and shuffle them in with the correct answer
    pub async fn generate_choices(&self, question: &str, correct_answer: &str) -> Vec<String> {
        let prompt = format!(
            "Generate three incorrect but plausible answers for the following question and \
             correct answer:\n\nQuestion: {question}\nCorrect Answer: {correct_answer}\n\n\
             Provide only the three incorrect answers, separated by newlines."
        );

        match self
            .completion
            .complete_with_system(SYSTEM_PROMPT, &prompt, 100)
            .await
        {
            Ok(content) => {
                let incorrect = split_lines(&content);
                assemble_choices(incorrect, correct_answer.to_string())
            },
            Err(e) => {
                warn!(error = %e, "Error generating choices");
                vec![
                    correct_answer.to_string(),
                    CHOICE_PLACEHOLDER.to_string(),
                    CHOICE_PLACEHOLDER.to_string(),
                    CHOICE_PLACEHOLDER.to_string(),
                ]
            },
        }
    }

    /// Summarize the article into bullet points
    pub async fn generate_summarized_notes(&self, text: &str) -> String {
        let prompt = format!("Summarize the following text into concise bullet points:\n\n{text}");

        match self
            .completion
            .complete_with_system(SYSTEM_PROMPT, &prompt, 200)
            .await
        {
            Ok(content) => content.trim().to_string(),
            Err(e) => {
                warn!(error = %e, "Error generating summarized notes");
                NOTES_PLACEHOLDER.to_string()
            },
        }
    }

    /// Create a short story incorporating the article's key concepts
    pub async fn generate_story(&self, text: &str) -> String {
        let prompt = format!(
            "Create a short, engaging story that incorporates the key concepts from the \
             following text:\n\n{text}"
        );

        match self
            .completion
            .complete_with_system(SYSTEM_PROMPT, &prompt, 300)
            .await
        {
            Ok(content) => content.trim().to_string(),
            Err(e) => {
                warn!(error = %e, "Error generating story");
                STORY_PLACEHOLDER.to_string()
            },
        }
    }

    /// Generate one illustrative image and return its URL
    ///
    /// Any failure degrades to an empty string; the caller cannot tell a
    /// failed generation apart from an empty URL.
    pub async fn generate_image(&self, prompt: &str) -> String {
        match self.image.generate_image(prompt).await {
            Ok(url) => url,
            Err(e) => {
                warn!(error = %e, "Error generating image");
                String::new()
            },
        }
    }

    /// Whether the completion backend is reachable
    pub async fn is_healthy(&self) -> bool {
        self.completion.is_healthy().await
    }

    /// The chat model in use
    pub fn current_model(&self) -> &str {
        self.completion.current_model()
    }

    fn degraded_quiz() -> Quiz {
        Quiz {
            question: QUESTION_PLACEHOLDER.to_string(),
            correct_answer: ANSWER_PLACEHOLDER.to_string(),
            choices: vec![CHOICES_PLACEHOLDER.to_string()],
        }
    }
}

/// Split a response into (question, answer) on the first newline
fn split_question_answer(content: &str) -> Option<(String, String)> {
    let trimmed = content.trim();
    let (question, answer) = trimmed.split_once('\n')?;
    let question = question.trim();
    let answer = answer.trim();
    if question.is_empty() || answer.is_empty() {
        return None;
    }
    Some((question.to_string(), answer.to_string()))
}

/// Split a response into trimmed, non-empty lines
fn split_lines(content: &str) -> Vec<String> {
    content
        .trim()
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect()
}

/// Append the correct answer to the distractors and shuffle the result
fn assemble_choices(mut choices: Vec<String>, correct_answer: String) -> Vec<String> {
    choices.push(correct_answer);
    choices.shuffle(&mut rand::rng());
    choices
}
