//! Domain entities
//!
//! All entities are transient, request-scoped values. Nothing persists
//! across requests and no entity has an identity beyond one call.

mod study_bundle;
mod transcription;

pub use study_bundle::{Flashcard, Quiz, StudyBundle};
pub use transcription::Transcription;
