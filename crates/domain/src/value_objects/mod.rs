//! Value objects for the study domain

mod artifact_kind;

pub use artifact_kind::ArtifactKind;
