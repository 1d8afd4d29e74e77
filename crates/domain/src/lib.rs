//! Domain layer for StudyForge
//!
//! Contains the study artifact entities, value objects, and domain errors.
//! This layer knows nothing about providers or transport and defines the
//! ubiquitous language.

pub mod entities;
pub mod errors;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use value_objects::*;
