//! HTTP request handlers

pub mod content;
pub mod health;
pub mod pages;
pub mod transcribe;
