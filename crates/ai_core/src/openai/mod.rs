//! OpenAI-compatible provider client

mod client;

pub use client::OpenAiClient;
