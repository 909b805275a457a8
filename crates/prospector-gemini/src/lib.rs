//! Typed client for the Gemini `generateContent` endpoint.
//!
//! Prospector uses Gemini as its search service: one natural-language prompt
//! goes in (optionally with the Google Maps grounding tool enabled) and free
//! text comes back. The text is returned as-is; interpreting it is the
//! pipeline's job.

pub mod client;
pub mod error;
pub mod types;

pub use client::GeminiClient;
pub use error::GeminiError;
