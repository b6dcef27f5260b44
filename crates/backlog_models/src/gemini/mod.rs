//! Google Gemini transport.
//!
//! Requests go to the REST `generateContent` endpoint through `gemini-rust`.
//! A client is built per call from the key passed in, so nothing about the
//! credential outlives the call.

mod generator;

pub use generator::GeminiGenerator;
