//! Domain layer of the transcript service.
//!
//! Holds everything that is independent of HTTP: turning a user supplied URL into a
//! video identifier, asking a transcript `Provider` for that video's segments and
//! assembling them into a single text. The concrete YouTube provider lives under
//! `gateway`.
pub use transcript_source::{Error as TranscriptSourceError, Provider, Segment};

pub mod error;
pub mod transcript;
pub mod video_id;

pub mod gateway;

#[cfg(feature = "mock")]
pub use transcript_source::MockProvider;
