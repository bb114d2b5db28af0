//! Transcript source abstraction layer.
//!
//! This crate provides the trait-based seam between the HTTP service and whatever
//! subsystem actually retrieves caption data for a video:
//! - A `Provider` trait keyed by video identifier
//! - The `Segment` type every provider returns
//! - A single `Error` enum covering every way retrieval can fail
//!
//! The design is provider-agnostic so the service can be exercised against a
//! test double (see the `mock` feature) without touching the network.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used types
pub use error::Error;
pub use traits::transcript::Provider;
pub use types::transcript::Segment;

#[cfg(feature = "mock")]
pub use traits::transcript::MockProvider;
