//! This module holds typed parameters for endpoint inputs.
//!
//! Request bodies are decoded into these types before any domain logic runs, so
//! handlers only ever see well-formed input.

pub(crate) mod transcript;
