//! Typed bodies returned by the endpoints.

pub(crate) mod error;
pub(crate) mod transcript;
