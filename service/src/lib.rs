//! Infrastructure concerns shared by every layer of the service: runtime
//! configuration and logger initialization.

pub mod config;
pub mod logging;
