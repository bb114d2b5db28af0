//! Transcript provider trait.

use crate::types::transcript::Segment;
use crate::Error;
use async_trait::async_trait;

/// Abstraction for services that return the caption text of a video.
///
/// Implementations look up the transcript for an already extracted 11-character
/// video identifier and return its segments in the order the source delivers them.
/// Every failure, whatever its cause, is reported through `Error`.
#[cfg_attr(feature = "mock", mockall::automock)]
#[async_trait]
pub trait Provider: Send + Sync {
    /// Retrieve the ordered transcript segments for `video_id`.
    ///
    /// Makes a single attempt; callers decide whether to retry.
    async fn fetch_transcript(&self, video_id: &str) -> std::result::Result<Vec<Segment>, Error>;
}
