use serde::Serialize;
use utoipa::ToSchema;

/// Body returned for a successfully retrieved transcript
#[derive(Debug, Serialize, ToSchema)]
pub struct TranscriptResponse {
    /// All transcript segment texts joined by single spaces
    #[schema(example = "Never gonna give you up Never gonna let you down")]
    pub transcript: String,
}
