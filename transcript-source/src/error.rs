//! Error types for transcript retrieval.

use std::fmt;

const WATCH_URL: &str = "https://www.youtube.com/watch?v=";

/// Universal error type for everything that can go wrong while retrieving a transcript.
///
/// Video-scoped variants carry the identifier so their display text names the video
/// the caller asked for. The display text is what ends up in the service's error
/// response, so each variant renders a complete, human-readable sentence.
#[derive(Debug)]
pub enum Error {
    /// The video does not exist or has been removed.
    VideoUnavailable { video_id: String },

    /// The video exists but cannot be played (private, region locked, members only, ...).
    /// `reason` is the explanation the upstream returned, when it returned one.
    VideoUnplayable {
        video_id: String,
        reason: Option<String>,
    },

    /// The video is age-restricted and requires a signed-in session.
    AgeRestricted { video_id: String },

    /// The upstream is refusing requests from this host (bot check).
    RequestBlocked { video_id: String },

    /// The video has no caption tracks at all.
    TranscriptsDisabled { video_id: String },

    /// Caption tracks exist, but none in any of the requested languages.
    NoTranscriptFound {
        video_id: String,
        requested_languages: Vec<String>,
        available_languages: Vec<String>,
    },

    /// The upstream answered with HTTP 429.
    RateLimited { video_id: String },

    /// Connection failures, DNS failures, timeouts or unexpected HTTP statuses.
    Network(String),

    /// The upstream answered, but not with the document shape we expected.
    Deserialization(String),
}

impl Error {
    fn cause(&self) -> Option<String> {
        let cause = match self {
            Error::VideoUnavailable { .. } => "The video is no longer available".to_string(),
            Error::VideoUnplayable { reason, .. } => match reason {
                Some(reason) => format!("The video is unplayable for the following reason: {reason}"),
                None => "The video is unplayable for the following reason: No reason specified!"
                    .to_string(),
            },
            Error::AgeRestricted { .. } => {
                "This video is age-restricted. Therefore, you will have to authenticate to be able to retrieve transcripts for it.".to_string()
            }
            Error::RequestBlocked { .. } => {
                "YouTube is blocking requests from your IP. This usually is due to one of the following reasons: you have done too many requests and your IP has been blocked by YouTube, or you are doing requests from an IP belonging to a cloud provider.".to_string()
            }
            Error::TranscriptsDisabled { .. } => "Subtitles are disabled for this video".to_string(),
            Error::NoTranscriptFound {
                requested_languages,
                available_languages,
                ..
            } => format!(
                "No transcripts were found for any of the requested language codes: {:?}. Available language codes: {:?}",
                requested_languages, available_languages
            ),
            Error::RateLimited { .. } => {
                "YouTube is receiving too many requests from this IP and now requires solving a captcha to continue".to_string()
            }
            Error::Network(_) | Error::Deserialization(_) => return None,
        };
        Some(cause)
    }

    /// The identifier of the video the failure relates to, if it is video-scoped.
    pub fn video_id(&self) -> Option<&str> {
        match self {
            Error::VideoUnavailable { video_id }
            | Error::VideoUnplayable { video_id, .. }
            | Error::AgeRestricted { video_id }
            | Error::RequestBlocked { video_id }
            | Error::TranscriptsDisabled { video_id }
            | Error::NoTranscriptFound { video_id, .. }
            | Error::RateLimited { video_id } => Some(video_id),
            Error::Network(_) | Error::Deserialization(_) => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let (Some(video_id), Some(cause)) = (self.video_id(), self.cause()) {
            return write!(
                f,
                "Could not retrieve a transcript for the video {WATCH_URL}{video_id}! This is most likely caused by: {cause}"
            );
        }
        match self {
            Error::Network(msg) => write!(f, "Network error: {}", msg),
            Error::Deserialization(msg) => write!(f, "Deserialization error: {}", msg),
            // Every video-scoped variant has a cause and is handled above
            _ => write!(f, "Could not retrieve a transcript"),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_scoped_errors_name_the_watch_url() {
        let err = Error::TranscriptsDisabled {
            video_id: "dQw4w9WgXcQ".to_string(),
        };

        assert_eq!(
            err.to_string(),
            "Could not retrieve a transcript for the video https://www.youtube.com/watch?v=dQw4w9WgXcQ! \
             This is most likely caused by: Subtitles are disabled for this video"
        );
    }

    #[test]
    fn test_no_transcript_found_lists_languages() {
        let err = Error::NoTranscriptFound {
            video_id: "dQw4w9WgXcQ".to_string(),
            requested_languages: vec!["en".to_string()],
            available_languages: vec!["de".to_string(), "fr".to_string()],
        };

        let msg = err.to_string();
        assert!(msg.contains(r#"requested language codes: ["en"]"#));
        assert!(msg.contains(r#"Available language codes: ["de", "fr"]"#));
    }

    #[test]
    fn test_unplayable_without_reason() {
        let err = Error::VideoUnplayable {
            video_id: "dQw4w9WgXcQ".to_string(),
            reason: None,
        };

        assert!(err.to_string().ends_with("No reason specified!"));
    }

    #[test]
    fn test_network_error_is_not_video_scoped() {
        let err = Error::Network("connection refused".to_string());

        assert_eq!(err.video_id(), None);
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn test_deserialization_error_is_not_video_scoped() {
        let err = Error::Deserialization("missing field `events`".to_string());

        assert_eq!(err.video_id(), None);
        assert_eq!(
            err.to_string(),
            "Deserialization error: missing field `events`"
        );
    }
}
