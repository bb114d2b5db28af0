//! Error types for the `domain` layer.
use std::error::Error as StdError;
use std::fmt;

/// Top-level domain error type.
/// Errors in the Domain layer are modeled as a tree of `error_kind` enums below
/// `domain::error::Error`, with `source` holding the lower-layer error that caused
/// it. `web` depends on `domain` but never directly on `transcript_source` or
/// `reqwest`; it only inspects `error_kind` to pick a status code and message.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: DomainErrorKind,
}

/// Enum representing the major categories of errors that can occur in the `domain` layer.
#[derive(Debug, PartialEq)]
pub enum DomainErrorKind {
    Internal(InternalErrorKind),
    External(ExternalErrorKind),
}

/// Errors that originate inside this service.
#[derive(Debug, PartialEq)]
pub enum InternalErrorKind {
    /// No video identifier could be found in the supplied URL.
    InvalidVideoUrl,
    /// The HTTP client for the transcript source could not be built.
    Config,
}

/// Errors reported by, or while talking to, the transcript source.
#[derive(Debug, PartialEq)]
pub enum ExternalErrorKind {
    /// The transcript source failed; holds its description verbatim.
    Transcript(String),
}

impl Error {
    pub fn invalid_video_url() -> Self {
        Error {
            source: None,
            error_kind: DomainErrorKind::Internal(InternalErrorKind::InvalidVideoUrl),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            DomainErrorKind::External(ExternalErrorKind::Transcript(msg)) => write!(f, "{msg}"),
            DomainErrorKind::Internal(InternalErrorKind::InvalidVideoUrl) => {
                write!(f, "Invalid YouTube URL")
            }
            _ => match &self.source {
                Some(source) => write!(f, "{source}"),
                None => write!(f, "Domain Error: {:?}", self.error_kind),
            },
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

// This is where collaborator failures cross into the `domain` layer. All variants
// map onto the same `Transcript` kind, keeping the collaborator's message.
impl From<transcript_source::Error> for Error {
    fn from(err: transcript_source::Error) -> Self {
        Error {
            error_kind: DomainErrorKind::External(ExternalErrorKind::Transcript(err.to_string())),
            source: Some(Box::new(err)),
        }
    }
}

// reqwest errors only reach this layer while building the client. Failed requests
// are turned into `transcript_source::Error` inside the gateway.
impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error {
            source: Some(Box::new(err)),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Config),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transcript_source_error_message_is_kept_verbatim() {
        let upstream = transcript_source::Error::TranscriptsDisabled {
            video_id: "dQw4w9WgXcQ".to_string(),
        };
        let expected = upstream.to_string();

        let err: Error = upstream.into();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::External(ExternalErrorKind::Transcript(expected.clone()))
        );
        assert_eq!(err.to_string(), expected);
        assert!(err.source().is_some());
    }

    #[test]
    fn test_invalid_video_url() {
        let err = Error::invalid_video_url();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Internal(InternalErrorKind::InvalidVideoUrl)
        );
        assert_eq!(err.to_string(), "Invalid YouTube URL");
    }

    #[test]
    fn test_client_builder_error_is_config() {
        let builder_err = reqwest::Client::builder()
            .user_agent("bad\nagent")
            .build()
            .unwrap_err();

        let err: Error = builder_err.into();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Internal(InternalErrorKind::Config)
        );
        assert!(err.source().is_some());
    }
}
