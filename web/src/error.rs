use std::error::Error as StdError;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::*;

use domain::error::{DomainErrorKind, Error as DomainError, ExternalErrorKind, InternalErrorKind};

use crate::response::error::ErrorResponse;

pub(crate) const NO_URL_PROVIDED: &str = "No URL provided";
pub(crate) const INVALID_YOUTUBE_URL: &str = "Invalid YouTube URL";

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    /// The request body was not a JSON object carrying a string `url`.
    MalformedInput(String),
    Domain(DomainError),
}

impl StdError for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, fmt: &mut std::fmt::Formatter) -> core::result::Result<(), std::fmt::Error> {
        write!(fmt, "{self:?}")
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Error::MalformedInput(detail) => {
                warn!("Rejecting malformed request body: {detail}");
                (StatusCode::BAD_REQUEST, NO_URL_PROVIDED.to_string())
            }
            Error::Domain(err) => match &err.error_kind {
                DomainErrorKind::Internal(InternalErrorKind::InvalidVideoUrl) => {
                    warn!("Rejecting request without a recognizable video URL");
                    (StatusCode::BAD_REQUEST, INVALID_YOUTUBE_URL.to_string())
                }
                DomainErrorKind::External(ExternalErrorKind::Transcript(msg)) => {
                    error!("Transcript retrieval failed: {msg}");
                    (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
                }
                DomainErrorKind::Internal(InternalErrorKind::Config) => {
                    error!("Internal error: {err}");
                    (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
                }
            },
        };

        (status, Json(ErrorResponse { error: message })).into_response()
    }
}

impl<E> From<E> for Error
where
    E: Into<DomainError>,
{
    fn from(err: E) -> Self {
        Self::Domain(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::{json, Value};

    async fn render(err: Error) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&body).unwrap())
    }

    #[tokio::test]
    async fn test_malformed_input_is_bad_request() {
        let (status, body) = render(Error::MalformedInput("EOF".to_string())).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "No URL provided"}));
    }

    #[tokio::test]
    async fn test_invalid_video_url_is_bad_request() {
        let (status, body) = render(DomainError::invalid_video_url().into()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({"error": "Invalid YouTube URL"}));
    }

    #[tokio::test]
    async fn test_transcript_failure_is_internal_error_with_message() {
        let err = DomainError {
            source: None,
            error_kind: DomainErrorKind::External(ExternalErrorKind::Transcript(
                "Subtitles are disabled".to_string(),
            )),
        };

        let (status, body) = render(err.into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "Subtitles are disabled"}));
    }

    #[tokio::test]
    async fn test_config_error_is_internal_error_with_source_message() {
        let err = DomainError {
            source: Some(Box::new(std::io::Error::other("no TLS backend available"))),
            error_kind: DomainErrorKind::Internal(InternalErrorKind::Config),
        };

        let (status, body) = render(err.into()).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({"error": "no TLS backend available"}));
    }
}
