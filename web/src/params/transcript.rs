use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::Error;

/// Body of a transcript request
#[derive(Debug, Deserialize, ToSchema)]
pub struct TranscriptParams {
    /// A YouTube video URL (watch, short link, embed or nested path form)
    #[schema(example = "https://www.youtube.com/watch?v=dQw4w9WgXcQ")]
    pub url: String,
}

impl TranscriptParams {
    /// Decodes a raw request body. The Content-Type header is not consulted.
    ///
    /// Anything other than a JSON object with a string `url` field is rejected
    /// with `Error::MalformedInput`; unknown fields are ignored.
    pub fn from_body(body: &[u8]) -> Result<Self, Error> {
        let value: Value =
            serde_json::from_slice(body).map_err(|e| Error::MalformedInput(e.to_string()))?;
        // Derived struct deserialization would also accept a one-element array
        if !value.is_object() {
            return Err(Error::MalformedInput(
                "request body is not a JSON object".to_string(),
            ));
        }
        serde_json::from_value(value).map_err(|e| Error::MalformedInput(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_body_reads_url() {
        let params =
            TranscriptParams::from_body(br#"{"url": "https://youtu.be/dQw4w9WgXcQ"}"#).unwrap();
        assert_eq!(params.url, "https://youtu.be/dQw4w9WgXcQ");
    }

    #[test]
    fn test_from_body_ignores_unknown_fields() {
        let params = TranscriptParams::from_body(br#"{"url": "x", "lang": "en"}"#).unwrap();
        assert_eq!(params.url, "x");
    }

    #[test]
    fn test_from_body_keeps_empty_url() {
        // An empty string is a URL without an identifier, not a missing URL
        let params = TranscriptParams::from_body(br#"{"url": ""}"#).unwrap();
        assert_eq!(params.url, "");
    }

    #[test]
    fn test_from_body_rejects_malformed_bodies() {
        let bodies: [&[u8]; 7] = [
            b"",
            b"not json",
            b"{}",
            b"null",
            b"[\"https://youtu.be/dQw4w9WgXcQ\"]",
            br#"{"url": 42}"#,
            br#"{"url": null}"#,
        ];

        for body in bodies {
            assert!(
                matches!(
                    TranscriptParams::from_body(body),
                    Err(Error::MalformedInput(_))
                ),
                "{:?} should be rejected",
                String::from_utf8_lossy(body)
            );
        }
    }
}
