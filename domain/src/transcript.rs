use crate::error::Error;
use crate::video_id;
use log::*;
use transcript_source::{Provider, Segment};

/// Resolves `url` to a video identifier, fetches its transcript from `provider` and
/// returns the segment texts joined into one string.
///
/// Fails with `InternalErrorKind::InvalidVideoUrl` when no identifier can be found,
/// in which case `provider` is never called. Any provider failure is returned as
/// `ExternalErrorKind::Transcript` carrying the provider's message.
pub async fn fetch_by_url(provider: &dyn Provider, url: &str) -> Result<String, Error> {
    let video_id = video_id::extract(url).ok_or_else(|| {
        debug!("No video id found in URL: {url}");
        Error::invalid_video_url()
    })?;

    debug!("Fetching transcript for video: {video_id}");
    let segments = provider.fetch_transcript(video_id.as_str()).await?;
    info!(
        "Fetched {} transcript segments for video: {video_id}",
        segments.len()
    );

    Ok(assemble(&segments))
}

/// Joins segment texts with a single space, keeping the provider's order.
pub fn assemble(segments: &[Segment]) -> String {
    segments
        .iter()
        .map(|segment| segment.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{DomainErrorKind, ExternalErrorKind, InternalErrorKind};
    use transcript_source::MockProvider;

    fn segments(texts: &[&str]) -> Vec<Segment> {
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| Segment::new(*text, i as f64, 1.0))
            .collect()
    }

    #[test]
    fn test_assemble_joins_with_single_spaces_in_order() {
        assert_eq!(assemble(&segments(&["Hello", "world", "!"])), "Hello world !");
    }

    #[test]
    fn test_assemble_empty_transcript() {
        assert_eq!(assemble(&[]), "");
    }

    #[test]
    fn test_assemble_keeps_segment_text_untouched() {
        assert_eq!(
            assemble(&segments(&["line one\nline two", " padded "])),
            "line one\nline two  padded "
        );
    }

    #[tokio::test]
    async fn test_fetch_by_url_passes_extracted_id_to_provider() {
        let mut provider = MockProvider::new();
        provider
            .expect_fetch_transcript()
            .withf(|video_id| video_id == "dQw4w9WgXcQ")
            .times(1)
            .returning(|_| Ok(segments(&["Never", "gonna", "give", "you", "up"])));

        let transcript = fetch_by_url(&provider, "https://youtu.be/dQw4w9WgXcQ")
            .await
            .unwrap();

        assert_eq!(transcript, "Never gonna give you up");
    }

    #[tokio::test]
    async fn test_fetch_by_url_rejects_invalid_url_without_calling_provider() {
        let mut provider = MockProvider::new();
        provider.expect_fetch_transcript().never();

        let err = fetch_by_url(&provider, "https://example.com/video")
            .await
            .unwrap_err();

        assert_eq!(
            err.error_kind,
            DomainErrorKind::Internal(InternalErrorKind::InvalidVideoUrl)
        );
    }

    #[tokio::test]
    async fn test_fetch_by_url_surfaces_provider_message() {
        let mut provider = MockProvider::new();
        provider.expect_fetch_transcript().times(1).returning(|video_id| {
            Err(transcript_source::Error::VideoUnavailable {
                video_id: video_id.to_string(),
            })
        });

        let err = fetch_by_url(&provider, "https://www.youtube.com/watch?v=dQw4w9WgXcQ")
            .await
            .unwrap_err();

        let expected = transcript_source::Error::VideoUnavailable {
            video_id: "dQw4w9WgXcQ".to_string(),
        }
        .to_string();
        assert_eq!(
            err.error_kind,
            DomainErrorKind::External(ExternalErrorKind::Transcript(expected))
        );
    }
}
