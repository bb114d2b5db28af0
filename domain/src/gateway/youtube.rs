//! YouTube transcript client.
//!
//! Lists a video's caption tracks through the Innertube player endpoint, picks one
//! according to the configured language preference and downloads it as a `json3`
//! timed-text document.

use crate::error::Error;
use async_trait::async_trait;
use log::*;
use serde::Deserialize;
use serde_json::json;
use service::config::Config;
use transcript_source::{Error as SourceError, Provider, Segment};

const PLAYER_PATH: &str = "/youtubei/v1/player?prettyPrint=false";
const INNERTUBE_CLIENT_NAME: &str = "ANDROID";
const INNERTUBE_CLIENT_VERSION: &str = "20.10.38";
const USER_AGENT: &str = "com.google.android.youtube/20.10.38 (Linux; U; Android 14) gzip";

/// Caption tracks of this kind are generated by speech recognition.
const GENERATED_TRACK_KIND: &str = "asr";

/// Playability reasons YouTube uses for blocked and age gated requests.
const BOT_CHECK_REASON: &str = "not a bot";
const AGE_CHECK_REASON: &str = "inappropriate for some users";
const UNAVAILABLE_REASON: &str = "This video is unavailable";

/// Subset of the Innertube player response needed to find caption tracks
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PlayerResponse {
    playability_status: Option<PlayabilityStatus>,
    captions: Option<Captions>,
}

#[derive(Debug, Deserialize)]
struct PlayabilityStatus {
    status: String,
    reason: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Captions {
    player_captions_tracklist_renderer: Option<TracklistRenderer>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TracklistRenderer {
    #[serde(default)]
    caption_tracks: Vec<CaptionTrack>,
}

/// One caption track offered for a video
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptionTrack {
    pub base_url: String,
    pub language_code: String,
    /// `asr` for generated tracks, absent for manually created ones
    pub kind: Option<String>,
}

impl CaptionTrack {
    pub fn is_generated(&self) -> bool {
        self.kind.as_deref() == Some(GENERATED_TRACK_KIND)
    }
}

/// `json3` timed-text document
#[derive(Debug, Deserialize)]
struct TimedText {
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimedTextEvent {
    #[serde(default)]
    t_start_ms: u64,
    #[serde(default)]
    d_duration_ms: u64,
    #[serde(default)]
    segs: Vec<TimedTextSeg>,
}

#[derive(Debug, Deserialize)]
struct TimedTextSeg {
    #[serde(default)]
    utf8: String,
}

/// YouTube transcript client
pub struct YouTubeClient {
    client: reqwest::Client,
    base_url: String,
    languages: Vec<String>,
}

impl YouTubeClient {
    /// Create a new YouTube client from the service configuration
    pub fn new(config: &Config) -> Result<Self, Error> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::ACCEPT_LANGUAGE,
            reqwest::header::HeaderValue::from_static("en-US"),
        );

        let client = reqwest::Client::builder()
            .use_rustls_tls()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: config.youtube_base_url().to_string(),
            languages: config.transcript_languages().to_vec(),
        })
    }

    /// List the caption tracks YouTube offers for `video_id`
    pub async fn list_caption_tracks(
        &self,
        video_id: &str,
    ) -> Result<Vec<CaptionTrack>, SourceError> {
        let url = format!("{}{}", self.base_url, PLAYER_PATH);
        let body = json!({
            "context": {
                "client": {
                    "clientName": INNERTUBE_CLIENT_NAME,
                    "clientVersion": INNERTUBE_CLIENT_VERSION,
                }
            },
            "videoId": video_id,
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(network_error)?;
        check_status(&response, video_id)?;

        let player: PlayerResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse YouTube player response: {:?}", e);
            SourceError::Deserialization(format!("Invalid player response from YouTube: {e}"))
        })?;

        check_playability(player.playability_status.as_ref(), video_id)?;

        let tracks = player
            .captions
            .and_then(|captions| captions.player_captions_tracklist_renderer)
            .map(|renderer| renderer.caption_tracks)
            .unwrap_or_default();

        if tracks.is_empty() {
            return Err(SourceError::TranscriptsDisabled {
                video_id: video_id.to_string(),
            });
        }

        debug!("Found {} caption tracks for video: {}", tracks.len(), video_id);
        Ok(tracks)
    }

    /// Download `track` and convert it into ordered segments
    pub async fn fetch_track(
        &self,
        video_id: &str,
        track: &CaptionTrack,
    ) -> Result<Vec<Segment>, SourceError> {
        let url = self.timed_text_url(&track.base_url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(network_error)?;
        check_status(&response, video_id)?;

        let raw = response.text().await.map_err(network_error)?;
        if raw.trim().is_empty() {
            warn!("YouTube returned an empty timed text document for video: {video_id}");
            return Err(SourceError::Deserialization(
                "YouTube returned an empty timed text document".to_string(),
            ));
        }

        let timed_text: TimedText = serde_json::from_str(&raw).map_err(|e| {
            warn!("Failed to parse timed text for video {}: {:?}", video_id, e);
            SourceError::Deserialization(format!("Invalid timed text from YouTube: {e}"))
        })?;

        Ok(into_segments(timed_text))
    }

    /// Rewrites a track URL so it returns the `json3` format.
    fn timed_text_url(&self, base_url: &str) -> String {
        let absolute = if base_url.starts_with('/') {
            format!("{}{}", self.base_url, base_url)
        } else {
            base_url.to_string()
        };
        let stripped = absolute.replace("&fmt=srv3", "");
        let separator = if stripped.contains('?') { '&' } else { '?' };

        format!("{stripped}{separator}fmt=json3")
    }
}

#[async_trait]
impl Provider for YouTubeClient {
    async fn fetch_transcript(&self, video_id: &str) -> Result<Vec<Segment>, SourceError> {
        let tracks = self.list_caption_tracks(video_id).await?;
        let track = select_track(&tracks, &self.languages, video_id)?;

        debug!(
            "Using {} caption track ({}) for video: {}",
            if track.is_generated() { "generated" } else { "manual" },
            track.language_code,
            video_id
        );

        self.fetch_track(video_id, track).await
    }
}

/// Picks the first track matching `languages` in preference order, preferring a
/// manually created track over a generated one for the same language.
pub fn select_track<'a>(
    tracks: &'a [CaptionTrack],
    languages: &[String],
    video_id: &str,
) -> Result<&'a CaptionTrack, SourceError> {
    languages
        .iter()
        .find_map(|language| {
            let in_language = |track: &&CaptionTrack| &track.language_code == language;
            tracks
                .iter()
                .filter(in_language)
                .find(|track| !track.is_generated())
                .or_else(|| tracks.iter().find(in_language))
        })
        .ok_or_else(|| SourceError::NoTranscriptFound {
            video_id: video_id.to_string(),
            requested_languages: languages.to_vec(),
            available_languages: tracks
                .iter()
                .map(|track| track.language_code.clone())
                .collect(),
        })
}

fn check_playability(
    status: Option<&PlayabilityStatus>,
    video_id: &str,
) -> Result<(), SourceError> {
    let Some(status) = status else {
        return Ok(());
    };
    let reason = status.reason.as_deref().unwrap_or_default();
    let video_id = video_id.to_string();

    match status.status.as_str() {
        "OK" => Ok(()),
        "LOGIN_REQUIRED" if reason.contains(BOT_CHECK_REASON) => {
            Err(SourceError::RequestBlocked { video_id })
        }
        "LOGIN_REQUIRED" if reason.contains(AGE_CHECK_REASON) => {
            Err(SourceError::AgeRestricted { video_id })
        }
        "ERROR" if reason == UNAVAILABLE_REASON => Err(SourceError::VideoUnavailable { video_id }),
        other => {
            debug!("Video {} is not playable, status: {}", video_id, other);
            Err(SourceError::VideoUnplayable {
                video_id,
                reason: status.reason.clone(),
            })
        }
    }
}

fn check_status(response: &reqwest::Response, video_id: &str) -> Result<(), SourceError> {
    let status = response.status();
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        warn!("YouTube is rate limiting requests (video: {video_id})");
        return Err(SourceError::RateLimited {
            video_id: video_id.to_string(),
        });
    }
    if !status.is_success() {
        error!("YouTube responded with {} for video: {}", status, video_id);
        return Err(SourceError::Network(format!(
            "YouTube responded with HTTP {status}"
        )));
    }
    Ok(())
}

fn network_error(err: reqwest::Error) -> SourceError {
    warn!("Request to YouTube failed: {:?}", err);
    SourceError::Network(err.to_string())
}

fn into_segments(timed_text: TimedText) -> Vec<Segment> {
    timed_text
        .events
        .into_iter()
        .filter_map(|event| {
            let text: String = event.segs.iter().map(|seg| seg.utf8.as_str()).collect();
            if text.trim().is_empty() {
                return None;
            }
            Some(Segment::new(
                text,
                event.t_start_ms as f64 / 1000.0,
                event.d_duration_ms as f64 / 1000.0,
            ))
        })
        .collect()
}
