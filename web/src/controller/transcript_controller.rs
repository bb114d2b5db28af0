//! Controller for transcript retrieval.

use crate::params::transcript::TranscriptParams;
use crate::response::error::ErrorResponse;
use crate::response::transcript::TranscriptResponse;
use crate::{AppState, Error};

use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use domain::transcript as TranscriptApi;
use log::*;

/// POST /api/transcript
///
/// Fetch the full transcript text for a YouTube video URL.
#[utoipa::path(
    post,
    path = "/api/transcript",
    request_body = TranscriptParams,
    responses(
        (status = 200, description = "Transcript retrieved", body = TranscriptResponse),
        (status = 400, description = "Missing URL or unrecognized YouTube URL", body = ErrorResponse),
        (status = 500, description = "The transcript source failed", body = ErrorResponse),
    )
)]
pub async fn fetch(
    State(app_state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, Error> {
    let params = TranscriptParams::from_body(&body)?;
    debug!("POST transcript for URL: {}", params.url);

    let transcript =
        TranscriptApi::fetch_by_url(app_state.transcript_provider(), &params.url).await?;

    Ok((StatusCode::OK, Json(TranscriptResponse { transcript })))
}
