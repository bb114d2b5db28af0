use crate::{
    controller::{health_check_controller, transcript_controller},
    params, response, AppState,
};
use axum::{
    routing::{get, post},
    Router,
};

use utoipa::OpenApi;
use utoipa_rapidoc::RapiDoc;

// This is the global definition of our OpenAPI spec. To be a part
// of the rendered spec, a path and schema must be listed here.
#[derive(OpenApi)]
#[openapi(
        info(
            title = "YouTube Transcript API"
        ),
        paths(
            health_check_controller::health_check,
            transcript_controller::fetch,
        ),
        components(
            schemas(
                params::transcript::TranscriptParams,
                response::transcript::TranscriptResponse,
                response::error::ErrorResponse,
            )
        ),
        tags(
            (name = "yt_transcript_api", description = "Fetch YouTube video transcripts as plain text")
        )
    )]
struct ApiDoc;

pub fn define_routes(app_state: AppState) -> Router {
    Router::new()
        .merge(health_routes())
        .merge(transcript_routes(app_state))
        .merge(RapiDoc::with_openapi("/api-docs/openapi.json", ApiDoc::openapi()).path("/rapidoc"))
}

fn health_routes() -> Router {
    Router::new().route("/", get(health_check_controller::health_check))
}

fn transcript_routes(app_state: AppState) -> Router {
    Router::new()
        .route("/api/transcript", post(transcript_controller::fetch))
        .with_state(app_state)
}
