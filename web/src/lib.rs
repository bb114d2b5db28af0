use std::sync::Arc;

use axum::http::{header::CONTENT_TYPE, HeaderValue, Method};
use domain::Provider;
use log::*;
use service::config::Config;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, CorsLayer};

mod controller;
mod error;
mod params;
mod response;
pub mod router;

pub use error::{Error, Result};

/// State shared by every request handler.
///
/// Constructed once at startup; the transcript provider is injected so tests can
/// substitute a double for the real YouTube client.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    transcript_provider: Arc<dyn Provider>,
}

impl AppState {
    pub fn new(config: Config, transcript_provider: Arc<dyn Provider>) -> Self {
        Self {
            config,
            transcript_provider,
        }
    }

    pub fn transcript_provider(&self) -> &dyn Provider {
        self.transcript_provider.as_ref()
    }
}

pub async fn init_server(app_state: AppState) -> std::io::Result<()> {
    let listen_addr = app_state.config.listen_addr();
    let cors_layer = cors_layer(&app_state.config);

    let listener = TcpListener::bind(&listen_addr).await?;
    info!("Server starting... listening for connections on http://{listen_addr}");

    axum::serve(listener, router::define_routes(app_state).layer(cors_layer)).await
}

fn cors_layer(config: &Config) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {origin}");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE])
}
