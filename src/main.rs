use std::sync::Arc;

use domain::gateway::youtube::YouTubeClient;
use log::*;
use service::{config::Config, logging::Logger};
use web::AppState;

#[tokio::main]
async fn main() {
    let config = Config::new();

    if let Err(e) = Logger::init_logger(&config) {
        eprintln!("Failed to start logger: {e}");
    }

    info!("Starting up YouTube Transcript API...");

    let youtube_client = match YouTubeClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build YouTube client: {e}");
            std::process::exit(1);
        }
    };

    let app_state = AppState::new(config, Arc::new(youtube_client));

    if let Err(e) = web::init_server(app_state).await {
        error!("Server stopped: {e}");
        std::process::exit(1);
    }
}
