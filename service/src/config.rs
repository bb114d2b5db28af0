use clap::builder::TypedValueParser as _;
use clap::Parser;
use dotenvy::dotenv;
use log::LevelFilter;

/// Default base URL of the YouTube site, used when `YOUTUBE_BASE_URL` is not set.
pub const DEFAULT_YOUTUBE_BASE_URL: &str = "https://www.youtube.com";

#[derive(Clone, Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// A list of full CORS origin URLs that allowed to receive server responses.
    #[arg(
        long,
        env,
        value_delimiter = ',',
        use_value_delimiter = true,
        default_value = "http://localhost:3000,https://localhost:3000"
    )]
    pub allowed_origins: Vec<String>,

    /// The base URL of the YouTube site to fetch caption tracks from.
    /// Override in tests to point at a mock server.
    #[arg(long, env, default_value = DEFAULT_YOUTUBE_BASE_URL)]
    youtube_base_url: String,

    /// Language codes to look for, in order of preference, when picking a caption track.
    #[arg(
        long,
        env,
        value_delimiter = ',',
        use_value_delimiter = true,
        default_value = "en"
    )]
    transcript_languages: Vec<String>,

    /// The host interface to listen for incoming connections
    #[arg(short, long, env, default_value = "0.0.0.0")]
    pub interface: Option<String>,

    /// The host TCP port to listen for incoming connections
    #[arg(short, long, env, default_value_t = 8080)]
    pub port: u16,

    /// Set the log level verbosity threshold (level) to control what gets displayed on console output
    #[arg(
        short,
        long,
        env,
        default_value_t = LevelFilter::Info,
        value_parser = clap::builder::PossibleValuesParser::new(["OFF", "ERROR", "WARN", "INFO", "DEBUG", "TRACE"])
            .map(|s| s.parse::<LevelFilter>().unwrap()),
        )]
    pub log_level_filter: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn new() -> Self {
        // Load .env file first
        dotenv().ok();
        // Then parse the command line parameters and flags
        Config::parse()
    }

    /// Returns the `interface:port` pair the server binds to.
    pub fn listen_addr(&self) -> String {
        format!(
            "{}:{}",
            self.interface.as_deref().unwrap_or("0.0.0.0"),
            self.port
        )
    }

    /// Returns the YouTube base URL without a trailing slash.
    pub fn youtube_base_url(&self) -> &str {
        self.youtube_base_url.trim_end_matches('/')
    }

    /// Returns the preferred transcript language codes, most preferred first.
    pub fn transcript_languages(&self) -> &[String] {
        &self.transcript_languages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Config {
        let mut argv = vec!["yt_transcript_api"];
        argv.extend_from_slice(args);
        Config::parse_from(argv)
    }

    #[test]
    fn test_explicit_flags_override_defaults() {
        let config = parse(&[
            "--interface",
            "127.0.0.1",
            "--port",
            "3001",
            "--transcript-languages",
            "de,en",
            "--youtube-base-url",
            "http://127.0.0.1:1234/",
        ]);

        assert_eq!(config.listen_addr(), "127.0.0.1:3001");
        assert_eq!(config.transcript_languages(), ["de", "en"]);
        assert_eq!(config.youtube_base_url(), "http://127.0.0.1:1234");
    }

    #[test]
    fn test_log_level_filter_accepts_uppercase_names() {
        let config = parse(&["--log-level-filter", "DEBUG"]);
        assert_eq!(config.log_level_filter, LevelFilter::Debug);
    }
}
