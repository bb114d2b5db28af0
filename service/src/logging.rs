use crate::config::Config;
use log::{LevelFilter, SetLoggerError};
use simplelog::{self, ConfigBuilder};

/// Module path prefixes silenced unless the level is Trace.
/// Matching is by prefix, so `hyper` also covers `hyper_util`.
const QUIET_MODULES: &[&str] = &["reqwest", "hyper", "h2", "rustls", "tower_http", "axum", "mio"];

pub struct Logger {}

impl Logger {
    /// Installs a terminal logger at the level named by `config.log_level_filter`.
    ///
    /// Output from the HTTP client and server stacks is dropped unless tracing,
    /// so the request/transcript lifecycle stays readable at Debug.
    pub fn init_logger(config: &Config) -> Result<(), SetLoggerError> {
        let level = Self::to_simplelog_level(config.log_level_filter);
        let log_config = Self::build_log_config(Self::quiet_dependencies(config.log_level_filter));

        simplelog::TermLogger::init(
            level,
            log_config,
            simplelog::TerminalMode::Mixed,
            simplelog::ColorChoice::Auto,
        )
    }

    fn to_simplelog_level(level: LevelFilter) -> simplelog::LevelFilter {
        match level {
            LevelFilter::Off => simplelog::LevelFilter::Off,
            LevelFilter::Error => simplelog::LevelFilter::Error,
            LevelFilter::Warn => simplelog::LevelFilter::Warn,
            LevelFilter::Info => simplelog::LevelFilter::Info,
            LevelFilter::Debug => simplelog::LevelFilter::Debug,
            LevelFilter::Trace => simplelog::LevelFilter::Trace,
        }
    }

    fn quiet_dependencies(level: LevelFilter) -> bool {
        level != LevelFilter::Trace
    }

    fn build_log_config(quiet: bool) -> simplelog::Config {
        let mut builder = ConfigBuilder::new();
        builder.set_time_format_rfc3339();

        if quiet {
            for module in QUIET_MODULES {
                builder.add_filter_ignore_str(module);
            }
        }

        builder.build()
    }
}
