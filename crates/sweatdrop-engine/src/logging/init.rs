use std::sync::Once;

/// Environment variable checked before `RUST_LOG`.
pub const LOG_ENV_VAR: &str = "SWEATDROP_LOG";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "sweatdrop_gen=trace"). When unset, `SWEATDROP_LOG` and then `RUST_LOG`
/// are consulted before falling back to `default_level`.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub default_level: log::LevelFilter,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            default_level: log::LevelFilter::Info,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Resolves the filter string that will be applied, if any.
    ///
    /// A blank result means "use `default_level`".
    fn resolve_filter(&self) -> Option<String> {
        self.env_filter
            .clone()
            .or_else(|| std::env::var(LOG_ENV_VAR).ok())
            .or_else(|| std::env::var("RUST_LOG").ok())
            .filter(|f| !f.trim().is_empty())
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// Idempotent; subsequent calls are ignored. Call early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match config.resolve_filter() {
            Some(filter) => {
                builder.parse_filters(&filter);
            }
            None => {
                builder.filter_level(config.default_level);
            }
        }

        builder.write_style(config.write_style);
        builder.format_timestamp_millis();

        // A logger installed by a host or test harness wins.
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}
