use std::sync::Once;

/// Level used when neither the config nor `RUST_LOG` names a filter.
const FALLBACK_FILTER: &str = "warn";

/// Settings for the process-wide logger installed by [`init_logging`].
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter string such as `"backdrop_kit=trace"`.
    /// Takes priority over `RUST_LOG` when set.
    pub env_filter: Option<String>,
    /// Whether log lines carry terminal colors.
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

static INIT: Once = Once::new();

/// Installs an `env_logger` backend for the `log` calls in backdrop.
///
/// Only the first call in a process does anything. A logger installed by the
/// host beforehand is left in place.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = pick_filter(config.env_filter, std::env::var("RUST_LOG").ok());

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter).write_style(config.write_style);

        match builder.try_init() {
            Ok(()) => log::debug!("logger installed with filter {filter:?}"),
            Err(_) => log::debug!("host logger already installed"),
        }
    });
}

fn pick_filter(configured: Option<String>, from_env: Option<String>) -> String {
    configured
        .or(from_env)
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| FALLBACK_FILTER.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configured_filter_beats_environment() {
        let filter = pick_filter(Some("backdrop_kit=trace".into()), Some("info".into()));
        assert_eq!(filter, "backdrop_kit=trace");
    }

    #[test]
    fn environment_is_used_without_config() {
        assert_eq!(pick_filter(None, Some("debug".into())), "debug");
    }

    #[test]
    fn blank_or_missing_filter_falls_back_to_warn() {
        assert_eq!(pick_filter(None, None), FALLBACK_FILTER);
        assert_eq!(pick_filter(None, Some("  ".into())), FALLBACK_FILTER);
    }
}
