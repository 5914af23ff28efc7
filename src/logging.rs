//! Logging setup.
//!
//! All modules log through the `log` facade; this installs `env_logger` as the
//! backend. Precedence for the active filter: `--log-level` flag, then
//! `RUST_LOG`, then the config file's `log_level`.

use crate::config::LogLevel;

/// Where the active log filter came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogFilter {
    /// A single level for every module.
    Level(LogLevel),
    /// A `RUST_LOG`-style directive string.
    Directives(String),
}

/// Pick the active filter. `rust_log` is the value of `RUST_LOG`, if set.
pub fn resolve_filter(
    cli_level: Option<LogLevel>,
    rust_log: Option<String>,
    config_level: LogLevel,
) -> LogFilter {
    if let Some(level) = cli_level {
        return LogFilter::Level(level);
    }
    match rust_log {
        Some(spec) if !spec.trim().is_empty() => LogFilter::Directives(spec),
        _ => LogFilter::Level(config_level),
    }
}

/// Install the global logger. Calling this more than once is harmless.
pub fn init(cli_level: Option<LogLevel>, config_level: LogLevel) {
    let filter = resolve_filter(cli_level, std::env::var("RUST_LOG").ok(), config_level);

    let mut builder = env_logger::Builder::new();
    match &filter {
        LogFilter::Level(level) => {
            builder.filter_level(level.to_level_filter());
        }
        LogFilter::Directives(spec) => {
            builder.parse_filters(spec);
        }
    }
    builder.format_timestamp_millis();

    if builder.try_init().is_err() {
        log::debug!("Logger already initialized, keeping existing one");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_level_wins() {
        let filter = resolve_filter(
            Some(LogLevel::Trace),
            Some("warn".to_string()),
            LogLevel::Error,
        );
        assert_eq!(filter, LogFilter::Level(LogLevel::Trace));
    }

    #[test]
    fn test_rust_log_beats_config() {
        let filter = resolve_filter(None, Some("unistyle=debug".to_string()), LogLevel::Error);
        assert_eq!(filter, LogFilter::Directives("unistyle=debug".to_string()));
    }

    #[test]
    fn test_config_level_is_fallback() {
        assert_eq!(
            resolve_filter(None, None, LogLevel::Warn),
            LogFilter::Level(LogLevel::Warn)
        );
        assert_eq!(
            resolve_filter(None, Some("  ".to_string()), LogLevel::Warn),
            LogFilter::Level(LogLevel::Warn)
        );
    }
}
