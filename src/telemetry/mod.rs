use tracing::level_filters::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogConfig;

/// Map a `LOG_LEVEL` value to a filter. Accepts the level names used by
/// Lambda's Python tooling (`WARNING`, `CRITICAL`) as well as tracing's own.
pub fn parse_level(level: &str) -> Option<LevelFilter> {
    let filter = match level.trim().to_ascii_uppercase().as_str() {
        "TRACE" => LevelFilter::TRACE,
        "DEBUG" => LevelFilter::DEBUG,
        "INFO" => LevelFilter::INFO,
        "WARN" | "WARNING" => LevelFilter::WARN,
        "ERROR" | "CRITICAL" | "FATAL" => LevelFilter::ERROR,
        "OFF" | "NONE" => LevelFilter::OFF,
        _ => return None,
    };
    Some(filter)
}

/// `RUST_LOG` per-target directives plus `LOG_LEVEL` as the global level.
/// `LOG_LEVEL` replaces any bare level in `RUST_LOG`; unknown names fall back to `DEBUG`.
pub fn env_filter(config: &LogConfig) -> EnvFilter {
    let level = parse_level(&config.level).unwrap_or(LevelFilter::DEBUG);

    EnvFilter::builder()
        .parse_lossy(config.directives.as_deref().unwrap_or_default())
        .add_directive(level.into())
}

/// Install the process-wide subscriber. Call once, before the runtime loop starts.
pub fn init(config: &LogConfig) {
    tracing_subscriber::registry()
        .with(env_filter(config))
        .with(
            fmt::layer()
                .json()
                // CloudWatch stamps each line on ingestion.
                .without_time()
                .with_target(false)
                .with_current_span(true),
        )
        .init();

    if parse_level(&config.level).is_none() {
        tracing::warn!(log_level = %config.level, "Unrecognised LOG_LEVEL, using DEBUG");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing_subscriber::{Layer, Registry};

    fn max_level(level: &str, directives: Option<&str>) -> Option<LevelFilter> {
        let filter = env_filter(&LogConfig {
            level: level.to_string(),
            directives: directives.map(str::to_string),
        });
        <EnvFilter as Layer<Registry>>::max_level_hint(&filter)
    }

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), Some(LevelFilter::DEBUG));
        assert_eq!(parse_level("info"), Some(LevelFilter::INFO));
        assert_eq!(parse_level("WARNING"), Some(LevelFilter::WARN));
        assert_eq!(parse_level("warn"), Some(LevelFilter::WARN));
        assert_eq!(parse_level("CRITICAL"), Some(LevelFilter::ERROR));
        assert_eq!(parse_level(" error "), Some(LevelFilter::ERROR));
        assert_eq!(parse_level("verbose"), None);
        assert_eq!(parse_level(""), None);
    }

    #[test]
    fn test_env_filter_uses_log_level() {
        assert_eq!(max_level("INFO", None), Some(LevelFilter::INFO));
        assert_eq!(max_level("WARNING", None), Some(LevelFilter::WARN));
        assert_eq!(max_level("verbose", None), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn test_env_filter_adds_rust_log_directives() {
        assert_eq!(
            max_level("WARNING", Some("transcribe_event_consumer=trace")),
            Some(LevelFilter::TRACE)
        );
        assert_eq!(max_level("INFO", Some("aws_config=error")), Some(LevelFilter::INFO));
    }
}
