//! Tracing subscriber setup for the binaries

use crate::config::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter directive for a configured level, e.g. "nourish=debug,tower_http=debug"
pub fn filter_directive(config: &LoggingConfig) -> String {
    format!("nourish={level},tower_http={level}", level = config.level)
}

/// Install the global subscriber
///
/// `RUST_LOG` wins over the configured level. Calling this twice is a
/// no-op for the second call.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| filter_directive(config).into());

    let result = if config.format.eq_ignore_ascii_case("json") {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()
    };

    if let Err(e) = result {
        tracing::debug!("Tracing already initialized: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive() {
        let config = LoggingConfig {
            level: "debug".into(),
            format: "json".into(),
        };
        assert_eq!(filter_directive(&config), "nourish=debug,tower_http=debug");
    }

    #[test]
    fn test_init_twice_is_harmless() {
        let config = LoggingConfig::default();
        init(&config);
        init(&config);
    }
}
