// src/logging.rs

use std::env;
use tracing_subscriber::{fmt, EnvFilter};

/// `RUST_LOG` when it is set and parses, otherwise `fallback`.
pub fn log_filter(rust_log: Option<&str>, fallback: &str) -> EnvFilter {
    rust_log
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(fallback))
}

/// Install the stderr subscriber for the binary.
pub fn init(fallback: &str) {
    let rust_log = env::var(EnvFilter::DEFAULT_ENV).ok();
    fmt()
        .with_env_filter(log_filter(rust_log.as_deref(), fallback))
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::level_filters::LevelFilter;

    #[test]
    fn rust_log_wins_over_configured_level() {
        let filter = log_filter(Some("debug"), "info");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    fn configured_level_when_rust_log_unset() {
        let filter = log_filter(None, "warn");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::WARN));
    }

    #[test]
    fn blank_rust_log_falls_back() {
        let filter = log_filter(Some("  "), "error");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
    }
}
