//! Structured logging setup.
//!
//! The inspector emits `tracing` events (option changes and skipped entries at
//! `debug`, every emitted line at `trace`, sink failures at `warn`). This module
//! installs a `tracing-subscriber` to view them.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: filter directives (default `tenpeek=info,warn`)
//! - `TENPEEK_LOG_FORMAT`: `pretty`, `json` or `compact` (default `pretty`)
//!
//! # Example
//!
//! ```no_run
//! use tenpeek::tracing_support::{init_tracing, TracingConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_tracing(TracingConfig {
//!         filter: "tenpeek=trace".to_string(),
//!         ..TracingConfig::default()
//!     })?;
//!     tenpeek::inspect!(vec![1.0, 2.0, 3.0]);
//!     Ok(())
//! }
//! ```

use anyhow::Result;
#[cfg(feature = "subscriber")]
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Environment variable selecting the log format.
pub const LOG_FORMAT_ENV: &str = "TENPEEK_LOG_FORMAT";

const DEFAULT_FILTER: &str = "tenpeek=info,warn";

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingFormat {
    /// Multi-line human readable output
    Pretty,
    /// One JSON object per event
    Json,
    /// One line per event
    Compact,
}

impl TracingFormat {
    /// Parse a format name; unknown names fall back to [`TracingFormat::Pretty`].
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => TracingFormat::Json,
            "compact" => TracingFormat::Compact,
            _ => TracingFormat::Pretty,
        }
    }
}

/// Subscriber configuration
#[derive(Debug, Clone)]
pub struct TracingConfig {
    pub format: TracingFormat,
    /// Filter directives, e.g. `tenpeek=debug,info`
    pub filter: String,
    pub with_ansi: bool,
    pub with_target: bool,
    pub with_thread_ids: bool,
    pub with_file: bool,
    pub with_line_number: bool,
}

impl TracingConfig {
    /// Build a configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let format = lookup(LOG_FORMAT_ENV)
            .map(|s| TracingFormat::parse(&s))
            .unwrap_or(TracingFormat::Pretty);
        let filter = lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_FILTER.to_string());

        Self {
            format,
            filter,
            with_ansi: true,
            with_target: true,
            with_thread_ids: false,
            with_file: false,
            with_line_number: false,
        }
    }
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }
}

/// Install a global subscriber. Call once at startup.
///
/// Fails if the filter does not parse or a subscriber is already installed.
#[cfg(feature = "subscriber")]
pub fn init_tracing(config: TracingConfig) -> Result<()> {
    let filter = EnvFilter::try_new(&config.filter)?;

    match config.format {
        TracingFormat::Pretty => {
            let layer = fmt::layer()
                .pretty()
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_thread_ids(config.with_thread_ids)
                .with_file(config.with_file)
                .with_line_number(config.with_line_number)
                .with_filter(filter);
            tracing_subscriber::registry().with(layer).try_init()?;
        }
        TracingFormat::Json => {
            let layer = fmt::layer()
                .json()
                .with_target(config.with_target)
                .with_thread_ids(config.with_thread_ids)
                .with_file(config.with_file)
                .with_line_number(config.with_line_number)
                .with_filter(filter);
            tracing_subscriber::registry().with(layer).try_init()?;
        }
        TracingFormat::Compact => {
            let layer = fmt::layer()
                .compact()
                .with_ansi(config.with_ansi)
                .with_target(config.with_target)
                .with_thread_ids(config.with_thread_ids)
                .with_file(config.with_file)
                .with_line_number(config.with_line_number)
                .with_filter(filter);
            tracing_subscriber::registry().with(layer).try_init()?;
        }
    }

    Ok(())
}

/// Stub for when the `subscriber` feature is disabled
#[cfg(not(feature = "subscriber"))]
pub fn init_tracing(_config: TracingConfig) -> Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parse() {
        assert_eq!(TracingFormat::parse("json"), TracingFormat::Json);
        assert_eq!(TracingFormat::parse(" Compact "), TracingFormat::Compact);
        assert_eq!(TracingFormat::parse("pretty"), TracingFormat::Pretty);
        assert_eq!(TracingFormat::parse("fancy"), TracingFormat::Pretty);
    }

    #[test]
    fn test_config_from_lookup() {
        let config = TracingConfig::from_lookup(|key| match key {
            "TENPEEK_LOG_FORMAT" => Some("json".to_string()),
            _ => None,
        });
        assert_eq!(config.format, TracingFormat::Json);
        assert_eq!(config.filter, "tenpeek=info,warn");
        assert!(config.with_ansi);
    }

    #[cfg(feature = "subscriber")]
    #[test]
    fn test_invalid_filter_is_rejected() {
        let config = TracingConfig {
            filter: "tenpeek=loudest".to_string(),
            ..TracingConfig::from_lookup(|_| None)
        };
        assert!(init_tracing(config).is_err());
    }
}
