use std::fmt;
use std::io;
use std::sync::Once;

/// Filter used when neither the config nor `RUST_LOG` provides one.
///
/// Third-party crates stay at info; this program logs at debug so the
/// per-second FPS line is visible.
pub const DEFAULT_FILTER: &str = "info,experiment=debug,experiment_engine=debug";

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "experiment_engine=debug,wgpu=warn").
///
/// `write_style` controls ANSI coloring behavior.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
    pub target: LogTarget,
}

/// Destination stream for log records.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum LogTarget {
    Stdout,
    Stderr,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
            target: LogTarget::Stdout,
        }
    }
}

static INIT: Once = Once::new();

/// Initializes the global logger once.
///
/// This function is idempotent; subsequent calls are ignored.
/// Intended usage is early in `main`.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = resolve_filter(
            config.env_filter.as_deref(),
            std::env::var("RUST_LOG").ok().as_deref(),
        );

        let mut builder = env_logger::Builder::new();
        builder.parse_filters(&filter);
        builder.write_style(config.write_style);
        builder.target(match config.target {
            LogTarget::Stdout => env_logger::Target::Stdout,
            LogTarget::Stderr => env_logger::Target::Stderr,
        });

        builder.format(|buf, record| {
            let ts = buf.timestamp_seconds();
            write_record(buf, ts, record)
        });

        builder.init();

        log::debug!("logging initialized");
    });
}

/// Picks the effective filter string.
///
/// Explicit configuration wins over `RUST_LOG`; blank values are ignored.
fn resolve_filter(configured: Option<&str>, env: Option<&str>) -> String {
    configured
        .filter(|f| !f.trim().is_empty())
        .or_else(|| env.filter(|f| !f.trim().is_empty()))
        .unwrap_or(DEFAULT_FILTER)
        .to_string()
}

/// Writes one log line.
///
/// `timestamp` is UTC, RFC 3339 at second precision:
/// `2026-10-16T12:00:00Z INFO  experiment_engine::device::gpu: created device`
fn write_record<W: io::Write>(
    buf: &mut W,
    timestamp: impl fmt::Display,
    record: &log::Record<'_>,
) -> io::Result<()> {
    writeln!(
        buf,
        "{} {:<5} {}: {}",
        timestamp,
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(level: log::Level, target: &str, args: fmt::Arguments<'_>) -> String {
        let mut out = Vec::new();
        write_record(
            &mut out,
            "2026-10-16T12:00:00Z",
            &log::Record::builder()
                .args(args)
                .level(level)
                .target(target)
                .build(),
        )
        .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn record_line_layout() {
        assert_eq!(
            render(
                log::Level::Info,
                "experiment_engine::device::gpu",
                format_args!("created device")
            ),
            "2026-10-16T12:00:00Z INFO  experiment_engine::device::gpu: created device\n"
        );
    }

    #[test]
    fn level_is_padded_to_five_columns() {
        assert_eq!(
            render(
                log::Level::Debug,
                "experiment_engine::window::runtime",
                format_args!("FPS: {:.1}", 59.94)
            ),
            "2026-10-16T12:00:00Z DEBUG experiment_engine::window::runtime: FPS: 59.9\n"
        );
    }

    #[test]
    fn configured_filter_wins_over_env() {
        assert_eq!(resolve_filter(Some("warn"), Some("trace")), "warn");
    }

    #[test]
    fn env_filter_used_when_not_configured() {
        assert_eq!(resolve_filter(None, Some("wgpu=warn")), "wgpu=warn");
    }

    #[test]
    fn falls_back_to_default() {
        assert_eq!(resolve_filter(None, None), DEFAULT_FILTER);
    }

    #[test]
    fn blank_values_are_ignored() {
        assert_eq!(resolve_filter(Some("  "), Some("")), DEFAULT_FILTER);
        assert_eq!(resolve_filter(Some(""), Some("error")), "error");
    }

    #[test]
    fn default_config_logs_to_stdout() {
        let config = LoggingConfig::default();
        assert!(config.env_filter.is_none());
        assert_eq!(config.target, LogTarget::Stdout);
    }
}
