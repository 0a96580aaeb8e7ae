//! Logging Config
//!
//! Logs are written to stderr so that stdout only ever carries the receipt.

use clap::{Args, ValueEnum};

/// How log events are rendered on stderr.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// One short human-readable line per event.
    Compact,

    /// One JSON object per event, for piping into log tooling.
    Json,
}

/// Logging settings for a pricing run.
#[derive(Debug, Args)]
pub struct LoggingConfig {
    /// Log filter directives; `warn` keeps a normal run quiet apart from data file fallbacks
    #[arg(short, long, env = "RUST_LOG", default_value = "warn")]
    pub log_level: String,

    /// Log event format on stderr
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}
