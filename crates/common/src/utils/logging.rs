//! Subscriber setup for the clinic binary.
//!
//! `RUST_LOG` wins when set. Otherwise record-manager events show at `info`
//! and the SQLite driver's per-statement chatter is held back to `warn`.

use std::io;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable selecting the output format.
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";

const DEFAULT_DIRECTIVES: &str = "info,sqlx=warn";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// One line per event, for a terminal.
    #[default]
    Compact,
    /// One JSON object per event, for log files that get shipped elsewhere.
    Json,
}

impl LogFormat {
    /// `json` (any case) selects JSON; anything else, or nothing, is compact.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Compact,
        }
    }

    pub fn from_env() -> Self { Self::parse(std::env::var(LOG_FORMAT_VAR).ok().as_deref()) }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the global subscriber. A second call is ignored.
pub fn init_logging(format: LogFormat) {
    let builder = fmt().with_env_filter(env_filter()).with_target(false).with_writer(io::stdout);
    let _ = match format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}
