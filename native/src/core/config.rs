//! Logging configuration read from the process environment.

use log::LevelFilter;

/// Tag attached to every line the processor writes.
pub const DEFAULT_TAG: &str = "MyProcessor";

/// Tag of the `NativeRawProcessor` entry points.
pub const RAW_PIPELINE_TAG: &str = "RustNative";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub tag: String,
    /// Max level for `log::*!` records. Direct `Logger` calls are not filtered.
    pub max_level: LevelFilter,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            tag: DEFAULT_TAG.to_string(),
            max_level: LevelFilter::Debug,
        }
    }
}

impl LoggingConfig {
    pub fn from_env() -> Self {
        Self {
            max_level: parse_level(std::env::var("RUST_LOG").ok().as_deref()),
            ..Self::default()
        }
    }
}

fn parse_level(value: Option<&str>) -> LevelFilter {
    match value {
        Some("off") => LevelFilter::Off,
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        _ => LevelFilter::Debug,
    }
}
