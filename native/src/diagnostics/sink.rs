//! Destinations for formatted log lines.

use std::io::Write;
use std::sync::{Arc, Mutex};

use super::logging::Severity;

/// Receives one formatted line per call.
pub trait LogSink: Send + Sync {
    fn write(&self, severity: Severity, tag: &str, message: &str);
}

/// Writes to logcat through `android_logger`.
///
/// The tag is fixed when the sink is built; the per-call tag is ignored.
#[cfg(target_os = "android")]
pub struct AndroidLogSink {
    inner: android_logger::AndroidLogger,
}

#[cfg(target_os = "android")]
impl AndroidLogSink {
    pub fn new(tag: &str) -> Self {
        let config = android_logger::Config::default()
            .with_max_level(log::LevelFilter::Trace)
            .with_tag(sanitize_tag(tag));
        Self {
            inner: android_logger::AndroidLogger::new(config),
        }
    }
}

#[cfg(target_os = "android")]
impl LogSink for AndroidLogSink {
    fn write(&self, severity: Severity, _tag: &str, message: &str) {
        use log::Log;
        self.inner.log(
            &log::Record::builder()
                .level(severity.into())
                .args(format_args!("{}", message))
                .build(),
        );
    }
}

/// Host fallback using the logcat brief format, e.g. `D/MyProcessor: RAW width: 4032`.
#[derive(Debug, Default, Clone, Copy)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write(&self, severity: Severity, tag: &str, message: &str) {
        // A closed stderr must not panic inside a JNI call.
        let _ = writeln!(std::io::stderr(), "{}/{}: {}", severity.letter(), tag, message);
    }
}

/// A captured log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub severity: Severity,
    pub tag: String,
    pub message: String,
}

/// Keeps every line in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    lines: Mutex<Vec<LogLine>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the lines written so far, in write order.
    pub fn lines(&self) -> Vec<LogLine> {
        self.lines.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl LogSink for MemorySink {
    fn write(&self, severity: Severity, tag: &str, message: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(LogLine {
                severity,
                tag: tag.to_string(),
                message: message.to_string(),
            });
    }
}

/// The system log on Android, stderr everywhere else.
pub fn default_sink(tag: &str) -> Arc<dyn LogSink> {
    #[cfg(target_os = "android")]
    {
        Arc::new(AndroidLogSink::new(tag))
    }
    #[cfg(not(target_os = "android"))]
    {
        let _ = tag;
        Arc::new(StderrSink)
    }
}

/// Drops interior NUL bytes; `android_logger` rejects tags containing them.
#[cfg_attr(not(target_os = "android"), allow(dead_code))]
pub(crate) fn sanitize_tag(tag: &str) -> String {
    tag.replace('\0', "")
}
