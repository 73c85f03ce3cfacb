//! # Tagged Logging Facade
//!
//! A [`Logger`] pairs a tag with a [`LogSink`] and is handed to call sites by
//! reference. The `log_info!`, `log_warn!`, `log_error!` and `log_debug!`
//! macros format their arguments and forward one line per call to the sink.
//!
//! `Logger` also implements [`log::Log`], so the process-wide instance
//! installed by [`init`] receives every `log::*!` record emitted by the crate.

use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;
use std::fmt;
use std::sync::{Arc, Once, OnceLock};

use super::sink::{default_sink, LogSink};
use crate::core::config::{LoggingConfig, RAW_PIPELINE_TAG};

/// Severity attached to every emitted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Info,
    Warn,
    Error,
    Debug,
}

impl Severity {
    pub const ALL: [Severity; 4] = [Severity::Info, Severity::Warn, Severity::Error, Severity::Debug];

    /// Android log priority (`ANDROID_LOG_DEBUG` .. `ANDROID_LOG_ERROR`).
    pub const fn android_priority(self) -> i32 {
        match self {
            Severity::Debug => 3,
            Severity::Info => 4,
            Severity::Warn => 5,
            Severity::Error => 6,
        }
    }

    /// Single-letter logcat marker.
    pub const fn letter(self) -> char {
        match self {
            Severity::Info => 'I',
            Severity::Warn => 'W',
            Severity::Error => 'E',
            Severity::Debug => 'D',
        }
    }
}

impl From<Level> for Severity {
    fn from(level: Level) -> Self {
        match level {
            Level::Error => Severity::Error,
            Level::Warn => Severity::Warn,
            Level::Info => Severity::Info,
            Level::Debug | Level::Trace => Severity::Debug,
        }
    }
}

impl From<Severity> for Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Info => Level::Info,
            Severity::Warn => Level::Warn,
            Severity::Error => Level::Error,
            Severity::Debug => Level::Debug,
        }
    }
}

/// A tag bound to a sink.
#[derive(Clone)]
pub struct Logger {
    tag: Arc<str>,
    sink: Arc<dyn LogSink>,
}

impl Logger {
    pub fn new(tag: impl Into<Arc<str>>, sink: Arc<dyn LogSink>) -> Self {
        Self {
            tag: tag.into(),
            sink,
        }
    }

    /// Logger writing to the platform system log.
    pub fn platform(tag: impl Into<Arc<str>>) -> Self {
        let tag = tag.into();
        let sink = default_sink(&tag);
        Self { tag, sink }
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Formats `args` and writes exactly one line at `severity`.
    pub fn write(&self, severity: Severity, args: fmt::Arguments<'_>) {
        let message = args.to_string();
        self.sink.write(severity, &self.tag, &message);
    }

    pub fn info(&self, args: fmt::Arguments<'_>) {
        self.write(Severity::Info, args);
    }

    pub fn warn(&self, args: fmt::Arguments<'_>) {
        self.write(Severity::Warn, args);
    }

    pub fn error(&self, args: fmt::Arguments<'_>) {
        self.write(Severity::Error, args);
    }

    pub fn debug(&self, args: fmt::Arguments<'_>) {
        self.write(Severity::Debug, args);
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger").field("tag", &self.tag).finish_non_exhaustive()
    }
}

impl Log for Logger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        // `init` sets the global max level; the log macros check it first.
        true
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.write(Severity::from(record.level()), *record.args());
        }
    }

    fn flush(&self) {}
}

#[macro_export]
macro_rules! log_info {
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_error {
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(::std::format_args!($($arg)+))
    };
}

#[macro_export]
macro_rules! log_debug {
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(::std::format_args!($($arg)+))
    };
}

static GLOBAL_LOGGER: OnceLock<Logger> = OnceLock::new();

static RAW_PIPELINE_LOGGER: Lazy<Logger> = Lazy::new(|| Logger::platform(RAW_PIPELINE_TAG));

/// Returns the process-wide platform logger, creating it on first use.
pub fn logger() -> &'static Logger {
    GLOBAL_LOGGER.get_or_init(|| Logger::platform(LoggingConfig::from_env().tag))
}

/// Logger for the `NativeRawProcessor` entry points.
pub fn raw_pipeline_logger() -> &'static Logger {
    &RAW_PIPELINE_LOGGER
}

static INSTALL: Once = Once::new();

/// Installs the process-wide logger as the `log` crate backend.
///
/// Idempotent; every JNI entry path may call it.
pub fn init() {
    install(logger(), LoggingConfig::from_env().max_level);
}

/// Makes `backend` the `log` crate backend at `max_level`. Only the first
/// call in a process has any effect.
fn install(backend: &'static Logger, max_level: LevelFilter) {
    INSTALL.call_once(|| {
        if log::set_logger(backend).is_err() {
            log_warn!(backend, "Another log backend was installed first; keeping it");
        }
        log::set_max_level(max_level);
    });
}
