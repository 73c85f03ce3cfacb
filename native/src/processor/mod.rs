//! # RAW Frame Intake
//!
//! Frames arrive from the camera as a direct `ByteBuffer` plus dimensions.
//! Intake only reports the dimensions; the pixel data is never touched.

use std::ffi::c_void;

use crate::diagnostics::logging::Logger;
use crate::{log_debug, log_info};

/// Opaque reference to a buffer owned by the managed caller. May be null.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferRef(*mut c_void);

impl BufferRef {
    pub const fn null() -> Self {
        Self(std::ptr::null_mut())
    }

    pub const fn from_raw(raw: *mut c_void) -> Self {
        Self(raw)
    }

    pub fn is_null(&self) -> bool {
        self.0.is_null()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawFrame {
    pub buffer: BufferRef,
    pub width: i32,
    pub height: i32,
}

impl RawFrame {
    pub const fn new(buffer: BufferRef, width: i32, height: i32) -> Self {
        Self {
            buffer,
            width,
            height,
        }
    }
}

/// Writes the frame dimensions as two debug lines, width first.
pub fn process_raw(logger: &Logger, frame: &RawFrame) {
    log_debug!(logger, "RAW width: {}", frame.width);
    log_debug!(logger, "RAW height: {}", frame.height);
}

/// Start-up line of the RAW pipeline entry points.
pub fn announce(logger: &Logger) {
    log_info!(logger, "Hello, from Rust!");
}

/// Writes the frame dimensions as one info line.
pub fn report_frame(logger: &Logger, frame: &RawFrame) {
    log_info!(logger, "width: {}, height: {}", frame.width, frame.height);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::logging::Severity;
    use crate::diagnostics::sink::MemorySink;
    use std::sync::Arc;

    fn run(width: i32, height: i32) -> Vec<(Severity, String, String)> {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::new("MyProcessor", sink.clone());
        process_raw(&logger, &RawFrame::new(BufferRef::null(), width, height));
        sink.lines()
            .into_iter()
            .map(|l| (l.severity, l.tag, l.message))
            .collect()
    }

    #[test]
    fn test_full_sensor_frame() {
        assert_eq!(
            run(4032, 3024),
            vec![
                (Severity::Debug, "MyProcessor".to_string(), "RAW width: 4032".to_string()),
                (Severity::Debug, "MyProcessor".to_string(), "RAW height: 3024".to_string()),
            ]
        );
    }

    #[test]
    fn test_zero_dimensions() {
        let lines = run(0, 0);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].2, "RAW width: 0");
        assert_eq!(lines[1].2, "RAW height: 0");
    }

    #[test]
    fn test_negative_and_extreme_dimensions() {
        let lines = run(-1, i32::MIN);
        assert_eq!(lines[0].2, "RAW width: -1");
        assert_eq!(lines[1].2, "RAW height: -2147483648");

        let lines = run(i32::MAX, 7);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].2, "RAW width: 2147483647");
    }

    #[test]
    fn test_dangling_buffer_is_never_read() {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::new("MyProcessor", sink.clone());
        // Not a valid address; intake must not dereference it.
        let buffer = BufferRef::from_raw(0x10 as *mut c_void);
        assert!(!buffer.is_null());
        process_raw(&logger, &RawFrame::new(buffer, 2, 2));
        assert_eq!(sink.lines().len(), 2);
    }

    #[test]
    fn test_concurrent_calls_are_independent() {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::new("MyProcessor", sink.clone());

        std::thread::scope(|s| {
            for i in 0..8 {
                let logger = &logger;
                s.spawn(move || process_raw(logger, &RawFrame::new(BufferRef::null(), i, i * 2)));
            }
        });

        let lines = sink.lines();
        assert_eq!(lines.len(), 16);
        for i in 0..8 {
            assert!(lines.iter().any(|l| l.message == format!("RAW width: {}", i)));
            assert!(lines.iter().any(|l| l.message == format!("RAW height: {}", i * 2)));
        }
    }

    #[test]
    fn test_pipeline_entry_points() {
        let sink = Arc::new(MemorySink::new());
        let logger = Logger::new("RustNative", sink.clone());

        announce(&logger);
        report_frame(&logger, &RawFrame::new(BufferRef::null(), 4032, -3024));

        let lines = sink.lines();
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|l| l.severity == Severity::Info && l.tag == "RustNative"));
        assert_eq!(lines[0].message, "Hello, from Rust!");
        assert_eq!(lines[1].message, "width: 4032, height: -3024");
    }
}
