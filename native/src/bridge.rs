//! JNI trampolines. Each one converts its arguments and calls into the
//! Rust layer; none of them throws into the JVM.
//!
//! These are bound by `RegisterNatives` from the table in
//! [`crate::core::registry`], so their Rust names are free to change.

use jni::objects::JObject;
use jni::sys::jint;
use jni::JNIEnv;

use crate::diagnostics::logging::{logger, raw_pipeline_logger};
use crate::processor::{self, BufferRef, RawFrame};

fn frame_from(data: JObject, width: jint, height: jint) -> RawFrame {
    RawFrame::new(BufferRef::from_raw(data.into_inner().cast()), width, height)
}

/// `Processor.Companion.processRaw(data: ByteBuffer, width: Int, height: Int)`
pub extern "system" fn process_raw(
    _env: JNIEnv,
    _this: JObject,
    data: JObject,
    width: jint,
    height: jint,
) {
    processor::process_raw(logger(), &frame_from(data, width, height));
}

/// `NativeRawProcessor.Companion.init()`
pub extern "system" fn raw_init(_env: JNIEnv, _this: JObject) {
    processor::announce(raw_pipeline_logger());
}

/// `NativeRawProcessor.Companion.process(width: Int, height: Int, data: ByteBuffer)`
pub extern "system" fn raw_process(
    _env: JNIEnv,
    _this: JObject,
    width: jint,
    height: jint,
    data: JObject,
) {
    processor::report_frame(raw_pipeline_logger(), &frame_from(data, width, height));
}
