//! # Native Method Registration
//!
//! Managed classes reach native code through this table instead of
//! `Java_<package>_<class>_<method>` symbol names. `JNI_OnLoad` resolves each
//! class once and binds its methods with `RegisterNatives`.

use jni::{JNIEnv, NativeMethod};
use std::ffi::c_void;

use crate::bridge;
use crate::diagnostics::logging::Logger;
use crate::error::BridgeError;
use crate::{log_debug, log_warn};
use thiserror::Error;

pub const PROCESSOR_CLASS: &str = "com/mdnssknght/mycamera/processor/Processor$Companion";
pub const RAW_PROCESSOR_CLASS: &str =
    "com/mdnssknght/mycamera/processing/NativeRawProcessor$Companion";

/// One managed `external fun` bound to a native function.
#[derive(Debug, Clone, Copy)]
pub struct NativeBinding {
    pub class: &'static str,
    pub name: &'static str,
    pub signature: &'static str,
    pub fn_ptr: *mut c_void,
    /// Loading fails if the group holding a required binding cannot be bound.
    pub required: bool,
}

impl NativeBinding {
    /// Stable lookup key, `class.method`.
    pub fn key(&self) -> String {
        format!("{}.{}", self.class, self.name)
    }
}

pub fn native_bindings() -> [NativeBinding; 3] {
    [
        NativeBinding {
            class: PROCESSOR_CLASS,
            name: "processRaw",
            signature: "(Ljava/nio/ByteBuffer;II)V",
            fn_ptr: bridge::process_raw as *mut c_void,
            required: true,
        },
        NativeBinding {
            class: RAW_PROCESSOR_CLASS,
            name: "init",
            signature: "()V",
            fn_ptr: bridge::raw_init as *mut c_void,
            required: false,
        },
        NativeBinding {
            class: RAW_PROCESSOR_CLASS,
            name: "process",
            signature: "(IILjava/nio/ByteBuffer;)V",
            fn_ptr: bridge::raw_process as *mut c_void,
            required: false,
        },
    ]
}

/// Groups bindings by class, keeping first-appearance order of classes and
/// table order within each class.
pub fn group_by_class(bindings: &[NativeBinding]) -> Vec<(&'static str, Vec<NativeBinding>)> {
    let mut groups: Vec<(&'static str, Vec<NativeBinding>)> = Vec::new();
    for binding in bindings {
        match groups.iter_mut().find(|(class, _)| *class == binding.class) {
            Some((_, methods)) => methods.push(*binding),
            None => groups.push((binding.class, vec![*binding])),
        }
    }
    groups
}

/// Why a class group could not be bound.
#[derive(Debug, Error)]
pub enum GroupFailure {
    #[error("class not found: {0}")]
    ClassNotFound(jni::errors::Error),
    #[error("RegisterNatives rejected the group: {0}")]
    Rejected(jni::errors::Error),
}

/// Decides what a group's registration attempt means for the load.
///
/// Returns the number of methods bound. A failed group with no required
/// binding is skipped with a warning; a failed required group aborts.
pub fn settle_group(
    logger: &Logger,
    class_name: &str,
    methods: &[NativeBinding],
    attempt: Result<(), GroupFailure>,
) -> Result<usize, BridgeError> {
    let failure = match attempt {
        Ok(()) => {
            for m in methods {
                log_debug!(logger, "Registered {}{}", m.key(), m.signature);
            }
            return Ok(methods.len());
        }
        Err(failure) => failure,
    };

    if !methods.iter().any(|m| m.required) {
        log_warn!(logger, "Skipping natives for {}: {}", class_name, failure);
        return Ok(0);
    }

    Err(match failure {
        GroupFailure::ClassNotFound(_) => BridgeError::ClassNotFound(class_name.to_string()),
        GroupFailure::Rejected(source) => BridgeError::Registration {
            class: class_name.to_string(),
            source,
        },
    })
}

fn register_group(
    env: &JNIEnv,
    class_name: &str,
    methods: &[NativeBinding],
) -> Result<(), GroupFailure> {
    let class = env.find_class(class_name).map_err(GroupFailure::ClassNotFound)?;

    let natives: Vec<NativeMethod> = methods
        .iter()
        .map(|m| NativeMethod {
            name: m.name.into(),
            sig: m.signature.into(),
            fn_ptr: m.fn_ptr,
        })
        .collect();

    env.register_native_methods(class, &natives)
        .map_err(GroupFailure::Rejected)
}

/// Registers every binding and returns how many methods were bound.
pub fn register_all(
    env: &JNIEnv,
    logger: &Logger,
    bindings: &[NativeBinding],
) -> Result<usize, BridgeError> {
    let mut registered = 0;

    for (class_name, methods) in group_by_class(bindings) {
        let attempt = register_group(env, class_name, &methods);
        if attempt.is_err() {
            // A NoClassDefFoundError or NoSuchMethodError is left pending.
            let _ = env.exception_clear();
        }
        registered += settle_group(logger, class_name, &methods, attempt)?;
    }

    Ok(registered)
}
