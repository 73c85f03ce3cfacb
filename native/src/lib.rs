//! # Native RAW Processor
//!
//! Loaded by the camera app as `libprocessor.so`. The only exported symbol is
//! [`JNI_OnLoad`], which installs logging and binds the managed `external fun`
//! declarations to the trampolines in [`bridge`].

pub mod bridge;
pub mod core;
pub mod diagnostics;
pub mod error;
pub mod processor;

use jni::sys::{jint, JNI_ERR, JNI_VERSION_1_6};
use jni::JavaVM;
use std::ffi::c_void;

use crate::core::registry;
use crate::diagnostics::logging::{self, logger};
use crate::error::BridgeError;

/// # Safety
/// Called by the JVM with a valid `JavaVM` pointer when the library is loaded.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "system" fn JNI_OnLoad(vm: *mut jni::sys::JavaVM, _reserved: *mut c_void) -> jint {
    logging::init();

    match register(vm) {
        Ok(count) => {
            log::info!("Rust: Registered {} native methods", count);
            JNI_VERSION_1_6
        }
        Err(e) => {
            log::error!("Rust: Native registration failed: {}", e);
            JNI_ERR
        }
    }
}

unsafe fn register(vm: *mut jni::sys::JavaVM) -> Result<usize, BridgeError> {
    let vm = JavaVM::from_raw(vm)?;
    let env = vm.get_env()?;
    registry::register_all(&env, logger(), &registry::native_bindings())
}
