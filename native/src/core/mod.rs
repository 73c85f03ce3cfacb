//! # Core Bridge Infrastructure
//!
//! Configuration and the JNI registration table resolved at library load.

pub mod config;
pub mod registry;
