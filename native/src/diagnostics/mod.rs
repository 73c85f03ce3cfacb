//! # Native Diagnostics and Logging
//!
//! Tagged, leveled logging over the platform system log (logcat on Android,
//! stderr on the host), plus the `log` crate backend built on it.

pub mod logging;
pub mod sink;
