//! Shared utilities for wlankey
//!
//! Logging setup and the small file-system helpers used by the report sinks.

pub mod atomic_file;
pub mod tracing;

pub use atomic_file::*;
