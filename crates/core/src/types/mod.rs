//! Core domain types for the `wlankey` application.
//!
//! - **`commands`**: argument wrapper handed to the command executor
//! - **`profile`**: validated wireless profile names
//! - **`resolution`**: the outcome of asking the utility for a profile's key
//! - **`entry`**: a profile paired with its resolution, as reported

pub mod commands;
pub mod entry;
pub mod profile;
pub mod resolution;

pub use commands::*;
pub use entry::*;
pub use profile::*;
pub use resolution::*;
