//! Core domain types, errors, and constants for `wlankey`.
//!
//! ## Key Components
//!
//! - **`errors`**: the `Error` enum and `Result` alias shared by every crate in
//!   the workspace.
//! - **`types`**: `Profile`, `SecretResolution` and the
//!   `CommandArguments` wrapper used when talking to the configuration utility.
//! - **`constants`**: output markers, default program name and environment
//!   variable names.

pub mod constants;
pub mod errors;
pub mod types;

pub use self::{
    constants::*,
    errors::{Error, Result},
    types::*,
};
