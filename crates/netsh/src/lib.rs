//! Profile enumeration and key resolution for saved wireless networks.
//!
//! The crate talks to the `netsh wlan` context through a [`CommandExecutor`],
//! scrapes its human-readable output with the rules in [`lines`], and turns
//! every profile into a [`SecretResolution`](wlankey_core::SecretResolution).
//!
//! ```text
//! NetshClient::enumerate_profiles ──> [Profile, ...]
//!        │
//!        └─ for each, in order: NetshClient::inspect_profile ──> ReportEntry
//! ```

pub mod command_executor;
pub mod enumerate;
pub mod lines;
pub mod pipeline;
pub mod query;
pub mod resolve;
pub mod testing;

pub use command_executor::{CommandExecutor, CommandExecutorFactory, SystemCommandExecutor};
pub use enumerate::parse_profile_listing;
pub use pipeline::{collect_entries, ProfileSelection};
pub use query::NetshClient;
pub use resolve::classify_profile_output;

use async_trait::async_trait;
use wlankey_core::{Profile, ProfileInspection, SecretResolution};

/// Something that can list the saved profiles on this host
#[async_trait]
pub trait ProfileSource: Send + Sync {
    /// List profiles in the order the source reports them.
    ///
    /// Never fails: a source that cannot be queried yields an empty list and
    /// records a diagnostic.
    async fn enumerate_profiles(&self) -> Vec<Profile>;
}

/// Something that can reveal the stored key of a profile
#[async_trait]
pub trait SecretResolver: Send + Sync {
    /// Query one profile and classify everything learned about it
    async fn inspect_profile(&self, profile: &Profile) -> ProfileInspection;

    /// Query one profile for its key only
    async fn resolve_secret(&self, profile: &Profile) -> SecretResolution {
        self.inspect_profile(profile).await.resolution
    }
}
