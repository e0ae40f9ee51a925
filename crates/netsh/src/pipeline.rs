//! Enumerate, then resolve each profile in order

use crate::{ProfileSource, SecretResolver};
use wlankey_core::{Profile, ReportEntry};

/// Which enumerated profiles to query
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ProfileSelection {
    #[default]
    All,
    /// Only profiles whose name matches one of these exactly
    Named(Vec<String>),
}

impl ProfileSelection {
    pub fn from_names(names: Vec<String>) -> Self {
        if names.is_empty() {
            Self::All
        } else {
            Self::Named(names.into_iter().map(|n| n.trim().to_string()).collect())
        }
    }

    pub fn includes(&self, profile: &Profile) -> bool {
        match self {
            Self::All => true,
            Self::Named(names) => names.iter().any(|n| n == profile.name()),
        }
    }
}

/// Run the two-stage pipeline.
///
/// One enumeration query, then one key query per selected profile, issued
/// sequentially. Entries come back in enumeration order and a failed profile
/// never stops the others.
pub async fn collect_entries<S, R>(
    source: &S,
    resolver: &R,
    selection: &ProfileSelection,
) -> Vec<ReportEntry>
where
    S: ProfileSource + ?Sized,
    R: SecretResolver + ?Sized,
{
    let profiles = source.enumerate_profiles().await;
    let mut entries = Vec::with_capacity(profiles.len());

    for profile in profiles.into_iter().filter(|p| selection.includes(p)) {
        let inspection = resolver.inspect_profile(&profile).await;
        entries.push(ReportEntry::new(profile, inspection));
    }

    if let ProfileSelection::Named(names) = selection {
        for name in names {
            if !entries.iter().any(|e| e.profile.name() == name) {
                tracing::warn!(profile = %name, "requested profile was not enumerated");
            }
        }
    }

    entries
}
