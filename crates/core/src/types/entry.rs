//! One line item of a report

use crate::types::{Profile, ProfileInspection, SecretResolution};
use serde::{Deserialize, Serialize};

/// A profile paired with the outcome of its key query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportEntry {
    pub profile: Profile,
    pub resolution: SecretResolution,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication: Option<String>,
}

impl ReportEntry {
    #[must_use]
    pub fn new(profile: Profile, inspection: ProfileInspection) -> Self {
        Self {
            profile,
            resolution: inspection.resolution,
            authentication: inspection.authentication,
        }
    }
}
