//! Outcome of asking the configuration utility to reveal a profile's key

use serde::{Deserialize, Serialize};

/// Classification of one per-profile key query.
///
/// Every variant is an expected outcome. A query that could not be run at all
/// still ends up here as [`SecretResolution::QueryFailed`] so the rest of the
/// batch keeps going.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SecretResolution {
    /// The key was revealed; never empty
    Resolved { secret: String },
    /// The network has no key
    OpenNetwork,
    /// A key exists but the query lacked the privilege to reveal it
    Inaccessible,
    /// The query itself failed
    QueryFailed { detail: String },
    /// The key line was present but its value was empty
    SecretHiddenEmpty,
}

impl SecretResolution {
    /// Build a resolution from a key line value, mapping empty values to
    /// [`SecretResolution::SecretHiddenEmpty`]
    #[must_use]
    pub fn from_key_value(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            Self::SecretHiddenEmpty
        } else {
            Self::Resolved {
                secret: value.to_string(),
            }
        }
    }

    #[must_use]
    pub fn query_failed(detail: impl Into<String>) -> Self {
        Self::QueryFailed {
            detail: detail.into(),
        }
    }

    /// Stable, secret-free label used in logs and summaries
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Resolved { .. } => "resolved",
            Self::OpenNetwork => "open_network",
            Self::Inaccessible => "inaccessible",
            Self::QueryFailed { .. } => "query_failed",
            Self::SecretHiddenEmpty => "secret_hidden_empty",
        }
    }

    /// The revealed key, if any
    #[must_use]
    pub fn secret(&self) -> Option<&str> {
        match self {
            Self::Resolved { secret } => Some(secret),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::QueryFailed { .. })
    }
}

/// Everything learned from one per-profile query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileInspection {
    pub resolution: SecretResolution,
    /// Authentication scheme reported alongside the key, e.g. `WPA2-Personal`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authentication: Option<String>,
}

impl ProfileInspection {
    #[must_use]
    pub fn new(resolution: SecretResolution) -> Self {
        Self {
            resolution,
            authentication: None,
        }
    }

    #[must_use]
    pub fn with_authentication(mut self, authentication: Option<String>) -> Self {
        self.authentication = authentication;
        self
    }
}

impl From<SecretResolution> for ProfileInspection {
    fn from(resolution: SecretResolution) -> Self {
        Self::new(resolution)
    }
}
