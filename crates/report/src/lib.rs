//! Report assembly, presentation and output for wlankey.
//!
//! A [`Report`] is the ordered list of [`ReportEntry`] values produced by the
//! pipeline plus optional [`ReportMetadata`]. [`format_report`] renders it in
//! one of the [`ReportFormat`]s and a [`ReportSink`] delivers the text.

pub mod formatter;
pub mod metadata;
pub mod sink;

pub use formatter::{
    format_report, render_resolution, FormatOptions, ReportFormat, ReportFormatter,
};
pub use metadata::ReportMetadata;
pub use sink::{ConsoleSink, FileSink, ReportSink};

use serde::Serialize;
use std::collections::BTreeMap;
use wlankey_core::ReportEntry;

/// Everything collected in one run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<ReportMetadata>,
    pub entries: Vec<ReportEntry>,
}

impl Report {
    pub fn new(entries: Vec<ReportEntry>) -> Self {
        Self {
            metadata: None,
            entries,
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: Option<ReportMetadata>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Number of entries per resolution kind
    pub fn summary(&self) -> BTreeMap<&'static str, usize> {
        let mut counts = BTreeMap::new();
        for entry in &self.entries {
            *counts.entry(entry.resolution.kind()).or_insert(0) += 1;
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wlankey_core::{Profile, SecretResolution};

    #[test]
    fn test_summary_counts_kinds() {
        let entry = |name: &str, resolution: SecretResolution| {
            ReportEntry::new(Profile::new(name).unwrap(), resolution.into())
        };
        let report = Report::new(vec![
            entry("a", SecretResolution::OpenNetwork),
            entry("b", SecretResolution::from_key_value("x")),
            entry("c", SecretResolution::OpenNetwork),
        ]);
        let summary = report.summary();
        assert_eq!(summary.get("open_network"), Some(&2));
        assert_eq!(summary.get("resolved"), Some(&1));
        assert_eq!(summary.get("inaccessible"), None);
    }
}
