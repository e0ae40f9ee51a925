//! Local destinations for a formatted report

use std::io::Write;
use std::path::{Path, PathBuf};
use wlankey_core::{Error, Result};
use wlankey_utils::atomic_file::write_atomic_string;

/// Where a formatted report ends up
pub trait ReportSink {
    /// Short name used in diagnostics
    fn name(&self) -> &str;

    /// Deliver the report text
    fn emit(&self, report: &str) -> Result<()>;
}

/// Writes the report to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleSink;

impl ReportSink for ConsoleSink {
    fn name(&self) -> &str {
        "console"
    }

    fn emit(&self, report: &str) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout
            .write_all(report.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(|e| Error::file_system("<stdout>", "write report", e))
    }
}

/// Replaces the file at `path` with the report
#[derive(Debug, Clone)]
pub struct FileSink {
    path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ReportSink for FileSink {
    fn name(&self) -> &str {
        "file"
    }

    fn emit(&self, report: &str) -> Result<()> {
        write_atomic_string(&self.path, report)?;
        tracing::info!(path = %self.path.display(), bytes = report.len(), "report written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_file_sink_writes_report() {
        let temp_dir = TempDir::new().unwrap();
        let sink = FileSink::new(temp_dir.path().join("reports").join("wifi.txt"));

        sink.emit("```\nStored Wi-Fi Profiles:\n```\n").unwrap();

        let content = fs::read_to_string(sink.path()).unwrap();
        assert_eq!(content, "```\nStored Wi-Fi Profiles:\n```\n");
        assert_eq!(sink.name(), "file");
    }

    #[test]
    fn test_file_sink_reports_unwritable_path() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("not-a-dir");
        fs::write(&blocker, "x").unwrap();

        let sink = FileSink::new(blocker.join("wifi.txt"));
        assert!(sink.emit("report").is_err());
    }

    #[test]
    fn test_sinks_are_object_safe() {
        let sinks: Vec<Box<dyn ReportSink>> =
            vec![Box::new(ConsoleSink), Box::new(FileSink::new("x"))];
        let names: Vec<_> = sinks.iter().map(|s| s.name().to_string()).collect();
        assert_eq!(names, vec!["console".to_string(), "file".to_string()]);
    }
}
