//! Text presentation of a [`Report`]

use crate::Report;
use std::borrow::Cow;
use std::fmt::Write;
use wlankey_core::{Error, ReportEntry, Result, SecretResolution};

const PLAIN_HEADING: &str = ":: Stored Wi-Fi Passwords ::";
const BLOCK_TITLE: &str = "Wi-Fi Profile Report";
const BLOCK_HEADING: &str = "Stored Wi-Fi Profiles:";
const NO_PROFILES: &str = "No Wi-Fi profiles found.";
const FENCE: &str = "```";

/// Supported report formats
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    /// Multi-line text for the terminal
    #[default]
    Plain,
    /// A single fenced block with an optional metadata header
    Block,
    Json,
}

impl std::str::FromStr for ReportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "plain" => Ok(Self::Plain),
            "block" => Ok(Self::Block),
            "json" => Ok(Self::Json),
            other => Err(Error::configuration(format!(
                "unknown report format '{other}' (expected plain, block or json)"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormatOptions {
    /// Print the authentication scheme under each password line
    pub include_authentication: bool,
}

/// Trait for rendering a report
pub trait ReportFormatter {
    fn format(&self, report: &Report) -> Result<String>;
}

/// Human string for a resolution.
///
/// Both text modes share every string except the failure text: the block
/// form keeps the failure detail, the plain form only gives guidance.
pub fn render_resolution(resolution: &SecretResolution, format: ReportFormat) -> Cow<'_, str> {
    match resolution {
        SecretResolution::Resolved { secret } => Cow::Borrowed(secret.as_str()),
        SecretResolution::OpenNetwork => Cow::Borrowed("Open network - no password"),
        SecretResolution::Inaccessible => {
            Cow::Borrowed("Password cannot be retrieved - run as administrator")
        }
        SecretResolution::SecretHiddenEmpty => Cow::Borrowed("Password hidden or unavailable"),
        SecretResolution::QueryFailed { detail } => match format {
            ReportFormat::Block => Cow::Owned(format!("Access denied: {detail}")),
            _ => Cow::Borrowed("Access denied - run as administrator"),
        },
    }
}

fn write_entry(
    out: &mut String,
    entry: &ReportEntry,
    label: &str,
    format: ReportFormat,
    options: FormatOptions,
) {
    // Writing to a String cannot fail
    let _ = writeln!(out);
    let _ = writeln!(out, "{label}: {}", entry.profile);
    let _ = writeln!(out, "Password: {}", render_resolution(&entry.resolution, format));
    if options.include_authentication {
        if let Some(authentication) = &entry.authentication {
            let _ = writeln!(out, "Authentication: {authentication}");
        }
    }
}

fn write_entries(
    out: &mut String,
    entries: &[ReportEntry],
    label: &str,
    format: ReportFormat,
    options: FormatOptions,
) {
    if entries.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "{NO_PROFILES}");
        return;
    }
    for entry in entries {
        write_entry(out, entry, label, format, options);
    }
}

/// Terminal listing, one block per profile
pub struct PlainFormatter {
    options: FormatOptions,
}

impl PlainFormatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }
}

impl ReportFormatter for PlainFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut out = String::new();
        let _ = writeln!(out, "{PLAIN_HEADING}");
        write_entries(
            &mut out,
            &report.entries,
            "Wi-Fi Profile",
            ReportFormat::Plain,
            self.options,
        );
        Ok(out)
    }
}

/// One fenced block, metadata header first when present
pub struct BlockFormatter {
    options: FormatOptions,
}

impl BlockFormatter {
    pub fn new(options: FormatOptions) -> Self {
        Self { options }
    }
}

impl ReportFormatter for BlockFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut out = String::new();
        let _ = writeln!(out, "{FENCE}");
        if let Some(metadata) = &report.metadata {
            let _ = writeln!(out, "{BLOCK_TITLE}");
            let _ = writeln!(out, "Timestamp: {}", metadata.timestamp);
            let _ = writeln!(out, "System: {}", metadata.host);
            let _ = writeln!(out, "OS: {}", metadata.os);
            if let Some(note) = &metadata.note {
                let _ = writeln!(out, "Note: {note}");
            }
            let _ = writeln!(out);
        }
        let _ = writeln!(out, "{BLOCK_HEADING}");
        write_entries(
            &mut out,
            &report.entries,
            "Profile",
            ReportFormat::Block,
            self.options,
        );
        let _ = writeln!(out, "{FENCE}");
        Ok(out)
    }
}

/// Structured output; resolutions keep their variant tags
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &Report) -> Result<String> {
        let mut out = serde_json::to_string_pretty(report)?;
        out.push('\n');
        Ok(out)
    }
}

/// Render a report. Identical input always gives byte-identical text.
pub fn format_report(
    report: &Report,
    format: ReportFormat,
    options: FormatOptions,
) -> Result<String> {
    match format {
        ReportFormat::Plain => PlainFormatter::new(options).format(report),
        ReportFormat::Block => BlockFormatter::new(options).format(report),
        ReportFormat::Json => JsonFormatter.format(report),
    }
}
