//! Line rules for the `netsh wlan` text output.
//!
//! All marker matching and colon splitting lives here so the enumerator and
//! the resolver only deal with classified facts.

use wlankey_core::{
    ABSENT_MARKER, ALL_USER_PROFILE_MARKER, AUTHENTICATION_MARKER, KEY_CONTENT_MARKER,
    SECURITY_KEY_MARKER,
};

/// A line of `netsh wlan show profiles` output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingLine<'a> {
    /// A profile declaration; the name is trimmed and may be empty
    Declaration(&'a str),
    /// Carries the declaration marker but no colon
    Malformed,
    Other,
}

/// A line of `netsh wlan show profile name=... key=clear` output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailLine<'a> {
    /// Value after the last colon, trimmed; may be empty
    KeyContent(&'a str),
    SecurityKey { absent: bool },
    /// Value after the last colon, trimmed; may be empty
    Authentication(&'a str),
    Other,
}

/// Classify one line of the profile listing.
///
/// The name is everything after the first colon, so names that contain a
/// colon survive intact.
pub fn classify_listing_line(line: &str) -> ListingLine<'_> {
    if !line.contains(ALL_USER_PROFILE_MARKER) {
        return ListingLine::Other;
    }
    match line.split_once(':') {
        Some((_, name)) => ListingLine::Declaration(name.trim()),
        None => ListingLine::Malformed,
    }
}

/// Classify one line of a per-profile detail listing
pub fn classify_detail_line(line: &str) -> DetailLine<'_> {
    if line.contains(KEY_CONTENT_MARKER) {
        DetailLine::KeyContent(after_last_colon(line))
    } else if line.contains(SECURITY_KEY_MARKER) {
        DetailLine::SecurityKey {
            absent: line.contains(ABSENT_MARKER),
        }
    } else if line.contains(AUTHENTICATION_MARKER) {
        DetailLine::Authentication(after_last_colon(line))
    } else {
        DetailLine::Other
    }
}

/// Text after the last colon, trimmed. A line without a colon is taken whole.
fn after_last_colon(line: &str) -> &str {
    line.rsplit_once(':')
        .map_or(line, |(_, value)| value)
        .trim()
}
