//! Profile enumeration from `netsh wlan show profiles` output

use crate::lines::{classify_listing_line, ListingLine};
use wlankey_core::Profile;

/// Extract profile names from the listing, in encounter order.
///
/// Blank names and declaration lines without a colon are skipped; duplicates
/// are kept.
pub fn parse_profile_listing(output: &str) -> Vec<Profile> {
    output
        .lines()
        .filter_map(|line| match classify_listing_line(line) {
            ListingLine::Declaration(name) => Profile::new(name).ok(),
            ListingLine::Malformed => {
                tracing::debug!(line, "skipping profile declaration without a colon");
                None
            }
            ListingLine::Other => None,
        })
        .collect()
}
