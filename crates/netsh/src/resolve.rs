//! Classification of `netsh wlan show profile name=... key=clear` output

use crate::lines::{classify_detail_line, DetailLine};
use wlankey_core::{ProfileInspection, SecretResolution};

/// Classify a successful per-profile query.
///
/// The first key line decides between a revealed and an empty key. Without
/// one, the first security key line marks an open network when its value is
/// absent. Anything else means a key exists but was withheld.
pub fn classify_profile_output(output: &str) -> ProfileInspection {
    let mut key_content = None;
    let mut security_key_absent = None;
    let mut authentication = None;

    for line in output.lines() {
        match classify_detail_line(line) {
            DetailLine::KeyContent(value) if key_content.is_none() => key_content = Some(value),
            DetailLine::SecurityKey { absent } if security_key_absent.is_none() => {
                security_key_absent = Some(absent)
            }
            DetailLine::Authentication(value) if authentication.is_none() => {
                authentication = Some(value)
            }
            _ => {}
        }
    }

    let resolution = match (key_content, security_key_absent) {
        (Some(value), _) => SecretResolution::from_key_value(value),
        (None, Some(true)) => SecretResolution::OpenNetwork,
        (None, _) => SecretResolution::Inaccessible,
    };

    ProfileInspection::new(resolution).with_authentication(
        authentication
            .filter(|value| !value.is_empty())
            .map(str::to_string),
    )
}
