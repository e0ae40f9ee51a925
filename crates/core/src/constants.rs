/// Constants used throughout the wlankey codebase
// Configuration utility
pub const DEFAULT_NETSH_PROGRAM: &str = "netsh";

// Markers scraped from the utility's human-readable output
pub const ALL_USER_PROFILE_MARKER: &str = "All User Profile";
pub const KEY_CONTENT_MARKER: &str = "Key Content";
pub const SECURITY_KEY_MARKER: &str = "Security key";
pub const ABSENT_MARKER: &str = "Absent";
pub const AUTHENTICATION_MARKER: &str = "Authentication";

// Environment variable names
pub const WLANKEY_NETSH_VAR: &str = "WLANKEY_NETSH";
pub const WLANKEY_TIMEOUT_VAR: &str = "WLANKEY_TIMEOUT_SECS";
pub const WLANKEY_LOG_VAR: &str = "WLANKEY_LOG";

// Report timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
