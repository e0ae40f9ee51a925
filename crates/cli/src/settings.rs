//! Run-wide settings resolved once from flags and the environment
//!
//! Precedence is flag, then environment variable, then default. The result is
//! immutable and handed to commands explicitly.

use std::time::Duration;
use wlankey_core::{
    Error, Result, DEFAULT_NETSH_PROGRAM, WLANKEY_NETSH_VAR, WLANKEY_TIMEOUT_VAR,
};
use wlankey_netsh::{CommandExecutorFactory, NetshClient};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Program used for the `wlan` queries
    pub netsh_program: String,
    /// Per-invocation limit for the utility
    pub timeout: Option<Duration>,
    /// Number of `-v` flags
    pub verbosity: u8,
}

impl Settings {
    /// Resolve settings against the process environment
    pub fn from_env(
        netsh: Option<String>,
        timeout_secs: Option<u64>,
        verbosity: u8,
    ) -> Result<Self> {
        Self::resolve(netsh, timeout_secs, verbosity, |key| std::env::var(key).ok())
    }

    /// Resolve settings against an arbitrary variable lookup
    pub fn resolve<F>(
        netsh: Option<String>,
        timeout_secs: Option<u64>,
        verbosity: u8,
        lookup: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let netsh_program = netsh
            .or_else(|| lookup(WLANKEY_NETSH_VAR))
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| DEFAULT_NETSH_PROGRAM.to_string());

        let timeout_secs = match timeout_secs {
            Some(secs) => Some(secs),
            None => lookup(WLANKEY_TIMEOUT_VAR)
                .map(|raw| {
                    raw.trim().parse::<u64>().map_err(|e| {
                        Error::configuration(format!(
                            "{WLANKEY_TIMEOUT_VAR} must be a whole number of seconds, got '{raw}': {e}"
                        ))
                    })
                })
                .transpose()?,
        };

        Ok(Self {
            netsh_program,
            // zero disables the limit
            timeout: timeout_secs.filter(|s| *s > 0).map(Duration::from_secs),
            verbosity,
        })
    }

    /// Build the client used by every command
    pub fn netsh_client(&self) -> NetshClient {
        if which::which(&self.netsh_program).is_err() {
            tracing::warn!(
                program = %self.netsh_program,
                "network configuration utility not found on PATH"
            );
        }
        NetshClient::new(
            self.netsh_program.clone(),
            CommandExecutorFactory::system(self.timeout),
        )
    }
}
