//! Invocation of the `netsh wlan` queries

use crate::command_executor::CommandExecutor;
use crate::enumerate::parse_profile_listing;
use crate::resolve::classify_profile_output;
use crate::{ProfileSource, SecretResolver};
use async_trait::async_trait;
use tracing::Instrument;
use wlankey_core::types::CommandArguments;
use wlankey_core::{Error, Profile, ProfileInspection, Result, SecretResolution};
use wlankey_utils::tracing::profile_span;

/// Arguments for the "list all stored profiles" query
pub fn list_profiles_args() -> CommandArguments {
    CommandArguments::from(&["wlan", "show", "profiles"][..])
}

/// Arguments for the "show profile, reveal key" query
pub fn show_profile_args(profile: &Profile) -> CommandArguments {
    let mut args = CommandArguments::from(&["wlan", "show", "profile"][..]);
    args.push(name_argument(profile.name()));
    args.push("key=clear");
    args
}

/// Build the `name=` token, doubling every double quote in the name
pub fn name_argument(name: &str) -> String {
    format!("name={}", name.replace('"', "\"\""))
}

/// Client for the wireless context of the network configuration utility
pub struct NetshClient {
    program: String,
    executor: Box<dyn CommandExecutor>,
}

impl NetshClient {
    pub fn new(program: impl Into<String>, executor: Box<dyn CommandExecutor>) -> Self {
        Self {
            program: program.into(),
            executor,
        }
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Run a query and return its stdout. A non-zero exit is an error that
    /// carries whatever the utility printed.
    async fn run_query(&self, args: CommandArguments) -> Result<String> {
        let output = self.executor.execute(&self.program, &args).await?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let stdout = String::from_utf8_lossy(&output.stdout);
            let message = if stderr.trim().is_empty() {
                stdout.trim().to_string()
            } else {
                stderr.trim().to_string()
            };
            return Err(Error::command_execution(
                &self.program,
                args.into_inner(),
                message,
                output.status.code(),
            ));
        }

        // The utility writes in the console code page; stray bytes are not fatal
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[async_trait]
impl ProfileSource for NetshClient {
    async fn enumerate_profiles(&self) -> Vec<Profile> {
        match self.run_query(list_profiles_args()).await {
            Ok(output) => {
                let profiles = parse_profile_listing(&output);
                tracing::info!(count = profiles.len(), "enumerated wireless profiles");
                profiles
            }
            Err(e) => {
                tracing::warn!(error = %e, "error listing wireless profiles");
                Vec::new()
            }
        }
    }
}

#[async_trait]
impl SecretResolver for NetshClient {
    async fn inspect_profile(&self, profile: &Profile) -> ProfileInspection {
        let span = profile_span(profile.name());
        async {
            match self.run_query(show_profile_args(profile)).await {
                Ok(output) => {
                    let inspection = classify_profile_output(&output);
                    tracing::debug!(outcome = inspection.resolution.kind(), "classified profile");
                    inspection
                }
                Err(e) => {
                    tracing::warn!(error = %e, "error retrieving key");
                    SecretResolution::query_failed(e.to_string()).into()
                }
            }
        }
        .instrument(span)
        .await
    }
}
