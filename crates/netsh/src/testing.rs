//! Scripted command execution for deterministic tests
//!
//! Responses are keyed by the full command line (`program arg1 arg2 ...`).
//! Every call is recorded so tests can assert how often, and in which order,
//! the utility was invoked.

use crate::command_executor::CommandExecutor;
use async_trait::async_trait;
use std::collections::HashMap;
use std::process::Output;
use std::sync::{Arc, Mutex};
use wlankey_core::types::CommandArguments;
use wlankey_core::{Error, Result};

#[derive(Clone)]
pub enum ScriptedResponse {
    Completed {
        stdout: Vec<u8>,
        stderr: Vec<u8>,
        status_code: i32,
    },
    /// The program could not be started at all
    LaunchFailure(String),
}

#[derive(Clone, Default)]
pub struct ScriptedCommandExecutor {
    responses: Arc<Mutex<HashMap<String, ScriptedResponse>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl ScriptedCommandExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    fn key(cmd: &str, args: &[String]) -> String {
        if args.is_empty() {
            cmd.to_string()
        } else {
            format!("{} {}", cmd, args.join(" "))
        }
    }

    pub fn add_response(&self, cmd: &str, args: &[String], response: ScriptedResponse) {
        if let Ok(mut responses) = self.responses.lock() {
            responses.insert(Self::key(cmd, args), response);
        }
    }

    pub fn add_simple_response(&self, cmd: &str, args: &[String], stdout: &str) {
        self.add_response(
            cmd,
            args,
            ScriptedResponse::Completed {
                stdout: stdout.as_bytes().to_vec(),
                stderr: Vec::new(),
                status_code: 0,
            },
        );
    }

    pub fn add_error_response(&self, cmd: &str, args: &[String], stderr: &str) {
        self.add_response(
            cmd,
            args,
            ScriptedResponse::Completed {
                stdout: Vec::new(),
                stderr: stderr.as_bytes().to_vec(),
                status_code: 1,
            },
        );
    }

    pub fn add_launch_failure(&self, cmd: &str, args: &[String], message: &str) {
        self.add_response(cmd, args, ScriptedResponse::LaunchFailure(message.to_string()));
    }

    /// Command lines executed so far, in call order
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl CommandExecutor for ScriptedCommandExecutor {
    async fn execute(&self, cmd: &str, args: &CommandArguments) -> Result<Output> {
        let key = Self::key(cmd, args.as_slice());
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(key.clone());
        }

        let responses = self.responses.lock().map_err(|e| Error::Configuration {
            message: format!("failed to lock scripted responses: {e}"),
        })?;

        match responses.get(&key) {
            Some(ScriptedResponse::Completed {
                stdout,
                stderr,
                status_code,
            }) => Ok(Output {
                status: exit_status::from_code(*status_code),
                stdout: stdout.clone(),
                stderr: stderr.clone(),
            }),
            Some(ScriptedResponse::LaunchFailure(message)) => Err(Error::command_execution(
                cmd,
                args.as_slice().to_vec(),
                format!("failed to execute command: {message}"),
                None,
            )),
            None => Err(Error::Configuration {
                message: format!("no scripted response configured for command: {key}"),
            }),
        }
    }
}

// Platform-specific module for creating ExitStatus
mod exit_status {
    #[cfg(unix)]
    pub fn from_code(code: i32) -> std::process::ExitStatus {
        use std::os::unix::process::ExitStatusExt;
        // Raw wait status keeps the exit code in the second byte
        std::process::ExitStatus::from_raw((code & 0xff) << 8)
    }

    #[cfg(windows)]
    pub fn from_code(code: i32) -> std::process::ExitStatus {
        use std::os::windows::process::ExitStatusExt;
        std::process::ExitStatus::from_raw(code as u32)
    }
}
