use async_trait::async_trait;
use std::process::Output;
use std::time::Duration;
use wlankey_core::types::CommandArguments;
use wlankey_core::{Error, Result};

/// Trait for executing external commands
/// This abstraction allows for testing without mocking by providing
/// different implementations for production and test environments
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    /// Execute a command with the given arguments
    /// Returns the output of the command, whatever its exit status
    async fn execute(&self, cmd: &str, args: &CommandArguments) -> Result<Output>;
}

/// Production implementation that executes real commands
#[derive(Debug, Clone, Default)]
pub struct SystemCommandExecutor {
    /// Upper bound on a single invocation; unbounded when `None`
    pub timeout: Option<Duration>,
}

impl SystemCommandExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a system command executor that gives up on slow invocations
    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    async fn execute_once(&self, cmd: &str, args: &CommandArguments) -> Result<Output> {
        tracing::debug!(command = %cmd, args = %args, "executing command");

        let mut command = tokio::process::Command::new(cmd);
        command.args(args.as_slice()).kill_on_drop(true);

        let output = command.output().await.map_err(|e| {
            Error::command_execution(
                cmd,
                args.as_slice().to_vec(),
                format!("failed to execute command: {e}"),
                None,
            )
        })?;

        tracing::debug!(command = %cmd, status = ?output.status.code(), "command finished");
        Ok(output)
    }
}

#[async_trait]
impl CommandExecutor for SystemCommandExecutor {
    async fn execute(&self, cmd: &str, args: &CommandArguments) -> Result<Output> {
        match self.timeout {
            Some(limit) => tokio::time::timeout(limit, self.execute_once(cmd, args))
                .await
                .map_err(|_| Error::timeout(format!("{cmd} {args}"), limit))?,
            None => self.execute_once(cmd, args).await,
        }
    }
}

/// Factory for creating command executors
pub struct CommandExecutorFactory;

impl CommandExecutorFactory {
    /// Create a production command executor
    pub fn system(timeout: Option<Duration>) -> Box<dyn CommandExecutor> {
        Box::new(SystemCommandExecutor { timeout })
    }
}
