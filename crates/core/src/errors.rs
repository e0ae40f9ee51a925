use std::path::PathBuf;

/// Result type alias for wlankey operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for wlankey operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Command execution errors
    #[error("{}", format_command_error(.command, .args, .message, .exit_code))]
    CommandExecution {
        command: String,
        args: Vec<String>,
        message: String,
        exit_code: Option<i32>,
    },

    /// Configuration errors
    #[error("configuration error: {message}")]
    Configuration { message: String },

    /// Profile names that cannot be used as a query key
    #[error("invalid profile name '{name}': {message}")]
    InvalidProfile { name: String, message: String },

    /// File system operations
    #[error("file system {operation} operation failed for '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        operation: String,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// Operation timeout errors
    #[error("operation '{operation}' timed out after {duration:?}")]
    Timeout {
        operation: String,
        duration: std::time::Duration,
    },
}

fn format_command_error(
    command: &str,
    args: &[String],
    message: &str,
    exit_code: &Option<i32>,
) -> String {
    let args_str = args.join(" ");
    let line = if args_str.is_empty() {
        command.to_string()
    } else {
        format!("{command} {args_str}")
    };
    match exit_code {
        Some(code) => format!("command '{line}' failed with exit code {code}: {message}"),
        None => format!("command '{line}' failed: {message}"),
    }
}

impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::Json {
            message: error.to_string(),
            source: error,
        }
    }
}

// Helper methods for creating errors with context
impl Error {
    /// Create a command execution error
    #[must_use]
    pub fn command_execution(
        command: impl Into<String>,
        args: Vec<String>,
        message: impl Into<String>,
        exit_code: Option<i32>,
    ) -> Self {
        Error::CommandExecution {
            command: command.into(),
            args,
            message: message.into(),
            exit_code,
        }
    }

    /// Create a configuration error
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    /// Create an invalid profile error
    #[must_use]
    pub fn invalid_profile(name: impl Into<String>, message: impl Into<String>) -> Self {
        Error::InvalidProfile {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create a file system error with context
    #[must_use]
    pub fn file_system(
        path: impl Into<PathBuf>,
        operation: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Error::FileSystem {
            path: path.into(),
            operation: operation.into(),
            source,
        }
    }

    /// Create a timeout error
    #[must_use]
    pub fn timeout(operation: impl Into<String>, duration: std::time::Duration) -> Self {
        Error::Timeout {
            operation: operation.into(),
            duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_error_display_with_exit_code() {
        let err = Error::command_execution(
            "netsh",
            vec!["wlan".to_string(), "show".to_string(), "profiles".to_string()],
            "The Wireless AutoConfig Service is not running.",
            Some(1),
        );
        assert_eq!(
            err.to_string(),
            "command 'netsh wlan show profiles' failed with exit code 1: \
             The Wireless AutoConfig Service is not running."
        );
    }

    #[test]
    fn test_file_system_error_names_path_and_operation() {
        let err = Error::file_system(
            "reports/wifi.txt",
            "write report",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access is denied"),
        );
        assert_eq!(
            err.to_string(),
            "file system write report operation failed for 'reports/wifi.txt': access is denied"
        );
    }

    #[test]
    fn test_command_error_display_without_args_or_code() {
        let err = Error::command_execution("netsh", Vec::new(), "program not found", None);
        assert_eq!(err.to_string(), "command 'netsh' failed: program not found");
    }
}
