use tracing::{span, Level, Span};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use wlankey_core::WLANKEY_LOG_VAR;

/// Initialize the tracing system
///
/// Diagnostics always go to stderr so stdout only ever carries the report.
/// `WLANKEY_LOG` takes precedence over the verbosity derived from `-v` flags.
pub fn init(verbosity: u8) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    let filter = EnvFilter::try_from_env(WLANKEY_LOG_VAR)
        .or_else(|_| EnvFilter::try_new(default_directive(verbosity)))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(is_tty())
        .compact()
        .with_target(false)
        .with_thread_ids(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}

/// Map the `-v` count onto a filter directive
#[must_use]
pub fn default_directive(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Check if we're running in a TTY environment
fn is_tty() -> bool {
    std::io::IsTerminal::is_terminal(&std::io::stderr())
}

/// Create a span covering one pipeline run
pub fn run_span(program: &str) -> Span {
    span!(Level::INFO, "run", program = %program)
}

/// Create a span covering the key query of one profile
pub fn profile_span(name: &str) -> Span {
    span!(Level::DEBUG, "profile", profile = %name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_levels() {
        assert_eq!(default_directive(0), "warn");
        assert_eq!(default_directive(1), "info");
        assert_eq!(default_directive(2), "debug");
        assert_eq!(default_directive(9), "trace");
    }

    #[test]
    fn test_span_helpers_build_without_subscriber() {
        let run = run_span("netsh");
        let profile = profile_span("HomeWifi");
        let _entered = run.enter();
        assert!(profile.is_disabled() || profile.metadata().is_some());
    }

    #[test]
    fn test_directives_parse() {
        for v in 0..4 {
            assert!(EnvFilter::try_new(default_directive(v)).is_ok());
        }
    }
}
