use clap::{ArgAction, Parser};
use wlankey::{Commands, Settings};

#[derive(Parser)]
#[command(name = "wlankey")]
#[command(about = "Show the keys of the wireless profiles saved on this machine", long_about = None)]
#[command(version)]
struct Cli {
    /// Network configuration utility to run [env: WLANKEY_NETSH] [default: netsh]
    #[arg(long, global = true, value_name = "PROGRAM")]
    netsh: Option<String>,

    /// Give up on a single utility invocation after this many seconds [env: WLANKEY_TIMEOUT_SECS]
    #[arg(long, global = true, value_name = "SECS")]
    timeout: Option<u64>,

    /// Increase diagnostic output on stderr (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> eyre::Result<()> {
    color_eyre::install()?;

    // Parse command-line arguments
    let cli = Cli::parse();
    let settings = Settings::from_env(cli.netsh, cli.timeout, cli.verbose)?;

    if let Err(e) = wlankey_utils::tracing::init(settings.verbosity) {
        eprintln!("failed to initialise logging: {e}");
    }

    // Default behavior when no command is specified
    let command = cli.command.unwrap_or_default();
    command.execute(&settings).await?;
    Ok(())
}
