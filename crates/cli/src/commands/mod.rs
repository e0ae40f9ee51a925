use crate::settings::Settings;
use clap::{Args, Subcommand};
use std::path::PathBuf;
use wlankey_core::Result;

pub mod list;
pub mod show;

#[derive(Subcommand)]
pub enum Commands {
    /// Enumerate saved profiles and report their keys (default)
    Show(ShowArgs),

    /// List saved profile names without querying their keys
    #[command(visible_alias = "ls")]
    List,
}

#[derive(Args, Debug, Clone, Default)]
pub struct ShowArgs {
    /// Report format: plain, block or json [default: plain, block with --output]
    #[arg(short, long, value_parser = ["plain", "block", "json"])]
    pub format: Option<String>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Add a timestamp, host name and OS header (block and json formats)
    #[arg(long)]
    pub with_metadata: bool,

    /// Free-text note for the metadata header
    #[arg(long, requires = "with_metadata")]
    pub note: Option<String>,

    /// Print the authentication scheme of each profile
    #[arg(long)]
    pub auth: bool,

    /// Only query these profiles (can be specified multiple times)
    #[arg(short, long = "profile", value_name = "NAME")]
    pub profiles: Vec<String>,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Show(ShowArgs::default())
    }
}

impl Commands {
    pub async fn execute(self, settings: &Settings) -> Result<()> {
        match self {
            Commands::Show(args) => show::execute(settings, args).await,
            Commands::List => list::execute(settings).await,
        }
    }
}
