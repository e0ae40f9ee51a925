use crate::settings::Settings;
use wlankey_core::Result;
use wlankey_netsh::ProfileSource;
use wlankey_report::{ConsoleSink, ReportSink};

pub async fn execute(settings: &Settings) -> Result<()> {
    let client = settings.netsh_client();
    let profiles = client.enumerate_profiles().await;

    if profiles.is_empty() {
        eprintln!("No Wi-Fi profiles found.");
        return Ok(());
    }

    let mut text = String::new();
    for profile in &profiles {
        text.push_str(profile.name());
        text.push('\n');
    }
    ConsoleSink.emit(&text)
}
