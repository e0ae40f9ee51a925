use crate::commands::ShowArgs;
use crate::settings::Settings;
use tracing::Instrument;
use wlankey_core::Result;
use wlankey_netsh::{collect_entries, ProfileSelection};
use wlankey_report::{
    format_report, ConsoleSink, FileSink, FormatOptions, Report, ReportFormat, ReportMetadata,
    ReportSink,
};
use wlankey_utils::tracing::run_span;

/// Pick the format: explicit flag, else block for files and plain for the terminal
pub fn select_format(args: &ShowArgs) -> Result<ReportFormat> {
    match args.format.as_deref() {
        Some(name) => name.parse(),
        None if args.output.is_some() => Ok(ReportFormat::Block),
        None => Ok(ReportFormat::Plain),
    }
}

pub async fn execute(settings: &Settings, args: ShowArgs) -> Result<()> {
    let format = select_format(&args)?;
    let client = settings.netsh_client();
    let selection = ProfileSelection::from_names(args.profiles.clone());

    let entries = collect_entries(&client, &client, &selection)
        .instrument(run_span(client.program()))
        .await;

    if args.with_metadata && format == ReportFormat::Plain {
        tracing::warn!("metadata header is only printed in block and json formats");
    }
    let metadata = args
        .with_metadata
        .then(|| ReportMetadata::collect(args.note.clone()));
    let report = Report::new(entries).with_metadata(metadata);

    let options = FormatOptions {
        include_authentication: args.auth,
    };
    let text = format_report(&report, format, options)?;

    let sink: Box<dyn ReportSink> = match &args.output {
        Some(path) => Box::new(FileSink::new(path)),
        None => Box::new(ConsoleSink),
    };
    sink.emit(&text)?;

    for (kind, count) in report.summary() {
        tracing::info!(kind, count, sink = sink.name(), "profiles reported");
    }
    Ok(())
}
