use std::path::PathBuf;

use chrono::Utc;
use clap::Subcommand;
use ecotrack_core::{spawn_export, ExportDocument, ExportStatus, FileSink, WriterSink};

use crate::session::Session;

#[derive(Subcommand)]
pub enum ExportAction {
    /// Write the full text report to a file
    Report {
        /// Target directory (defaults to report.export_dir, then the current directory)
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Print the short summary to stdout
    Summary,
}

pub fn run(action: ExportAction) -> Result<(), Box<dyn std::error::Error>> {
    let session = Session::open()?;
    let report = session
        .tracker
        .report(Utc::now(), session.config.report.history_limit);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let status = match action {
        ExportAction::Report { out } => {
            let dir = out
                .or_else(|| session.config.report.export_dir.clone().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("."));
            let sink = FileSink::new(dir);
            let document = ExportDocument::report(&report);
            let path = sink.path_for(&document);

            let status = runtime.block_on(async { spawn_export(sink, document).outcome().await });
            if status.is_delivered() {
                eprintln!("{}", path.display());
            }
            status
        }
        ExportAction::Summary => {
            let document = ExportDocument::summary(&report);
            runtime.block_on(async {
                spawn_export(WriterSink::stdout(), document)
                    .outcome()
                    .await
            })
        }
    };

    eprintln!("{status}");
    match status {
        ExportStatus::Delivered(_) => Ok(()),
        ExportStatus::Failed { error, .. } => Err(error.into()),
        ExportStatus::Cancelled => Err("export cancelled".into()),
    }
}
