//! Report export to external sinks.
//!
//! Delivery runs as a tokio task so a slow or refusing destination never
//! blocks the caller. The outcome comes back as an [`ExportStatus`] and
//! never touches tracker state.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::error::ExportError;
use crate::report::Report;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportKind {
    /// Full text report, saved as a file
    Report,
    /// Short summary, meant for the clipboard
    Summary,
}

/// A rendered document ready for a sink.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportDocument {
    pub kind: ExportKind,
    pub file_name: String,
    pub body: String,
}

impl ExportDocument {
    pub fn report(report: &Report) -> Self {
        Self {
            kind: ExportKind::Report,
            file_name: report.file_name(),
            body: report.render_text(),
        }
    }

    pub fn summary(report: &Report) -> Self {
        Self {
            kind: ExportKind::Summary,
            file_name: report.file_name(),
            body: report.render_summary(),
        }
    }
}

/// Destination for exported documents.
pub trait ExportSink: Send + 'static {
    /// Short name used in logs and errors.
    fn name(&self) -> &str;

    fn deliver(&mut self, document: &ExportDocument) -> Result<(), ExportError>;
}

/// Writes documents as files into an existing directory.
#[derive(Debug, Clone)]
pub struct FileSink {
    dir: PathBuf,
}

impl FileSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Where `document` lands when delivered.
    pub fn path_for(&self, document: &ExportDocument) -> PathBuf {
        self.dir.join(&document.file_name)
    }
}

impl ExportSink for FileSink {
    fn name(&self) -> &str {
        "file"
    }

    fn deliver(&mut self, document: &ExportDocument) -> Result<(), ExportError> {
        if !self.dir.is_dir() {
            return Err(ExportError::SinkUnavailable {
                sink: self.name().to_string(),
                message: format!("{} is not a directory", self.dir.display()),
            });
        }
        std::fs::write(self.path_for(document), &document.body)?;
        Ok(())
    }
}

/// Writes the document body to any writer (stdout in the CLI).
pub struct WriterSink<W> {
    name: String,
    writer: W,
}

impl<W: Write + Send + 'static> WriterSink<W> {
    pub fn new(name: impl Into<String>, writer: W) -> Self {
        Self {
            name: name.into(),
            writer,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl WriterSink<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new("stdout", std::io::stdout())
    }
}

impl<W: Write + Send + 'static> ExportSink for WriterSink<W> {
    fn name(&self) -> &str {
        &self.name
    }

    fn deliver(&mut self, document: &ExportDocument) -> Result<(), ExportError> {
        self.writer.write_all(document.body.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Result of an export task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportStatus {
    Delivered(ExportKind),
    Failed { kind: ExportKind, error: String },
    Cancelled,
}

impl ExportStatus {
    pub fn is_delivered(&self) -> bool {
        matches!(self, ExportStatus::Delivered(_))
    }

    /// User-facing status line.
    pub fn message(&self) -> &'static str {
        match self {
            ExportStatus::Delivered(ExportKind::Report) => "Text report downloaded!",
            ExportStatus::Delivered(ExportKind::Summary) => "Copied to clipboard!",
            ExportStatus::Failed {
                kind: ExportKind::Report,
                ..
            } => "Export failed - please try again",
            ExportStatus::Failed {
                kind: ExportKind::Summary,
                ..
            } => "Copy failed - manual selection needed",
            ExportStatus::Cancelled => "Export cancelled",
        }
    }
}

impl std::fmt::Display for ExportStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Handle to a running export.
pub struct ExportHandle {
    kind: ExportKind,
    cancelled: Arc<AtomicBool>,
    task: JoinHandle<ExportStatus>,
}

impl ExportHandle {
    pub fn kind(&self) -> ExportKind {
        self.kind
    }

    /// Request cancellation. Takes effect only if delivery has not started;
    /// a delivery already under way finishes and reports its real outcome.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub async fn outcome(self) -> ExportStatus {
        match self.task.await {
            Ok(status) => status,
            Err(e) if e.is_cancelled() => ExportStatus::Cancelled,
            Err(e) => ExportStatus::Failed {
                kind: self.kind,
                error: e.to_string(),
            },
        }
    }
}

/// Deliver `document` to `sink` on the tokio runtime.
///
/// Delivery itself runs on the blocking pool. Must be called from within a
/// runtime.
pub fn spawn_export<S: ExportSink>(sink: S, document: ExportDocument) -> ExportHandle {
    let kind = document.kind;
    let cancelled = Arc::new(AtomicBool::new(false));
    let flag = Arc::clone(&cancelled);

    let task = tokio::spawn(async move {
        if flag.load(Ordering::SeqCst) {
            return ExportStatus::Cancelled;
        }
        let delivery = tokio::task::spawn_blocking(move || deliver(sink, &document, &flag));
        match delivery.await {
            Ok(status) => status,
            Err(e) => ExportStatus::Failed {
                kind,
                error: e.to_string(),
            },
        }
    });

    ExportHandle {
        kind,
        cancelled,
        task,
    }
}

fn deliver<S: ExportSink>(
    mut sink: S,
    document: &ExportDocument,
    cancelled: &AtomicBool,
) -> ExportStatus {
    let kind = document.kind;
    if cancelled.load(Ordering::SeqCst) {
        return ExportStatus::Cancelled;
    }
    match sink.deliver(document) {
        Ok(()) => {
            info!(sink = sink.name(), ?kind, file = %document.file_name, "export delivered");
            ExportStatus::Delivered(kind)
        }
        Err(e) => {
            warn!(sink = sink.name(), ?kind, error = %e, "export failed");
            ExportStatus::Failed {
                kind,
                error: e.to_string(),
            }
        }
    }
}
