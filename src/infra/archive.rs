//! Zip archive writing
//!
//! Entries are written on a blocking worker thread. The worker reports
//! through three channels of completion: the output stream closing, the
//! output stream failing, or the zip writer failing. [`ArchiveLatch`] folds
//! them into a single outcome that settles at most once, and [`finalize`]
//! awaits that outcome.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tokio::sync::oneshot;
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::core::entry::{ArchiveEntry, EntrySource};
use crate::error::ArchiveError;

/// Signals raised while an archive is written
#[derive(Debug)]
pub enum ArchiveEvent {
    /// Output flushed and closed; `bytes` is the final file size
    Closed { bytes: u64 },
    /// The output file failed
    StreamError(io::Error),
    /// The zip writer failed
    WriterError(ArchiveError),
}

/// One-shot bridge from archive events to an awaitable outcome
#[derive(Debug)]
pub struct ArchiveLatch {
    tx: Option<oneshot::Sender<Result<u64, ArchiveError>>>,
}

impl ArchiveLatch {
    /// Create a latch and the receiver that observes its outcome
    pub fn channel() -> (Self, oneshot::Receiver<Result<u64, ArchiveError>>) {
        let (tx, rx) = oneshot::channel();
        (Self { tx: Some(tx) }, rx)
    }

    /// Feed an event. Returns `true` if this event settled the latch;
    /// events after the first are ignored.
    pub fn observe(&mut self, event: ArchiveEvent) -> bool {
        let Some(tx) = self.tx.take() else {
            tracing::debug!("Ignoring archive event after settlement: {event:?}");
            return false;
        };
        let outcome = match event {
            ArchiveEvent::Closed { bytes } => Ok(bytes),
            ArchiveEvent::StreamError(e) => Err(ArchiveError::Stream(e)),
            ArchiveEvent::WriterError(e) => Err(e),
        };
        // The receiver may already be gone if the caller was cancelled
        let _ = tx.send(outcome);
        true
    }

    pub fn is_settled(&self) -> bool {
        self.tx.is_none()
    }
}

/// Write `entries` to `output` and wait for the archive to close.
///
/// Returns the size in bytes of the finished archive.
pub async fn finalize(
    entries: Vec<ArchiveEntry>,
    output: PathBuf,
    level: i64,
) -> Result<u64, ArchiveError> {
    let (mut latch, rx) = ArchiveLatch::channel();

    let task = tokio::task::spawn_blocking(move || {
        latch.observe(write_archive(&entries, &output, level));
    });

    match rx.await {
        Ok(outcome) => {
            if let Err(e) = task.await {
                tracing::debug!("Archive worker ended abnormally after settling: {e}");
            }
            outcome
        }
        Err(_) => match task.await {
            Err(e) => Err(ArchiveError::Task(e.to_string())),
            Ok(()) => Err(ArchiveError::Abandoned),
        },
    }
}

/// Write the archive and report how it ended
fn write_archive(entries: &[ArchiveEntry], output: &Path, level: i64) -> ArchiveEvent {
    let file = match File::create(output) {
        Ok(file) => file,
        Err(e) => return ArchiveEvent::StreamError(e),
    };

    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(level));

    for entry in entries {
        if let Err(e) = append_entry(&mut zip, entry, options) {
            return route(e);
        }
    }

    let writer = match zip.finish() {
        Ok(writer) => writer,
        Err(e) => return route(ArchiveError::Writer(e)),
    };
    let file = match writer.into_inner() {
        Ok(file) => file,
        Err(e) => return ArchiveEvent::StreamError(e.into_error()),
    };
    if let Err(e) = file.sync_all() {
        return ArchiveEvent::StreamError(e);
    }

    match file.metadata() {
        Ok(meta) => ArchiveEvent::Closed { bytes: meta.len() },
        Err(e) => ArchiveEvent::StreamError(e),
    }
}

fn append_entry<W: Write + io::Seek>(
    zip: &mut ZipWriter<W>,
    entry: &ArchiveEntry,
    options: SimpleFileOptions,
) -> Result<(), ArchiveError> {
    match &entry.source {
        EntrySource::Text(text) => {
            zip.start_file(entry.path.as_str(), options)?;
            zip.write_all(text.as_bytes())
                .map_err(|e| ArchiveError::Writer(ZipError::Io(e)))?;
        }
        EntrySource::File(path) => {
            let mut source = File::open(path).map_err(|e| ArchiveError::Source {
                path: path.clone(),
                error: e.to_string(),
            })?;
            zip.start_file(entry.path.as_str(), options)?;
            io::copy(&mut source, zip).map_err(|e| ArchiveError::Source {
                path: path.clone(),
                error: e.to_string(),
            })?;
        }
    }
    Ok(())
}

/// I/O failures inside the zip writer surface as output stream errors
fn route(error: ArchiveError) -> ArchiveEvent {
    match error {
        ArchiveError::Writer(ZipError::Io(e)) => ArchiveEvent::StreamError(e),
        other => ArchiveEvent::WriterError(other),
    }
}
