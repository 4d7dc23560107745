//! Progress reporting
//!
//! Pipeline components never print directly. They receive a [`Reporter`]
//! and emit informational, success, warning and error events through it.
//! The CLI passes a console implementation; tests pass a [`MemoryReporter`]
//! and inspect what was reported.

use std::future::Future;
use std::sync::{Mutex, PoisonError};
use std::time::Instant;

use indicatif::HumanBytes;

use crate::core::edition::Edition;

/// Sink for user-facing progress events
pub trait Reporter: Send + Sync {
    /// Informational line, indented by `indent` spaces
    fn info(&self, text: &str, indent: usize);

    /// Completed step
    fn success(&self, text: &str);

    /// Recoverable problem
    fn warn(&self, text: &str);

    /// A unit of work was skipped
    fn error(&self, text: &str);

    /// Section heading
    fn header(&self, text: &str) {
        self.info(text, 0);
    }

    /// Start of a timed step
    fn step(&self, text: &str) {
        self.info(text, 0);
    }

    /// Dependency chosen for an edition
    fn version(&self, edition: Edition, package: &str, version: &str) {
        self.info(&format!("{} → {package} {version}", edition.label()), 2);
    }

    /// Size of a produced file
    fn size(&self, file_name: &str, bytes: u64) {
        self.success(&format!("{file_name} ({})", HumanBytes(bytes)));
    }

    /// Closing line of a successful run
    fn final_success(&self, text: &str) {
        self.success(text);
    }

    /// Closing line of a failed run
    fn final_error(&self, text: &str) {
        self.error(text);
    }
}

/// Severity of a recorded event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLevel {
    Info,
    Success,
    Warn,
    Error,
}

/// A recorded event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEvent {
    pub level: ReportLevel,
    pub message: String,
}

/// Reporter that keeps every event in memory
#[derive(Debug, Default)]
pub struct MemoryReporter {
    events: Mutex<Vec<ReportEvent>>,
}

impl MemoryReporter {
    pub fn new() -> Self {
        Self::default()
    }

    /// All events in emission order
    pub fn events(&self) -> Vec<ReportEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Messages of one level
    pub fn messages(&self, level: ReportLevel) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|e| e.level == level)
            .map(|e| e.message)
            .collect()
    }

    /// Whether any event of `level` contains `needle`
    pub fn contains(&self, level: ReportLevel, needle: &str) -> bool {
        self.messages(level).iter().any(|m| m.contains(needle))
    }

    fn record(&self, level: ReportLevel, message: &str) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(ReportEvent {
                level,
                message: message.to_string(),
            });
    }
}

impl Reporter for MemoryReporter {
    fn info(&self, text: &str, _indent: usize) {
        self.record(ReportLevel::Info, text);
    }

    fn success(&self, text: &str) {
        self.record(ReportLevel::Success, text);
    }

    fn warn(&self, text: &str) {
        self.record(ReportLevel::Warn, text);
    }

    fn error(&self, text: &str) {
        self.record(ReportLevel::Error, text);
    }
}

/// Run `work`, reporting its start and elapsed time
pub async fn timed<T, F>(reporter: &dyn Reporter, label: &str, work: F) -> T
where
    F: Future<Output = T>,
{
    let start = Instant::now();
    reporter.step(&format!("{label}…"));
    let out = work.await;
    reporter.info(
        &format!("{label} done in {:.2}s", start.elapsed().as_secs_f64()),
        0,
    );
    out
}
