//! Archive entries
//!
//! An [`ArchivePlan`] is the ordered list of entries one archive will
//! contain. Paths are archive-relative, always `/`-separated, and unique
//! within a plan.

use std::collections::HashMap;
use std::path::{Component, Path, PathBuf};

/// Where an entry's bytes come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntrySource {
    /// Copy this file verbatim
    File(PathBuf),
    /// Write this text (rewritten or generated content)
    Text(String),
}

/// One file inside the archive
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveEntry {
    pub path: String,
    pub source: EntrySource,
}

impl ArchiveEntry {
    pub fn file(path: impl Into<String>, file: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            source: EntrySource::File(file.into()),
        }
    }

    pub fn text(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            source: EntrySource::Text(text.into()),
        }
    }
}

/// Ordered, path-unique set of entries
#[derive(Debug, Clone, Default)]
pub struct ArchivePlan {
    entries: Vec<ArchiveEntry>,
    /// Position of each path in `entries`
    index: HashMap<String, usize>,
}

impl ArchivePlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry. An existing entry with the same path is replaced in
    /// place, so later content wins.
    pub fn push(&mut self, entry: ArchiveEntry) {
        if let Some(&at) = self.index.get(&entry.path) {
            tracing::debug!("Replacing duplicate archive entry {}", entry.path);
            self.entries[at] = entry;
        } else {
            self.index.insert(entry.path.clone(), self.entries.len());
            self.entries.push(entry);
        }
    }

    pub fn entries(&self) -> &[ArchiveEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<ArchiveEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&ArchiveEntry> {
        self.index.get(path).map(|&at| &self.entries[at])
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.path.as_str())
    }
}

/// Archive path of `path` relative to `base`, joined with `/`.
///
/// Returns `None` when `path` is not inside `base`.
pub fn archive_path(base: &Path, path: &Path) -> Option<String> {
    let relative = path.strip_prefix(base).ok()?;
    let parts: Vec<_> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect();
    if parts.is_empty() {
        None
    } else {
        Some(parts.join("/"))
    }
}
