//! Project tree traversal
//!
//! Decides, per file, whether it is copied verbatim, rewritten, or replaced
//! by generated content, and records the result in an [`ArchivePlan`].
//! A file that cannot be read or parsed falls back to a verbatim copy; the
//! walk itself only fails when a directory cannot be listed.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::defaults::{
    BUILD_CONFIG_NAMES, BUILD_CONFIG_OUTPUT, CODE_EXTENSIONS, PATH_ALIAS_FILE, SKIP_NAMES,
};
use crate::core::edition::Edition;
use crate::core::entry::{archive_path, ArchiveEntry, ArchivePlan};
use crate::core::report::Reporter;
use crate::core::templates::standalone_vite_config;
use crate::core::transform::{rewrite_imports_for_community, try_strip_path_aliases};
use crate::error::FilesystemError;

/// Whether a file or directory name is excluded from archives.
///
/// Matches whole names only: `dist` is skipped, `distribution.ts` is not.
pub fn should_skip_name(name: &str) -> bool {
    SKIP_NAMES.contains(&name) || name.starts_with(".DS_Store")
}

/// Whether the file's extension makes it eligible for import rewriting
pub fn is_code_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .is_some_and(|ext| CODE_EXTENSIONS.contains(&ext))
}

/// Whether the file name is a build-tool config replaced by the template
pub fn is_build_config(name: &str) -> bool {
    BUILD_CONFIG_NAMES.contains(&name)
}

/// Accumulates the archive plan for one (project, edition) build
pub struct TreeWalker<'a> {
    base: PathBuf,
    edition: Edition,
    reporter: &'a dyn Reporter,
    plan: ArchivePlan,
    modified: Vec<String>,
}

impl<'a> TreeWalker<'a> {
    /// Start a walk rooted at the project directory `base`
    pub fn new(base: impl Into<PathBuf>, edition: Edition, reporter: &'a dyn Reporter) -> Self {
        Self {
            base: base.into(),
            edition,
            reporter,
            plan: ArchivePlan::new(),
            modified: Vec::new(),
        }
    }

    /// Add an entry that bypasses classification (generated files)
    pub fn push(&mut self, entry: ArchiveEntry) {
        self.plan.push(entry);
    }

    /// Recursively add every non-excluded file below `dir`.
    ///
    /// Entries are visited in file-name order. Symlinks are followed, the
    /// same way the project root is inspected; a link cycle fails the walk.
    pub fn walk(&mut self, dir: &Path) -> Result<(), FilesystemError> {
        let walker = WalkDir::new(dir)
            .min_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| !should_skip_name(&e.file_name().to_string_lossy()));

        for entry in walker {
            let entry = entry.map_err(|e| FilesystemError::ReadDir {
                path: e.path().map_or_else(|| dir.to_path_buf(), Path::to_path_buf),
                error: e.to_string(),
            })?;

            if entry.file_type().is_dir() {
                continue;
            }
            self.add_file(entry.path());
        }

        Ok(())
    }

    /// Classify one file and add the matching entry
    pub fn add_file(&mut self, path: &Path) {
        let Some(relative) = archive_path(&self.base, path) else {
            tracing::debug!("Ignoring {} outside {}", path.display(), self.base.display());
            return;
        };
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();

        if is_build_config(&name) {
            self.plan
                .push(ArchiveEntry::text(BUILD_CONFIG_OUTPUT, standalone_vite_config()));
            return;
        }

        if relative == PATH_ALIAS_FILE {
            self.add_path_alias_file(path, relative);
            return;
        }

        if self.edition == Edition::Community && is_code_file(path) {
            self.add_community_source(path, relative);
            return;
        }

        self.plan.push(ArchiveEntry::file(relative, path));
    }

    fn add_path_alias_file(&mut self, path: &Path, relative: String) {
        let stripped = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|raw| try_strip_path_aliases(&raw).map_err(|e| e.to_string()));

        match stripped {
            Ok(text) => self.plan.push(ArchiveEntry::text(relative, text)),
            Err(error) => {
                tracing::warn!("Could not strip path aliases from {relative}: {error}");
                self.reporter
                    .warn(&format!("Could not modify {relative}: {error}"));
                self.plan.push(ArchiveEntry::file(relative, path));
            }
        }
    }

    fn add_community_source(&mut self, path: &Path, relative: String) {
        match std::fs::read_to_string(path) {
            Ok(content) => {
                let rewritten = rewrite_imports_for_community(&content);
                if rewritten == content {
                    self.plan.push(ArchiveEntry::file(relative, path));
                } else {
                    self.modified.push(relative.clone());
                    self.plan.push(ArchiveEntry::text(relative, rewritten));
                }
            }
            Err(error) => {
                tracing::warn!("Could not modify {relative}: {error}");
                self.reporter
                    .warn(&format!("Could not modify {relative}: {error}"));
                self.plan.push(ArchiveEntry::file(relative, path));
            }
        }
    }

    /// Files rewritten for the community edition, in visit order
    pub fn modified_files(&self) -> &[String] {
        &self.modified
    }

    /// Finish the walk
    pub fn finish(self) -> (ArchivePlan, Vec<String>) {
        (self.plan, self.modified)
    }
}
