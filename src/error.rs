//! Error types for demopack
//!
//! Domain-specific error types using thiserror.

use std::path::PathBuf;
use thiserror::Error;

/// Filesystem errors
#[derive(Error, Debug)]
pub enum FilesystemError {
    /// Failed to create directory
    #[error("Failed to create directory '{path}': {error}")]
    CreateDir { path: PathBuf, error: String },

    /// Failed to remove file
    #[error("Failed to remove file '{path}': {error}")]
    RemoveFile { path: PathBuf, error: String },

    /// Failed to read file
    #[error("Failed to read file '{path}': {error}")]
    ReadFile { path: PathBuf, error: String },

    /// Failed to list directory
    #[error("Failed to read directory '{path}': {error}")]
    ReadDir { path: PathBuf, error: String },
}

/// Archive writing errors
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// The zip writer rejected an entry or failed to finish
    #[error("Archive writer error: {0}")]
    Writer(#[from] zip::result::ZipError),

    /// The output file could not be created, written or flushed
    #[error("Output stream error: {0}")]
    Stream(#[source] std::io::Error),

    /// A file queued for verbatim copy could not be read
    #[error("Failed to read '{path}' while archiving: {error}")]
    Source { path: PathBuf, error: String },

    /// The writer went away without reporting completion or failure
    #[error("Archive writer stopped without reporting an outcome")]
    Abandoned,

    /// The background writer task panicked or was cancelled
    #[error("Archive writer task failed: {0}")]
    Task(String),
}

/// Errors raised while building a single (project, edition) archive
#[derive(Error, Debug)]
pub enum BuildError {
    /// Source project directory is missing
    #[error("Project directory does not exist: {path}")]
    ProjectNotFound { path: PathBuf },

    /// The project manifest could not be parsed for mutation
    #[error("Failed to parse manifest '{path}': {error}")]
    Manifest { path: PathBuf, error: String },

    /// Archive finalization failed
    #[error(transparent)]
    Archive(#[from] ArchiveError),

    /// Filesystem failure outside the archive writer
    #[error(transparent)]
    Filesystem(#[from] FilesystemError),
}

/// Top-level demopack error type
#[derive(Error, Debug)]
pub enum DemopackError {
    /// No projects were found to package
    #[error("No projects found in: {}", path.display())]
    NoProjects { path: PathBuf },

    /// Unknown edition selector
    #[error("Unknown edition '{0}': expected premium, community or both")]
    UnknownEdition(String),

    /// Build error
    #[error("Build error: {0}")]
    Build(#[from] BuildError),

    /// Filesystem error
    #[error("Filesystem error: {0}")]
    Filesystem(#[from] FilesystemError),
}
