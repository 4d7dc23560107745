//! Filesystem operations
//!
//! Async wrappers that attach the offending path to every failure.

use std::path::Path;

use crate::error::FilesystemError;

/// Create a directory and all parent directories
pub async fn create_dir_all(path: &Path) -> Result<(), FilesystemError> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|e| FilesystemError::CreateDir {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
}

/// Remove a file if it exists. Returns whether a file was removed.
pub async fn remove_file_if_exists(path: &Path) -> Result<bool, FilesystemError> {
    match tokio::fs::remove_file(path).await {
        Ok(()) => Ok(true),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(false),
        Err(e) => Err(FilesystemError::RemoveFile {
            path: path.to_path_buf(),
            error: e.to_string(),
        }),
    }
}

/// Whether `path` exists and is a directory
pub async fn is_dir(path: &Path) -> bool {
    tokio::fs::metadata(path)
        .await
        .map(|m| m.is_dir())
        .unwrap_or(false)
}

/// Names of the entries in a directory, sorted
pub async fn list_dir(path: &Path) -> Result<Vec<String>, FilesystemError> {
    let read_dir_err = |e: std::io::Error| FilesystemError::ReadDir {
        path: path.to_path_buf(),
        error: e.to_string(),
    };

    let mut reader = tokio::fs::read_dir(path).await.map_err(read_dir_err)?;
    let mut names = Vec::new();
    while let Some(entry) = reader.next_entry().await.map_err(read_dir_err)? {
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Read content from a file
pub async fn read_file(path: &Path) -> Result<String, FilesystemError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| FilesystemError::ReadFile {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
}
