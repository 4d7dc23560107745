//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests.

#![allow(dead_code)]

use std::io::Read;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::TempDir;

/// Test repository context
///
/// Creates a temporary repository root with a `projects/` directory and
/// provides utilities for setting up projects and reading produced archives.
pub struct TestProject {
    /// Temporary repository root
    pub dir: TempDir,
}

impl TestProject {
    /// Create a new repository root in a temporary directory
    pub fn new() -> Self {
        let project = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        };
        project.create_dir("projects");
        project
    }

    /// Get the path to the repository root
    pub fn path(&self) -> PathBuf {
        self.dir.path().to_path_buf()
    }

    /// Directory produced archives are written to
    pub fn downloads_dir(&self) -> PathBuf {
        self.dir.path().join("public").join("downloads")
    }

    /// Create a file relative to the repository root
    pub fn create_file(&self, name: &str, content: &str) {
        let path = self.dir.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(path, content).expect("Failed to write file");
    }

    /// Create a directory relative to the repository root
    pub fn create_dir(&self, name: &str) {
        let path = self.dir.path().join(name);
        std::fs::create_dir_all(path).expect("Failed to create directory");
    }

    /// Create a file inside `projects/<project>`
    pub fn project_file(&self, project: &str, name: &str, content: &str) {
        self.create_file(&format!("projects/{project}/{name}"), content);
    }

    /// Create a demo project with a manifest, a source file and a build config
    pub fn add_demo(&self, project: &str) {
        self.project_file(project, "package.json", &sample_manifest(project));
        self.project_file(project, "src/main.ts", SAMPLE_SOURCE);
        self.project_file(project, "vite.config.ts", MONOREPO_VITE_CONFIG);
        self.project_file(project, "index.html", "<dock-manager></dock-manager>\n");
    }

    /// Check if a file exists relative to the repository root
    pub fn file_exists(&self, name: &str) -> bool {
        self.dir.path().join(name).exists()
    }

    /// Path of an archive in the downloads directory
    pub fn archive_path(&self, file_name: &str) -> PathBuf {
        self.downloads_dir().join(file_name)
    }

    /// Sorted entry names of a produced archive
    pub fn archive_names(&self, file_name: &str) -> Vec<String> {
        let file = std::fs::File::open(self.archive_path(file_name)).expect("Failed to open archive");
        let archive = zip::ZipArchive::new(file).expect("Failed to read archive");
        let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
        names.sort();
        names
    }

    /// Content of one archive entry
    pub fn archive_entry(&self, file_name: &str, entry: &str) -> String {
        let file = std::fs::File::open(self.archive_path(file_name)).expect("Failed to open archive");
        let mut archive = zip::ZipArchive::new(file).expect("Failed to read archive");
        let mut content = String::new();
        archive
            .by_name(entry)
            .expect("Entry missing from archive")
            .read_to_string(&mut content)
            .expect("Failed to read entry");
        content
    }

    /// Parsed `package.json` of a produced archive
    pub fn archive_manifest(&self, file_name: &str) -> serde_json::Value {
        serde_json::from_str(&self.archive_entry(file_name, "package.json"))
            .expect("Archived manifest is not valid JSON")
    }

    /// Run the demopack binary against this repository root
    pub fn run(&self, args: &[&str]) -> Output {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_demopack"));
        cmd.env("DEMOPACK_ROOT", self.path())
            .env_remove("npm_config_project")
            .env_remove("npm_config_variant")
            .env_remove("RUST_LOG");
        for arg in args {
            cmd.arg(arg);
        }
        cmd.output().expect("Failed to execute demopack")
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

/// Manifest of a monorepo demo project
pub fn sample_manifest(project: &str) -> String {
    format!(
        r#"{{
  "name": "{project}",
  "private": true,
  "version": "0.0.0",
  "type": "module",
  "scripts": {{
    "start": "concurrently \"npm:watch-*\"",
    "watch-ts": "tsx watch src/main.ts"
  }},
  "dependencies": {{
    "igniteui-dockmanager": "^1.5.0",
    "lit": "^3.2.0"
  }},
  "devDependencies": {{
    "concurrently": "^9.0.0",
    "tsx": "^4.19.0",
    "typescript": "^5.6.0"
  }}
}}
"#
    )
}

/// Source file importing the scoped dock manager package
pub const SAMPLE_SOURCE: &str = "import { defineCustomElements } from '@infragistics/igniteui-dockmanager/loader';\nimport { IgcDockManagerPaneType } from \"@infragistics/igniteui-dockmanager\";\n\ndefineCustomElements();\nconsole.log(IgcDockManagerPaneType.contentPane);\n";

/// Build config that only works inside the monorepo
pub const MONOREPO_VITE_CONFIG: &str = "import { defineConfig } from 'vite';\nimport shared from '../../vite.shared';\n\nexport default defineConfig(shared);\n";
