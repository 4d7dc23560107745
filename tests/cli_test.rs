//! Integration tests for the demopack binary
//!
//! Exercises argument handling, environment overrides and exit codes.

mod common;

use assert_fs::prelude::*;
use common::TestProject;
use predicates::prelude::*;
use std::process::Command;

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_no_projects_exits_with_failure() {
    let project = TestProject::new();

    let output = project.run(&[]);

    assert_eq!(output.status.code(), Some(1));
    assert!(predicate::str::contains("No projects found in").eval(&stderr(&output)));
}

#[test]
fn test_missing_projects_directory_exits_with_failure() {
    let root = assert_fs::TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_demopack"))
        .env("DEMOPACK_ROOT", root.path())
        .env_remove("npm_config_project")
        .env_remove("npm_config_variant")
        .output()
        .expect("Failed to execute demopack");

    assert_eq!(output.status.code(), Some(1));
    root.child("public/downloads").assert(predicate::path::is_dir());
}

#[test]
fn test_missing_named_project_still_exits_successfully() {
    let project = TestProject::new();
    project.add_demo("demo");

    let output = project.run(&["ghost", "both"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(predicate::str::contains("Failed to create zip for \"ghost\" (premium)").eval(&stderr(&output)));
    assert!(predicate::str::contains("Failed to create zip for \"ghost\" (community)").eval(&stderr(&output)));
    assert!(!project.archive_path("demo-premium.zip").exists());
}

#[test]
fn test_unknown_edition_is_usage_error() {
    let project = TestProject::new();
    project.add_demo("demo");

    let output = project.run(&["demo", "enterprise"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(predicate::str::contains("enterprise").eval(&stderr(&output)));
    assert!(!project.downloads_dir().exists());
}

#[test]
fn test_positional_project_and_edition() {
    let project = TestProject::new();
    project.add_demo("demo");
    project.add_demo("other");

    let output = project.run(&["demo", "community"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(project.archive_path("demo-community.zip").exists());
    assert!(!project.archive_path("demo-premium.zip").exists());
    assert!(!project.archive_path("other-community.zip").exists());
    assert!(predicate::str::contains("demo-community.zip").eval(&stdout(&output)));
}

#[test]
fn test_default_builds_all_projects_premium() {
    let project = TestProject::new();
    project.add_demo("alpha");
    project.add_demo("beta");

    let output = project.run(&[]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(project.archive_path("alpha-premium.zip").exists());
    assert!(project.archive_path("beta-premium.zip").exists());
    assert!(!project.archive_path("alpha-community.zip").exists());
    assert!(predicate::str::contains("2 archive(s) built").eval(&stdout(&output)));
}

#[test]
fn test_environment_overrides_positionals() {
    let project = TestProject::new();
    project.add_demo("alpha");
    project.add_demo("beta");

    let output = Command::new(env!("CARGO_BIN_EXE_demopack"))
        .env("DEMOPACK_ROOT", project.path())
        .env("npm_config_project", "beta")
        .env("npm_config_variant", "both")
        .args(["alpha", "premium"])
        .output()
        .expect("Failed to execute demopack");

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(project.archive_path("beta-premium.zip").exists());
    assert!(project.archive_path("beta-community.zip").exists());
    assert!(!project.archive_path("alpha-premium.zip").exists());
}

#[test]
fn test_quiet_suppresses_progress() {
    let project = TestProject::new();
    project.add_demo("demo");

    let output = project.run(&["--quiet", "demo"]);

    assert!(output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(project.archive_path("demo-premium.zip").exists());
}

#[test]
fn test_version_flag() {
    let output = Command::new(env!("CARGO_BIN_EXE_demopack"))
        .arg("--version")
        .output()
        .expect("Failed to execute demopack");

    assert!(output.status.success());
    assert!(predicate::str::starts_with("demopack ").eval(&stdout(&output)));
}
