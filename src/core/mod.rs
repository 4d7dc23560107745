//! Core packaging pipeline
//!
//! Everything that decides what goes into an archive lives here. Writing
//! the zip container itself belongs to [`crate::infra`].
//!
//! # Submodules
//!
//! - [`edition`] - Premium/community editions and the request-level selector
//! - [`paths`] - Repository layout
//! - [`versions`] - Dock manager version resolution with fallback
//! - [`transform`] - Import rewriting and path alias stripping
//! - [`manifest`] - package.json parsing and per-edition mutation
//! - [`templates`] - Generated build config and readme
//! - [`entry`] - Archive entries and plans
//! - [`walker`] - Project tree traversal
//! - [`builder`] - Single archive build
//! - [`orchestrator`] - Batch runs over projects and editions
//! - [`report`] - Progress reporting

pub mod builder;
pub mod edition;
pub mod entry;
pub mod manifest;
pub mod orchestrator;
pub mod paths;
pub mod report;
pub mod templates;
pub mod transform;
pub mod versions;
pub mod walker;
