//! Infrastructure layer
//!
//! Handles filesystem access and archive writing.

pub mod archive;
pub mod filesystem;
