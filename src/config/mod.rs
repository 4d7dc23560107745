//! Configuration and constants
//!
//! - [`defaults`] - Fixed values used by the packaging pipeline
//! - [`packages`] - npm package names the pipeline recognizes

pub mod defaults;
pub mod packages;
