//! Dock manager version resolution
//!
//! Reads the dock manager version range a project declares. Resolution never
//! fails: an unreadable manifest or a manifest without either package
//! degrades to [`FALLBACK_DM_VERSION`].

use std::path::Path;

use crate::config::defaults::{FALLBACK_DM_VERSION, MANIFEST_FILE};
use crate::config::packages::{COMMUNITY_DOCK_MANAGER, PREMIUM_DOCK_MANAGER};
use crate::core::edition::Edition;
use crate::core::manifest::PackageManifest;
use crate::core::report::Reporter;

/// Outcome of a step that always has a safe default
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution<T> {
    /// The value was found
    Resolved(T),
    /// The value could not be determined; `value` is the default
    Fallback { value: T, reason: String },
}

impl<T> Resolution<T> {
    /// The resolved value or the default
    pub fn into_value(self) -> T {
        match self {
            Self::Resolved(value) | Self::Fallback { value, .. } => value,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback { .. })
    }
}

/// Dock manager version ranges for both editions of one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyVersionPair {
    pub community: String,
    pub premium: String,
}

impl DependencyVersionPair {
    /// Resolve both editions, reporting any fallback
    pub fn resolve(project_dir: &Path, reporter: &dyn Reporter) -> Self {
        Self {
            community: resolve_version(project_dir, Edition::Community, reporter),
            premium: resolve_version(project_dir, Edition::Premium, reporter),
        }
    }

    /// Version range for one edition
    pub fn for_edition(&self, edition: Edition) -> &str {
        match edition {
            Edition::Community => &self.community,
            Edition::Premium => &self.premium,
        }
    }
}

/// Look up the dock manager range for `edition` in a parsed manifest.
///
/// The edition's own package is preferred; the other edition's package is
/// used when it is the only one declared.
pub fn lookup_version(manifest: &PackageManifest, edition: Edition) -> Resolution<String> {
    let (first, second) = match edition {
        Edition::Community => (COMMUNITY_DOCK_MANAGER, PREMIUM_DOCK_MANAGER),
        Edition::Premium => (PREMIUM_DOCK_MANAGER, COMMUNITY_DOCK_MANAGER),
    };

    let declared = |package: &str| manifest.dependency(package).filter(|v| !v.is_empty());

    match declared(first).or_else(|| declared(second)) {
        Some(version) => Resolution::Resolved(version.to_string()),
        None => Resolution::Fallback {
            value: FALLBACK_DM_VERSION.to_string(),
            reason: format!("No dock manager dependency found, using fallback {FALLBACK_DM_VERSION}"),
        },
    }
}

/// Read `<project_dir>/package.json` and resolve the range for `edition`
pub fn read_version(project_dir: &Path, edition: Edition) -> Resolution<String> {
    let path = project_dir.join(MANIFEST_FILE);
    let parsed = std::fs::read_to_string(&path)
        .map_err(|e| e.to_string())
        .and_then(|content| PackageManifest::from_json(&content).map_err(|e| e.to_string()));

    match parsed {
        Ok(manifest) => lookup_version(&manifest, edition),
        Err(error) => Resolution::Fallback {
            value: FALLBACK_DM_VERSION.to_string(),
            reason: format!(
                "Could not read project package.json: {error}; using fallback {FALLBACK_DM_VERSION}"
            ),
        },
    }
}

/// Resolve the range for `edition`, reporting a warning on fallback
pub fn resolve_version(project_dir: &Path, edition: Edition, reporter: &dyn Reporter) -> String {
    let resolution = read_version(project_dir, edition);
    if let Resolution::Fallback { reason, .. } = &resolution {
        tracing::warn!(project = %project_dir.display(), %edition, "{reason}");
        reporter.warn(reason);
    }
    resolution.into_value()
}
