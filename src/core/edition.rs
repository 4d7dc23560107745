//! Output editions
//!
//! A project is packaged either as the premium edition, which depends on the
//! scoped dock manager package, or as the community edition, which depends
//! on the public one. `both` only exists at the request level and expands
//! into two independent builds.

use std::fmt;
use std::str::FromStr;

use crate::config::packages::{COMMUNITY_DOCK_MANAGER, PREMIUM_DOCK_MANAGER};
use crate::error::DemopackError;

/// One packaged flavor of a project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edition {
    Premium,
    Community,
}

impl Edition {
    /// Lowercase tag used in file names and manifest name suffixes
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Premium => "premium",
            Self::Community => "community",
        }
    }

    /// Uppercase label used in reports and the generated readme
    pub fn label(self) -> String {
        self.as_str().to_uppercase()
    }

    /// Dock manager package this edition depends on
    pub fn dock_manager_package(self) -> &'static str {
        match self {
            Self::Premium => PREMIUM_DOCK_MANAGER,
            Self::Community => COMMUNITY_DOCK_MANAGER,
        }
    }

    /// Dock manager package this edition must not depend on
    pub fn other_dock_manager_package(self) -> &'static str {
        match self {
            Self::Premium => COMMUNITY_DOCK_MANAGER,
            Self::Community => PREMIUM_DOCK_MANAGER,
        }
    }

    /// Archive file name for a project in this edition
    pub fn archive_name(self, project: &str) -> String {
        format!("{project}-{}.zip", self.as_str())
    }
}

impl fmt::Display for Edition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which editions a run should produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditionSelector {
    #[default]
    Premium,
    Community,
    Both,
}

impl EditionSelector {
    /// Editions to build, in build order (premium first)
    pub fn editions(self) -> &'static [Edition] {
        match self {
            Self::Premium => &[Edition::Premium],
            Self::Community => &[Edition::Community],
            Self::Both => &[Edition::Premium, Edition::Community],
        }
    }
}

impl FromStr for EditionSelector {
    type Err = DemopackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "premium" => Ok(Self::Premium),
            "community" => Ok(Self::Community),
            "both" => Ok(Self::Both),
            _ => Err(DemopackError::UnknownEdition(s.to_string())),
        }
    }
}

impl fmt::Display for EditionSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Premium => "premium",
            Self::Community => "community",
            Self::Both => "both",
        })
    }
}
