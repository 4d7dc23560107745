//! npm package names

/// Scoped dock manager package shipped to premium customers
pub const PREMIUM_DOCK_MANAGER: &str = "@infragistics/igniteui-dockmanager";

/// Public dock manager package
pub const COMMUNITY_DOCK_MANAGER: &str = "igniteui-dockmanager";

/// Theming package required by the standalone build
pub const THEMING_PACKAGE: &str = "igniteui-theming";
