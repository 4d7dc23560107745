//! Default configuration values

/// Dock manager version range used when a project declares neither package
pub const FALLBACK_DM_VERSION: &str = "^1.16.1";

/// Theming package version injected into manifests that lack it
pub const DEFAULT_THEMING_VERSION: &str = "v19.3.0-beta.3";

/// Dev server port of the generated standalone build config
pub const STANDALONE_PORT: u16 = 3000;

/// Sass include paths of the generated standalone build config
pub const SASS_INCLUDE_PATHS: &[&str] = &["node_modules"];

/// Deflate level for produced archives
pub const ZIP_COMPRESSION_LEVEL: i64 = 6;

/// Environment variable overriding the repository root
pub const ENV_ROOT_DIR: &str = "DEMOPACK_ROOT";

/// Names never copied into an archive, at any depth
pub const SKIP_NAMES: &[&str] = &[
    "node_modules",
    "dist",
    "build",
    ".git",
    ".gitignore",
    ".DS_Store",
    "Thumbs.db",
    ".env",
    ".env.local",
    ".vscode",
    ".idea",
];

/// Extensions eligible for community import rewriting
pub const CODE_EXTENSIONS: &[&str] = &["ts", "js", "mjs", "cjs"];

/// Build-tool config file names replaced by the standalone template
pub const BUILD_CONFIG_NAMES: &[&str] = &["vite.config.js", "vite.config.ts"];

/// Canonical archive name of the generated build config
pub const BUILD_CONFIG_OUTPUT: &str = "vite.config.ts";

/// Project manifest file name
pub const MANIFEST_FILE: &str = "package.json";

/// Compiler config whose path aliases are stripped (project-relative)
pub const PATH_ALIAS_FILE: &str = "tsconfig.json";

/// Generated readme file name
pub const README_FILE: &str = "README.md";

/// Scripts written into every packaged manifest
pub const STANDALONE_SCRIPTS: &[(&str, &str)] = &[
    ("dev", "vite"),
    ("build", "npm run compile-theme && tsc && vite build"),
    ("preview", "vite preview"),
    (
        "compile-theme",
        "sass --load-path=node_modules src/styles/theme.scss:src/styles/theme.css",
    ),
    (
        "watch-theme",
        "sass --watch --load-path=node_modules src/styles:src/styles src/styles/theme.scss:src/styles/theme.css",
    ),
];

/// Monorepo-only dev dependencies dropped from packaged manifests
pub const DEV_ONLY_DEPENDENCIES: &[&str] = &["concurrently", "tsx"];
