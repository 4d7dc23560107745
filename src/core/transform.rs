//! Content rewriting
//!
//! The only two mutations ever applied to file bytes: redirecting premium
//! dock manager imports to the community package, and dropping path
//! aliases from the compiler config. Both are pure string functions.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::config::packages::{COMMUNITY_DOCK_MANAGER, PREMIUM_DOCK_MANAGER};

fn loader_import() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r#"from ['"]{}/loader['"]"#,
            regex::escape(PREMIUM_DOCK_MANAGER)
        ))
        .expect("Invalid loader import pattern")
    })
}

fn root_import() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!(
            r#"from ['"]{}['"]"#,
            regex::escape(PREMIUM_DOCK_MANAGER)
        ))
        .expect("Invalid root import pattern")
    })
}

/// Rewrite premium dock manager imports to the community package.
///
/// Handles both the `loader` sub-path and the package root, with either
/// quote style. Replacements never contain the scoped name, so applying
/// this twice is the same as applying it once.
pub fn rewrite_imports_for_community(source: &str) -> String {
    let loader = format!("from '{COMMUNITY_DOCK_MANAGER}/loader'");
    let root = format!("from '{COMMUNITY_DOCK_MANAGER}'");

    let step = loader_import().replace_all(source, loader.as_str());
    root_import().replace_all(&step, root.as_str()).into_owned()
}

/// Remove `compilerOptions.paths` and re-serialize with 2-space indentation.
pub fn try_strip_path_aliases(json: &str) -> Result<String, serde_json::Error> {
    let mut config: Value = serde_json::from_str(json)?;
    if let Some(options) = config
        .get_mut("compilerOptions")
        .and_then(Value::as_object_mut)
    {
        options.remove("paths");
    }
    serde_json::to_string_pretty(&config)
}

/// Like [`try_strip_path_aliases`], but returns the input unchanged when it
/// is not valid JSON.
pub fn strip_path_aliases(json: &str) -> String {
    try_strip_path_aliases(json).unwrap_or_else(|e| {
        tracing::debug!("Leaving path aliases in place: {e}");
        json.to_string()
    })
}
